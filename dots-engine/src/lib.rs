//! Rules engine for the Dots territory-capture game.
//!
//! Black and Red take turns placing stones. A stone that closes a loop of
//! its owner's stones around at least one opposing stone captures every
//! cell strictly inside that loop.

pub mod action;
pub mod board;
pub mod capture;
pub mod cell;
pub mod cycle;
pub mod engine;
pub mod error;
pub mod features;
pub mod player;
pub mod playout;
pub mod polygon;
pub mod turn;

pub type Point = (u8, u8);

pub use board::{Board, Captures, Traces};
pub use cell::Cell;
pub use engine::{Engine, GameState, Stage, Step};
pub use error::DotsError;
pub use player::Player;
pub use polygon::Cycle;
pub use turn::Turn;
