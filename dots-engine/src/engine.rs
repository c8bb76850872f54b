use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::action::{action_count, decode, encode};
use crate::board::{Board, Captures};
use crate::cell::Cell;
use crate::error::DotsError;
use crate::features;
use crate::player::Player;
use crate::turn::Turn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    BlackToPlay,
    RedToPlay,
    Done,
}

impl Stage {
    pub fn is_play(&self) -> bool {
        matches!(self, Stage::BlackToPlay | Stage::RedToPlay)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::BlackToPlay => write!(f, "black_to_play"),
            Stage::RedToPlay => write!(f, "red_to_play"),
            Stage::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black_to_play" => Ok(Stage::BlackToPlay),
            "red_to_play" => Ok(Stage::RedToPlay),
            "done" => Ok(Stage::Done),
            _ => Err(format!("unknown stage: {s}")),
        }
    }
}

/// Serializable snapshot of a game. Cells are packed flags in action order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub cols: u8,
    pub rows: u8,
    pub cells: Vec<u8>,
    pub mover: Player,
    pub captures: Captures,
    #[serde(default)]
    pub moves: Vec<Turn>,
}

/// Result of [`Engine::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub observation: Vec<i32>,
    pub captured: usize,
    pub terminal: bool,
}

#[derive(Debug, Clone)]
pub struct Engine {
    cols: u8,
    rows: u8,
    board: Board,
    mover: Player,
    moves: Vec<Turn>,
}

impl Engine {
    pub fn new(cols: u8, rows: u8) -> Self {
        Engine {
            cols,
            rows,
            board: Board::with_dimensions(cols, rows),
            mover: Player::Black,
            moves: Vec::new(),
        }
    }

    /// Replay `moves` from an empty board.
    pub fn with_moves(cols: u8, rows: u8, moves: &[Turn]) -> Result<Self, DotsError> {
        let mut engine = Self::new(cols, rows);
        for turn in moves {
            engine.try_play(turn.player, turn.pos)?;
        }
        Ok(engine)
    }

    // -- Accessors --

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[Turn] {
        &self.moves
    }

    pub fn captures(&self) -> &Captures {
        self.board.captures()
    }

    pub fn cell_at(&self, point: Point) -> Option<Cell> {
        self.board.cell_at(point)
    }

    pub fn current_player(&self) -> Player {
        self.mover
    }

    /// Cells captured by the most recent move, 0 before the first move.
    pub fn last_capture(&self) -> usize {
        self.moves.last().map_or(0, |t| t.captured)
    }

    pub fn action_count(&self) -> usize {
        action_count(self.cols, self.rows)
    }

    // -- Game actions --

    /// Play the cell encoded by `action` for the player to move.
    /// Returns the number of cells captured by the move.
    pub fn play(&mut self, action: usize) -> Result<usize, DotsError> {
        let point = decode(action, self.cols, self.rows)?;
        self.try_play(self.mover, point)
    }

    pub fn try_play(&mut self, player: Player, point: Point) -> Result<usize, DotsError> {
        if player != self.mover {
            return Err(DotsError::OutOfTurn);
        }

        let captured = self.board.place(point, player)?;
        self.moves.push(Turn {
            player,
            pos: point,
            captured,
        });
        self.mover = player.opp();
        Ok(captured)
    }

    /// Play `action` and report what an environment loop needs to see.
    pub fn step(&mut self, action: usize) -> Result<Step, DotsError> {
        let captured = self.play(action)?;
        Ok(Step {
            observation: self.observation(),
            captured,
            terminal: self.terminal(),
        })
    }

    pub fn is_legal(&self, point: Point) -> bool {
        self.board.cell_at(point).is_some_and(Cell::is_empty)
    }

    /// Actions whose cell is still empty, ascending.
    pub fn legal_actions(&self) -> Vec<usize> {
        self.board
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(a, _)| a)
            .collect()
    }

    pub fn terminal(&self) -> bool {
        self.board.is_full()
    }

    /// 1 if Black has more active stones, -1 if Red does, 0 on a tie.
    pub fn terminal_score(&self) -> i8 {
        self.board.score()
    }

    pub fn stage(&self) -> Stage {
        if self.terminal() {
            Stage::Done
        } else {
            match self.mover {
                Player::Black => Stage::BlackToPlay,
                Player::Red => Stage::RedToPlay,
            }
        }
    }

    // -- Feature planes --

    pub fn feature(&self) -> Vec<f32> {
        features::feature(&self.board, self.mover)
    }

    pub fn observation(&self) -> Vec<i32> {
        features::observation(&self.board, self.mover)
    }

    pub fn action_feature(&self, action: usize) -> Result<Vec<f32>, DotsError> {
        features::action_feature(action, self.cols, self.rows)
    }

    pub fn action_of(&self, point: Point) -> Option<usize> {
        self.board.on_board(point).then(|| encode(point, self.rows))
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        GameState {
            cols: self.cols,
            rows: self.rows,
            cells: self.board.flags(),
            mover: self.mover,
            captures: self.board.captures().clone(),
            moves: self.moves.clone(),
        }
    }

    pub fn from_game_state(state: GameState) -> Result<Self, DotsError> {
        let cells = state
            .cells
            .iter()
            .enumerate()
            .map(|(i, &f)| {
                Cell::from_flags(f).ok_or_else(|| {
                    DotsError::MalformedState(format!("invalid flags {f} at action {i}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let board = Board::from_state(state.cols, state.rows, cells, state.captures)?;

        Ok(Engine {
            cols: state.cols,
            rows: state.rows,
            board,
            mover: state.mover,
            moves: state.moves,
        })
    }
}
