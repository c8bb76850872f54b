//! Integer action encoding used at the engine boundary.
//!
//! `action = x * rows + y`, which on square boards is the usual
//! `x = action / width, y = action % height` numbering.

use crate::Point;
use crate::error::DotsError;

pub fn action_count(cols: u8, rows: u8) -> usize {
    cols as usize * rows as usize
}

pub fn encode((x, y): Point, rows: u8) -> usize {
    x as usize * rows as usize + y as usize
}

pub fn decode(action: usize, cols: u8, rows: u8) -> Result<Point, DotsError> {
    if action >= action_count(cols, rows) {
        return Err(DotsError::InvalidAction(action));
    }
    let rows = rows as usize;
    Ok(((action / rows) as u8, (action % rows) as u8))
}
