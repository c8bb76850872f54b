use serde::{Deserialize, Serialize};

use crate::Point;
use crate::player::Player;

/// A single move of a game and the number of cells it captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub player: Player,
    pub pos: Point,
    #[serde(default)]
    pub captured: usize,
}

impl Turn {
    pub fn play(player: Player, pos: Point) -> Self {
        Turn {
            player,
            pos,
            captured: 0,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured > 0
    }
}
