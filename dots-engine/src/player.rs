use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

use crate::cell::{BLACK, RED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Player {
    Black = 1,
    Red = -1,
}

impl Player {
    pub fn from_int(v: i8) -> Option<Self> {
        match v.signum() {
            1 => Some(Player::Black),
            -1 => Some(Player::Red),
            _ => None,
        }
    }

    pub fn to_int(self) -> i8 {
        self as i8
    }

    pub fn opp(self) -> Self {
        match self {
            Player::Black => Player::Red,
            Player::Red => Player::Black,
        }
    }

    /// Owner bit of this player in the packed flag view.
    pub fn flag(self) -> u8 {
        match self {
            Player::Black => BLACK,
            Player::Red => RED,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Player::Black => "B",
            Player::Red => "R",
        }
    }
}

impl Neg for Player {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::Red => write!(f, "Red"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_int_normalizes() {
        assert_eq!(Player::from_int(1), Some(Player::Black));
        assert_eq!(Player::from_int(7), Some(Player::Black));
        assert_eq!(Player::from_int(-1), Some(Player::Red));
        assert_eq!(Player::from_int(-42), Some(Player::Red));
        assert_eq!(Player::from_int(0), None);
    }

    #[test]
    fn opponent() {
        assert_eq!(Player::Black.opp(), Player::Red);
        assert_eq!(Player::Red.opp(), Player::Black);
        assert_eq!(-Player::Black, Player::Red);
    }

    #[test]
    fn owner_flags_are_distinct() {
        assert_eq!(Player::Black.flag(), BLACK);
        assert_eq!(Player::Red.flag(), RED);
        assert_eq!(Player::Black.flag() & Player::Red.flag(), 0);
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Player::Red).unwrap(), "-1");
        let p: Player = serde_json::from_str("1").unwrap();
        assert_eq!(p, Player::Black);
    }

    #[test]
    fn display() {
        assert_eq!(Player::Black.to_string(), "Black");
        assert_eq!(Player::Red.to_string(), "Red");
    }
}
