use std::fmt;

use crate::player::Player;

pub const DISABLED: u8 = 1;
pub const ACTIVE: u8 = 2;
pub const BLACK: u8 = 4;
pub const RED: u8 = 8;

/// Status of a single board cell.
///
/// A cell only ever moves forward: `Empty -> Active -> Disabled`, or
/// `Empty -> Disabled` when an empty cell ends up inside a captured loop.
/// The owner survives capture so finished games can still be read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Active(Player),
    Disabled(Option<Player>),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn is_active(self) -> bool {
        matches!(self, Cell::Active(_))
    }

    pub fn is_disabled(self) -> bool {
        matches!(self, Cell::Disabled(_))
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Active(p) => Some(p),
            Cell::Disabled(p) => p,
        }
    }

    /// The same cell after capture. Already disabled cells are unchanged.
    pub fn disabled(self) -> Self {
        match self {
            Cell::Empty => Cell::Disabled(None),
            Cell::Active(p) => Cell::Disabled(Some(p)),
            d @ Cell::Disabled(_) => d,
        }
    }

    /// Packed flag view used at the feature and serialization boundary.
    pub fn flags(self) -> u8 {
        let status = match self {
            Cell::Empty => 0,
            Cell::Active(_) => ACTIVE,
            Cell::Disabled(_) => DISABLED,
        };
        status | self.owner().map_or(0, Player::flag)
    }

    /// Inverse of [`Cell::flags`]. Rejects combinations no game can reach.
    pub fn from_flags(flags: u8) -> Option<Self> {
        let owner = match flags & (BLACK | RED) {
            0 => None,
            BLACK => Some(Player::Black),
            RED => Some(Player::Red),
            _ => return None,
        };
        match (flags & !(BLACK | RED), owner) {
            (0, None) => Some(Cell::Empty),
            (ACTIVE, Some(p)) => Some(Cell::Active(p)),
            (DISABLED, owner) => Some(Cell::Disabled(owner)),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, ".");
        }
        let flags = self.flags();
        if flags & DISABLED != 0 {
            write!(f, "D")?;
        }
        if flags & ACTIVE != 0 {
            write!(f, "E")?;
        }
        if let Some(p) = self.owner() {
            write!(f, "{}", p.letter())?;
        }
        Ok(())
    }
}
