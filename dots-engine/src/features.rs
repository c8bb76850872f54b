//! Numeric planes for consumers that want the board as flat tensors.
//!
//! Every plane has `cols * rows` entries laid out in action order, so
//! `plane[action]` is the value for the cell that action targets.

use crate::action::{action_count, decode};
use crate::board::Board;
use crate::error::DotsError;
use crate::player::Player;

/// Two planes: raw `flags & owner` for the player to move, then for the
/// opponent. Values stay as the owner bit (4 or 8), not 0/1.
pub fn feature(board: &Board, mover: Player) -> Vec<f32> {
    let flags = board.flags();
    let mut planes = Vec::with_capacity(flags.len() * 2);
    for owner in [mover, mover.opp()] {
        let bit = owner.flag();
        planes.extend(flags.iter().map(|&f| (f & bit) as f32));
    }
    planes
}

/// Three planes: Black ownership, Red ownership (0/1, captured stones
/// included), and a uniform plane of `1` when Black is to move, `-1` otherwise.
pub fn observation(board: &Board, mover: Player) -> Vec<i32> {
    let flags = board.flags();
    let mut planes = Vec::with_capacity(flags.len() * 3);
    for owner in [Player::Black, Player::Red] {
        let bit = owner.flag();
        planes.extend(flags.iter().map(|&f| i32::from(f & bit != 0)));
    }
    planes.extend(std::iter::repeat_n(i32::from(mover.to_int()), flags.len()));
    planes
}

/// One-hot plane marking the cell targeted by `action`.
pub fn action_feature(action: usize, cols: u8, rows: u8) -> Result<Vec<f32>, DotsError> {
    decode(action, cols, rows)?;
    let mut plane = vec![0.0; action_count(cols, rows)];
    plane[action] = 1.0;
    Ok(plane)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        let mut board = Board::with_dimensions(3, 3);
        board.place((0, 0), Player::Black).unwrap();
        board.place((2, 2), Player::Red).unwrap();
        board
    }

    #[test]
    fn feature_keeps_raw_owner_bits() {
        let board = sample();
        let planes = feature(&board, Player::Black);
        assert_eq!(planes.len(), 18);
        assert_eq!(planes[0], 4.0);
        assert_eq!(planes[9 + 8], 8.0);
        assert_eq!(planes.iter().filter(|&&v| v != 0.0).count(), 2);
    }

    #[test]
    fn feature_puts_mover_first() {
        let board = sample();
        let planes = feature(&board, Player::Red);
        assert_eq!(planes[8], 8.0);
        assert_eq!(planes[9], 4.0);
    }

    #[test]
    fn observation_planes() {
        let board = sample();
        let obs = observation(&board, Player::Red);
        assert_eq!(obs.len(), 27);
        assert_eq!(obs[0], 1);
        assert_eq!(obs[9 + 8], 1);
        assert_eq!(obs[..18].iter().sum::<i32>(), 2);
        assert!(obs[18..].iter().all(|&v| v == -1));

        let obs = observation(&board, Player::Black);
        assert!(obs[18..].iter().all(|&v| v == 1));
    }

    #[test]
    fn observation_includes_captured_stones() {
        let mut board = Board::with_dimensions(3, 3);
        board.place((1, 1), Player::Red).unwrap();
        for p in [(1, 0), (0, 1), (2, 1)] {
            board.place(p, Player::Black).unwrap();
        }
        assert_eq!(board.place((1, 2), Player::Black), Ok(1));
        let obs = observation(&board, Player::Red);
        // (1, 1) is action 4
        assert_eq!(obs[9 + 4], 1);
        let planes = feature(&board, Player::Red);
        assert_eq!(planes[4], 8.0);
    }

    #[test]
    fn action_plane() {
        let plane = action_feature(4, 3, 3).unwrap();
        assert_eq!(plane.len(), 9);
        assert_eq!(plane[4], 1.0);
        assert_eq!(plane.iter().sum::<f32>(), 1.0);
        assert_eq!(action_feature(9, 3, 3), Err(DotsError::InvalidAction(9)));
    }
}
