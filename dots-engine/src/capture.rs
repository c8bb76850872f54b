use std::collections::BTreeSet;

use crate::Point;
use crate::polygon::Cycle;

/// Union of the interiors of every cycle closed by one move.
///
/// A cycle's own vertices are never part of its interior. Overlapping
/// cycles, including the same loop walked in both directions, collapse into
/// a single set whose size is the capture size of the move.
pub fn resolve_region(cycles: &[Cycle]) -> BTreeSet<Point> {
    cycles.iter().flat_map(Cycle::interior).collect()
}
