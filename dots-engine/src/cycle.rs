use std::collections::HashSet;

use arrayvec::ArrayVec;

use crate::Point;
use crate::board::neighbors;
use crate::polygon::Cycle;

/// One level of the depth-first search: a path vertex and the friendly
/// neighbors still to be tried from it.
struct Frame {
    next: ArrayVec<Point, 8>,
    cursor: usize,
}

/// Lazily enumerates every simple cycle through a start stone.
///
/// The search keeps a single path plus a membership set and an explicit
/// frame stack instead of recursing. Popping a frame drops its vertex from
/// the path, so a branch never sees vertices added by a sibling branch.
/// Every loop is produced once per direction of travel.
pub struct SimpleCycles<'a> {
    stones: &'a HashSet<Point>,
    cols: u8,
    rows: u8,
    start: Point,
    path: Vec<Point>,
    on_path: HashSet<Point>,
    stack: Vec<Frame>,
}

/// All simple cycles through `start` in the graph of `stones`, where two
/// stones are joined when they are 8-adjacent. Empty if `start` is not one
/// of `stones`.
pub fn simple_cycles(stones: &HashSet<Point>, start: Point, cols: u8, rows: u8) -> SimpleCycles<'_> {
    let mut iter = SimpleCycles {
        stones,
        cols,
        rows,
        start,
        path: Vec::new(),
        on_path: HashSet::new(),
        stack: Vec::new(),
    };
    if stones.contains(&start) {
        iter.enter(start);
    }
    iter
}

/// Cycles through `start` that strictly enclose at least one `opponent` stone.
pub fn enclosing_cycles(
    own: &HashSet<Point>,
    opponent: &HashSet<Point>,
    start: Point,
    cols: u8,
    rows: u8,
) -> Vec<Cycle> {
    simple_cycles(own, start, cols, rows)
        .filter(|cycle| {
            let encloses = cycle.encloses_any(opponent);
            if encloses {
                tracing::trace!(len = cycle.len(), ?start, "enclosing cycle");
            }
            encloses
        })
        .collect()
}

impl SimpleCycles<'_> {
    fn enter(&mut self, v: Point) {
        let next = neighbors(v, self.cols, self.rows)
            .into_iter()
            .filter(|n| self.stones.contains(n))
            .collect();
        self.path.push(v);
        self.on_path.insert(v);
        self.stack.push(Frame { next, cursor: 0 });
    }

    fn leave(&mut self) {
        self.stack.pop();
        if let Some(v) = self.path.pop() {
            self.on_path.remove(&v);
        }
    }
}

impl Iterator for SimpleCycles<'_> {
    type Item = Cycle;

    fn next(&mut self) -> Option<Cycle> {
        while let Some(top) = self.stack.last_mut() {
            let candidate = top.next.get(top.cursor).copied();
            top.cursor += 1;

            let Some(nv) = candidate else {
                self.leave();
                continue;
            };

            if nv == self.start {
                if self.path.len() >= 3 {
                    if let Some(cycle) = Cycle::new(self.path.clone()) {
                        return Some(cycle);
                    }
                }
            } else if !self.on_path.contains(&nv) {
                self.enter(nv);
            }
        }
        None
    }
}
