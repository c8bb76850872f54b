use std::collections::{BTreeSet, HashSet};
use std::fmt;

use arrayvec::ArrayVec;

use crate::Point;
use crate::capture::resolve_region;
use crate::cell::Cell;
use crate::cycle::enclosing_cycles;
use crate::error::DotsError;
use crate::player::Player;

/// Cells captured by each player over the game.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Captures {
    pub black: u32,
    pub red: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black,
            Player::Red => self.red,
        }
    }

    fn add(&mut self, player: Player, count: u32) {
        match player {
            Player::Black => self.black += count,
            Player::Red => self.red += count,
        }
    }
}

/// Active (placed, not captured) stones of each player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Traces {
    black: HashSet<Point>,
    red: HashSet<Point>,
}

impl Traces {
    pub fn get(&self, player: Player) -> &HashSet<Point> {
        match player {
            Player::Black => &self.black,
            Player::Red => &self.red,
        }
    }

    fn get_mut(&mut self, player: Player) -> &mut HashSet<Point> {
        match player {
            Player::Black => &mut self.black,
            Player::Red => &mut self.red,
        }
    }
}

/// The 8-connected neighbors of a point that are on a `cols x rows` board,
/// in ascending `(x, y)` order.
pub fn neighbors((x, y): Point, cols: u8, rows: u8) -> ArrayVec<Point, 8> {
    let mut result = ArrayVec::new();
    let xs = x.saturating_sub(1)..=x.saturating_add(1).min(cols.saturating_sub(1));
    for nx in xs {
        let ys = y.saturating_sub(1)..=y.saturating_add(1).min(rows.saturating_sub(1));
        for ny in ys {
            if (nx, ny) != (x, y) {
                result.push((nx, ny));
            }
        }
    }
    result
}

/// The Dots board stored as a flat array in action order (`x * rows + y`).
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: Vec<Cell>,
    cols: u8,
    rows: u8,
    traces: Traces,
    captures: Captures,
}

impl Board {
    /// Create an empty board with the given dimensions.
    pub fn with_dimensions(cols: u8, rows: u8) -> Self {
        Board {
            cells: vec![Cell::Empty; cols as usize * rows as usize],
            cols,
            rows,
            traces: Traces::default(),
            captures: Captures::new(),
        }
    }

    /// Restore a board from its cells. Traces are rebuilt from active cells.
    pub fn from_state(
        cols: u8,
        rows: u8,
        cells: Vec<Cell>,
        captures: Captures,
    ) -> Result<Self, DotsError> {
        let expected = cols as usize * rows as usize;
        if cells.len() != expected {
            return Err(DotsError::MalformedState(format!(
                "expected {expected} cells, got {}",
                cells.len()
            )));
        }

        let mut board = Board {
            cells,
            cols,
            rows,
            traces: Traces::default(),
            captures,
        };
        for x in 0..cols {
            for y in 0..rows {
                if let Cell::Active(p) = board.cells[board.idx(x, y)] {
                    board.traces.get_mut(p).insert((x, y));
                }
            }
        }
        Ok(board)
    }

    // -- Accessors --

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn traces(&self) -> &Traces {
        &self.traces
    }

    pub fn trace(&self, player: Player) -> &HashSet<Point> {
        self.traces.get(player)
    }

    pub fn cell_at(&self, point: Point) -> Option<Cell> {
        if self.on_board(point) {
            Some(self.cells[self.idx(point.0, point.1)])
        } else {
            None
        }
    }

    pub fn on_board(&self, (x, y): Point) -> bool {
        x < self.cols && y < self.rows
    }

    /// Packed status flags of every cell, in action order.
    pub fn flags(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.flags()).collect()
    }

    pub fn neighbors(&self, point: Point) -> ArrayVec<Point, 8> {
        neighbors(point, self.cols, self.rows)
    }

    // -- Counts --

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_active()).count()
    }

    pub fn disabled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_disabled()).count()
    }

    /// No empty cell is left.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c.is_empty())
    }

    /// Sign of (Black active stones - Red active stones): 1, 0 or -1.
    /// Only the winner is reported, never the margin.
    pub fn score(&self) -> i8 {
        let (black, red) = self.cells.iter().fold((0i64, 0i64), |(b, r), c| match c {
            Cell::Active(Player::Black) => (b + 1, r),
            Cell::Active(Player::Red) => (b, r + 1),
            _ => (b, r),
        });
        (black - red).clamp(-1, 1) as i8
    }

    // -- Game actions --

    /// Place a stone and resolve any enclosure it closes.
    /// Returns the number of cells captured by this move.
    pub fn place(&mut self, point: Point, player: Player) -> Result<usize, DotsError> {
        if !self.on_board(point) {
            return Err(DotsError::NotOnBoard);
        }
        let i = self.idx(point.0, point.1);
        if !self.cells[i].is_empty() {
            return Err(DotsError::Overwrite);
        }

        self.cells[i] = Cell::Active(player);
        self.traces.get_mut(player).insert(point);

        let cycles = enclosing_cycles(
            self.traces.get(player),
            self.traces.get(player.opp()),
            point,
            self.cols,
            self.rows,
        );
        if cycles.is_empty() {
            return Ok(0);
        }

        let region = resolve_region(&cycles);
        let newly = self.capture(&region);
        self.captures.add(player, newly as u32);
        tracing::debug!(
            %player,
            ?point,
            cycles = cycles.len(),
            captured = region.len(),
            "enclosure closed"
        );
        Ok(region.len())
    }

    /// Disable every cell of `region` and drop it from both traces.
    ///
    /// Cells already disabled, and points off the board, are skipped.
    /// Returns how many cells changed.
    pub fn capture(&mut self, region: &BTreeSet<Point>) -> usize {
        let mut changed = 0;
        for &pt in region {
            if !self.on_board(pt) {
                continue;
            }
            let i = self.idx(pt.0, pt.1);
            let cell = self.cells[i];
            if !cell.is_disabled() {
                self.cells[i] = cell.disabled();
                changed += 1;
            }
            self.traces.black.remove(&pt);
            self.traces.red.remove(&pt);
        }
        changed
    }

    // -- Internal helpers --

    #[inline]
    fn idx(&self, x: u8, y: u8) -> usize {
        x as usize * self.rows as usize + y as usize
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            let row: Vec<String> = (0..self.cols)
                .map(|x| format!("{:<3}", self.cells[self.idx(x, y)].to_string()))
                .collect();
            writeln!(f, "{}", row.concat().trim_end())?;
        }
        Ok(())
    }
}
