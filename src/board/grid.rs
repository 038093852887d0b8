//! The 9×9 grid of cells.
//!
//! Cells live in a flat 81-element row-major array; a coordinate resolves
//! to its cell in one bounds test plus one index computation. Each cell
//! holds four border slots and an occupancy flag. Board edges are a
//! first-class border state, not a sentinel: an `Edge` slot can never
//! become `Fenced`.

use rustc_hash::FxHashSet;
use std::fmt;

use crate::core::coord::{Coord, Direction, Orientation, BOARD_SIZE};

const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// State of one border slot of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Border {
    /// Board boundary. Immutable; never becomes `Fenced`.
    Edge,
    /// No fence; pawns may cross.
    Open,
    /// A fence blocks crossing.
    Fenced,
}

impl Border {
    /// Whether a pawn may cross this border with a single step.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Border::Open)
    }

    /// Whether this border stops a straight jump behind the opponent,
    /// enabling the diagonal branch. The board edge counts the same as a
    /// fence here.
    #[must_use]
    pub const fn blocks_jump(self) -> bool {
        matches!(self, Border::Fenced | Border::Edge)
    }
}

/// One cell: four border slots plus an occupancy flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    borders: [Border; 4],
    occupied: bool,
}

impl Cell {
    const fn interior() -> Self {
        Self {
            borders: [Border::Open; 4],
            occupied: false,
        }
    }

    /// The state of the border slot facing `side`.
    #[must_use]
    pub fn border(&self, side: Direction) -> Border {
        self.borders[side.index()]
    }

    /// Whether a pawn sits on this cell.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }
}

/// The full 9×9 grid plus a ledger of placed fences.
///
/// Mutation is crate-internal: the game controller applies deltas the
/// legality engine has already approved. External callers get a read-only
/// view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    fences: FxHashSet<(Orientation, Coord)>,
}

impl Board {
    /// Create an empty board: edges marked, all interior borders open,
    /// no pawns.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [Cell::interior(); CELL_COUNT];
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let at = Coord::new(col, row);
                let cell = &mut cells[at.index()];
                if row == 0 {
                    cell.borders[Direction::Up.index()] = Border::Edge;
                }
                if row == BOARD_SIZE - 1 {
                    cell.borders[Direction::Down.index()] = Border::Edge;
                }
                if col == 0 {
                    cell.borders[Direction::Left.index()] = Border::Edge;
                }
                if col == BOARD_SIZE - 1 {
                    cell.borders[Direction::Right.index()] = Border::Edge;
                }
            }
        }
        Self {
            cells,
            fences: FxHashSet::default(),
        }
    }

    /// The cell at `at`. Panics if `at` is off the board.
    #[must_use]
    pub fn cell(&self, at: Coord) -> &Cell {
        assert!(at.in_bounds(), "cell lookup off the board: {at}");
        &self.cells[at.index()]
    }

    /// The state of the border of cell `at` facing `side`.
    #[must_use]
    pub fn border(&self, at: Coord, side: Direction) -> Border {
        self.cell(at).border(side)
    }

    /// Whether a pawn sits on cell `at`.
    #[must_use]
    pub fn is_occupied(&self, at: Coord) -> bool {
        self.cell(at).is_occupied()
    }

    /// Whether a fence of `orientation` was placed with anchor `at`.
    #[must_use]
    pub fn has_fence(&self, orientation: Orientation, at: Coord) -> bool {
        self.fences.contains(&(orientation, at))
    }

    /// All placed fences, as (orientation, anchor) pairs.
    pub fn fences(&self) -> impl Iterator<Item = (Orientation, Coord)> + '_ {
        self.fences.iter().copied()
    }

    /// All occupied cells.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).filter_map(move |col| {
                let at = Coord::new(col, row);
                self.cells[at.index()].occupied.then_some(at)
            })
        })
    }

    pub(crate) fn set_occupied(&mut self, at: Coord, occupied: bool) {
        assert!(at.in_bounds(), "occupancy update off the board: {at}");
        self.cells[at.index()].occupied = occupied;
    }

    /// Apply a fence placement the legality engine has approved.
    ///
    /// The update is atomic over the two affected cells: the anchor's
    /// facing slot and the matching slot of the neighboring cell in the
    /// perpendicular run both become `Fenced`.
    pub(crate) fn place_fence(&mut self, orientation: Orientation, at: Coord) {
        let side = orientation.anchor_side();
        let paired = at.step(side);
        debug_assert!(
            self.border(at, side).is_open() && self.border(paired, side.opposite()).is_open(),
            "placing {orientation} fence at {at} over a non-open border"
        );

        self.cells[at.index()].borders[side.index()] = Border::Fenced;
        self.cells[paired.index()].borders[side.opposite().index()] = Border::Fenced;
        self.fences.insert((orientation, at));
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic dump: one line per row, each cell as `<col><row>` followed
/// by its fenced sides (`t`, `r`, `b`, `l`) and `P` when occupied.
/// Read-only, for manual inspection; not part of gameplay.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let at = Coord::new(col, row);
                let cell = self.cell(at);
                let mut tags = String::new();
                for (ch, side) in [
                    ('t', Direction::Up),
                    ('r', Direction::Right),
                    ('b', Direction::Down),
                    ('l', Direction::Left),
                ] {
                    if cell.border(side) == Border::Fenced {
                        tags.push(ch);
                    }
                }
                if cell.is_occupied() {
                    tags.push('P');
                }
                write!(f, "{col}{row}{tags:<6}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
