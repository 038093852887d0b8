//! Board coordinates, directions, and fence orientation.
//!
//! The board is a fixed 9×9 grid. Columns run left to right, rows run top
//! to bottom: row 0 is the top edge (player One's starting row), row 8 the
//! bottom edge (player Two's). Coordinates are stored as signed bytes so
//! that caller-supplied requests and neighbor arithmetic can land off the
//! board; [`Coord::in_bounds`] is a single range test.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width and height of the board in cells.
pub const BOARD_SIZE: i8 = 9;

/// A cell coordinate: (column, row).
///
/// Values outside `0..=8` are representable (requests are validated, not
/// trusted) but never name a cell on the board.
///
/// ```
/// use quoridor::core::Coord;
///
/// assert!(Coord::new(4, 0).in_bounds());
/// assert!(!Coord::new(9, 4).in_bounds());
/// assert!(!Coord::new(0, -1).in_bounds());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub col: i8,
    pub row: i8,
}

impl Coord {
    /// Create a coordinate. No bounds check is applied here.
    #[must_use]
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// Whether this coordinate names a cell on the 9×9 board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        0 <= self.col && self.col < BOARD_SIZE && 0 <= self.row && self.row < BOARD_SIZE
    }

    /// The neighboring coordinate one step in `dir`. May be off the board.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dc, dr) = dir.delta();
        Self::new(self.col + dc, self.row + dr)
    }

    /// Direction of `other` relative to `self`, if orthogonally adjacent.
    #[must_use]
    pub fn toward(self, other: Coord) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| self.step(d) == other)
    }

    /// Flat index into an 81-cell row-major array. Caller must have
    /// bounds-checked first.
    #[must_use]
    pub(crate) fn index(self) -> usize {
        debug_assert!(self.in_bounds(), "indexing off-board coordinate {self}");
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// The four sides of a cell. `Up` points toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions, in border-slot order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Column/row offset of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// The opposing direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Border-slot index within a cell.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Whether this direction runs along the vertical axis.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Orientation of a fence segment.
///
/// A horizontal fence lies along the top border of its anchor cell; a
/// vertical fence lies along the left border. The two orientations consume
/// different border slots, so both may be anchored at the same coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The border slot of the anchor cell this orientation occupies.
    #[must_use]
    pub(crate) const fn anchor_side(self) -> Direction {
        match self {
            Orientation::Horizontal => Direction::Up,
            Orientation::Vertical => Direction::Left,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Error returned when parsing an [`Orientation`] from an unrecognized token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOrientationError;

impl fmt::Display for ParseOrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "orientation must be \"horizontal\"/\"h\" or \"vertical\"/\"v\"")
    }
}

impl std::error::Error for ParseOrientationError {}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    /// Parse the two recognized tokens, long or short form.
    ///
    /// ```
    /// use quoridor::core::Orientation;
    ///
    /// assert_eq!("horizontal".parse(), Ok(Orientation::Horizontal));
    /// assert_eq!("v".parse(), Ok(Orientation::Vertical));
    /// assert!("diagonal".parse::<Orientation>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            "vertical" | "v" => Ok(Orientation::Vertical),
            _ => Err(ParseOrientationError),
        }
    }
}
