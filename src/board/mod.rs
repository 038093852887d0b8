//! Board storage: cells, borders, occupancy, placed fences.
//!
//! The board owns no game rules. It answers, per cell, which sides are
//! fenced (or the board edge) and whether a pawn sits on the cell, and it
//! applies the atomic two-cell border update of a fence placement. The
//! legality engine decides *whether* to apply anything.

pub mod grid;

pub use grid::{Board, Border, Cell};
