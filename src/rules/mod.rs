//! Move and fence legality.
//!
//! Pure decision logic: given the current board and pawn records plus a
//! proposed action, decide legal/illegal and, when legal, produce the
//! exact delta the controller should apply. Nothing in this module
//! mutates state.

pub mod engine;

pub use engine::{check_fence, check_move, legal_moves, FenceDelta, MoveDelta};
