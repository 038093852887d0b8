//! Game controller: validation, application, turn and win tracking.
//!
//! [`Game`] is the public entry point. It validates incoming requests,
//! asks the legality engine for a verdict, applies approved deltas,
//! detects the win condition, and advances the turn. Once a winner is
//! set the state is frozen for gameplay purposes.

mod controller;

pub use controller::{Game, GameBuilder, GameStatus, STARTING_FENCES};
