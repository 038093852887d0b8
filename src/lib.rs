//! # quoridor
//!
//! A rules engine for the two-player board game Quoridor.
//!
//! Two pawns race across a 9×9 grid to opposite goal rows while both
//! players spend a budget of ten fences to slow each other down. This
//! crate is the referee: it decides which pawn moves and fence
//! placements are legal, applies the legal ones, tracks whose turn it
//! is, and freezes the game when a pawn reaches its goal row.
//!
//! ## Design Principles
//!
//! 1. **Legality is pure**: the `rules` module inspects state and
//!    returns a verdict plus the exact delta to apply; only the
//!    controller mutates anything. A rejected request never touches
//!    state.
//!
//! 2. **Rejections are data**: every way a request can fail is a
//!    variant of `IllegalAction`. The boolean API collapses them;
//!    the `try_` API reports them. Internal-bug conditions live in a
//!    separate `InvariantViolation` taxonomy.
//!
//! 3. **Edges are first-class**: cell borders are `Edge`, `Open`, or
//!    `Fenced`. Nothing is a sentinel, and an `Edge` can never become
//!    `Fenced`.
//!
//! ## Modules
//!
//! - `core`: coordinates, directions, players, actions, outcome types
//! - `board`: the 81-cell grid, border slots, occupancy, placed fences
//! - `rules`: move and fence legality, legal-move enumeration
//! - `game`: the controller driving validation, application, turn and
//!   win tracking
//!
//! ## Example
//!
//! ```
//! use quoridor::{Coord, Game, Orientation, Player};
//!
//! let mut game = Game::new();
//!
//! // Player One steps forward; player Two replies with a fence.
//! assert!(game.move_pawn(Player::One, Coord::new(4, 1)));
//! assert!(game.place_fence(Player::Two, Orientation::Horizontal, Coord::new(4, 1)));
//!
//! // The fence seals the border between (4, 0) and (4, 1).
//! assert!(!game.move_pawn(Player::One, Coord::new(4, 0)));
//! assert!(game.move_pawn(Player::One, Coord::new(4, 2)));
//!
//! assert_eq!(game.fences_left(Player::Two), 9);
//! assert!(!game.is_winner(Player::One));
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod rules;

// Re-export the everyday types at the crate root.
pub use crate::core::{
    Action, ActionRecord, Coord, Direction, IllegalAction, InvariantViolation, Orientation,
    ParseOrientationError, Pawn, Player, PlayerMap, BOARD_SIZE,
};

pub use crate::board::{Board, Border, Cell};

pub use crate::rules::{check_fence, check_move, legal_moves, FenceDelta, MoveDelta};

pub use crate::game::{Game, GameBuilder, GameStatus, STARTING_FENCES};
