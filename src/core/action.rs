//! Action representation and request outcomes.
//!
//! An [`Action`] is one of the two things a player may do on their turn:
//! move their pawn or place a fence. Applied actions are recorded as
//! [`ActionRecord`]s for replay and debugging.
//!
//! Rejections are expected, recoverable outcomes and carry a reason
//! ([`IllegalAction`]). Internal-bug conditions are a separate taxonomy
//! ([`InvariantViolation`]) and are never folded into legality results.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::coord::{Coord, Orientation, ParseOrientationError};
use super::player::Player;

/// A complete game action: the pawn move or fence placement a player
/// submits on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the acting player's pawn to `to`.
    Move { to: Coord },

    /// Place a fence of `orientation` anchored at `at`.
    Fence { orientation: Orientation, at: Coord },
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Ply number when the action was taken (starts at 1).
    pub ply: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub const fn new(player: Player, action: Action, ply: u32) -> Self {
        Self { player, action, ply }
    }
}

/// Why a request was rejected.
///
/// All of these are caller-facing, recoverable outcomes; the boolean API
/// collapses every variant to `false`. No state is mutated on rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllegalAction {
    /// The game already has a winner; no further actions are accepted.
    GameOver,
    /// The acting player is not the player whose turn it is.
    NotYourTurn,
    /// The target coordinate is not on the 9×9 board.
    OutOfBounds,
    /// The orientation token was not one of the recognized values.
    BadOrientation,
    /// The destination cell already holds a pawn.
    DestinationOccupied,
    /// A fence blocks the requested step or jump.
    BlockedByFence,
    /// The destination matches no step or jump rule from the current
    /// position.
    NotReachable,
    /// The acting player has no fences left to place.
    NoFencesLeft,
    /// The fence would lie along the board edge (horizontal on row 0,
    /// vertical on column 0).
    FenceOnEdge,
    /// The targeted border slot already holds a fence.
    FenceSlotTaken,
}

impl fmt::Display for IllegalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            IllegalAction::GameOver => "the game is already over",
            IllegalAction::NotYourTurn => "it is not the acting player's turn",
            IllegalAction::OutOfBounds => "the coordinate is off the board",
            IllegalAction::BadOrientation => "unrecognized fence orientation",
            IllegalAction::DestinationOccupied => "the destination cell is occupied",
            IllegalAction::BlockedByFence => "a fence blocks the way",
            IllegalAction::NotReachable => "no move rule reaches the destination",
            IllegalAction::NoFencesLeft => "no fences remaining",
            IllegalAction::FenceOnEdge => "a fence cannot lie on the board edge",
            IllegalAction::FenceSlotTaken => "a fence already occupies that border",
        };
        write!(f, "{reason}")
    }
}

impl std::error::Error for IllegalAction {}

impl From<ParseOrientationError> for IllegalAction {
    fn from(_: ParseOrientationError) -> Self {
        IllegalAction::BadOrientation
    }
}

/// An internal consistency failure.
///
/// These indicate a bug in the engine (or a corrupt snapshot), not a user
/// error, and are surfaced distinctly from [`IllegalAction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvariantViolation {
    /// Both pawns occupy the same cell.
    PawnOverlap { at: Coord },
    /// The number of occupied cells on the board is not exactly two.
    PawnCountMismatch { found: usize },
    /// A player's recorded pawn position does not match board occupancy.
    OccupancyMismatch { player: Player, at: Coord },
    /// A player holds more fences than the game's allotment.
    FenceOverdraw { player: Player },
    /// A fence ledger entry names an impossible placement.
    BadFenceEntry { orientation: Orientation, at: Coord },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::PawnOverlap { at } => {
                write!(f, "both pawns occupy {at}")
            }
            InvariantViolation::PawnCountMismatch { found } => {
                write!(f, "expected 2 occupied cells, found {found}")
            }
            InvariantViolation::OccupancyMismatch { player, at } => {
                write!(f, "{player}'s pawn at {at} does not match board occupancy")
            }
            InvariantViolation::FenceOverdraw { player } => {
                write!(f, "{player} holds more fences than the allotment")
            }
            InvariantViolation::BadFenceEntry { orientation, at } => {
                write!(f, "impossible {orientation} fence at {at} in ledger")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        let m1 = Action::Move { to: Coord::new(4, 1) };
        let m2 = Action::Move { to: Coord::new(4, 1) };
        let m3 = Action::Move { to: Coord::new(4, 2) };
        let f1 = Action::Fence {
            orientation: Orientation::Horizontal,
            at: Coord::new(4, 1),
        };

        assert_eq!(m1, m2);
        assert_ne!(m1, m3);
        assert_ne!(m1, f1);
    }

    #[test]
    fn test_action_record() {
        let action = Action::Fence {
            orientation: Orientation::Vertical,
            at: Coord::new(6, 5),
        };
        let record = ActionRecord::new(Player::Two, action, 4);

        assert_eq!(record.player, Player::Two);
        assert_eq!(record.action, action);
        assert_eq!(record.ply, 4);
    }

    #[test]
    fn test_bad_orientation_conversion() {
        let err: IllegalAction = "sideways"
            .parse::<Orientation>()
            .unwrap_err()
            .into();
        assert_eq!(err, IllegalAction::BadOrientation);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", IllegalAction::NoFencesLeft),
            "no fences remaining"
        );
        assert_eq!(
            format!("{}", InvariantViolation::PawnOverlap { at: Coord::new(3, 3) }),
            "both pawns occupy (3, 3)"
        );
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Fence {
            orientation: Orientation::Horizontal,
            at: Coord::new(2, 7),
        };
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }
}
