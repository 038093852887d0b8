//! Player identity and per-player data storage.
//!
//! ## Player
//!
//! Quoridor is strictly two-player. `Player` is a two-variant identity
//! with the opponent, goal row, and starting square baked in.
//!
//! ## PlayerMap
//!
//! Fixed two-slot per-player storage, indexable by `Player`. The game
//! owns its two records directly; no shared references are needed since
//! only the controller mutates them.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::coord::Coord;

/// One of the two players.
///
/// Player One starts at (4, 0) and races toward row 8; player Two starts
/// at (4, 8) and races toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The row this player must reach to win.
    #[must_use]
    pub const fn goal_row(self) -> i8 {
        match self {
            Player::One => 8,
            Player::Two => 0,
        }
    }

    /// This player's starting square.
    #[must_use]
    pub const fn start(self) -> Coord {
        match self {
            Player::One => Coord::new(4, 0),
            Player::Two => Coord::new(4, 8),
        }
    }

    /// Storage index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use quoridor::core::{Player, PlayerMap};
///
/// let mut fences: PlayerMap<u8> = PlayerMap::with_value(10);
/// fences[Player::One] -= 1;
/// assert_eq!(fences[Player::One], 9);
/// assert_eq!(fences[Player::Two], 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player's pawn position and remaining fence budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pawn {
    /// Current square.
    pub at: Coord,

    /// Fences left to place. Monotonically non-increasing, floor 0.
    pub fences_left: u8,
}

impl Pawn {
    /// Create a pawn at `at` with `fences_left` fences.
    #[must_use]
    pub const fn new(at: Coord, fences_left: u8) -> Self {
        Self { at, fences_left }
    }
}
