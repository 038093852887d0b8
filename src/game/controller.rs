//! The Quoridor game controller.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Border};
use crate::core::action::{Action, ActionRecord, IllegalAction, InvariantViolation};
use crate::core::coord::{Coord, Orientation};
use crate::core::player::{Pawn, Player, PlayerMap};
use crate::rules;

/// Fences each player holds at the start of a standard game.
pub const STARTING_FENCES: u8 = 10;

/// Whether the game is still being played, and who won if not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Finished(Player),
}

impl GameStatus {
    /// Whether a winner has been decided.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }

    /// The winner, if the game is over.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Finished(player) => Some(player),
            GameStatus::InProgress => None,
        }
    }
}

/// A Quoridor match.
///
/// ```
/// use quoridor::{Coord, Game, Player};
///
/// let mut game = Game::new();
/// assert!(game.move_pawn(Player::One, Coord::new(4, 1)));
/// assert!(game.move_pawn(Player::Two, Coord::new(4, 7)));
/// assert!(!game.is_winner(Player::One));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot", into = "GameSnapshot")]
pub struct Game {
    board: Board,
    pawns: PlayerMap<Pawn>,
    turn: Player,
    status: GameStatus,
    history: Vector<ActionRecord>,
    fence_allotment: u8,
}

impl Game {
    /// Start a standard game: pawns on their starting squares, ten
    /// fences each, player One to move.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder::new().build()
    }

    /// Configure a non-standard setup.
    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    // === Requests ===

    /// Move `player`'s pawn to `to`, reporting why a rejected request
    /// was illegal. No state changes on rejection.
    pub fn try_move_pawn(&mut self, player: Player, to: Coord) -> Result<(), IllegalAction> {
        self.validate_request(player)?;
        let delta = rules::check_move(&self.board, &self.pawns, player, to)?;

        self.board.set_occupied(delta.from, false);
        self.board.set_occupied(delta.to, true);
        self.pawns[player].at = delta.to;

        self.record(player, Action::Move { to });
        if self.pawns[player].at.row == player.goal_row() {
            // The winning move does not pass the turn.
            self.status = GameStatus::Finished(player);
        } else {
            self.turn = player.opponent();
        }
        debug_assert!(self.check_invariants().is_ok());
        Ok(())
    }

    /// Place a fence for `player`, reporting why a rejected request was
    /// illegal. No state changes on rejection.
    pub fn try_place_fence(
        &mut self,
        player: Player,
        orientation: Orientation,
        at: Coord,
    ) -> Result<(), IllegalAction> {
        self.validate_request(player)?;
        let delta = rules::check_fence(&self.board, &self.pawns, player, orientation, at)?;

        self.board.place_fence(delta.orientation, delta.at);
        self.pawns[player].fences_left -= 1;

        self.record(player, Action::Fence { orientation, at });
        self.turn = player.opponent();
        debug_assert!(self.check_invariants().is_ok());
        Ok(())
    }

    /// Move `player`'s pawn to `to`. Returns `true` when the move was
    /// legal and applied, `false` for any rejection.
    pub fn move_pawn(&mut self, player: Player, to: Coord) -> bool {
        self.try_move_pawn(player, to).is_ok()
    }

    /// Place a fence for `player`. Returns `true` when the placement was
    /// legal and applied, `false` for any rejection.
    pub fn place_fence(&mut self, player: Player, orientation: Orientation, at: Coord) -> bool {
        self.try_place_fence(player, orientation, at).is_ok()
    }

    /// Whether `player` has won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.status.winner() == Some(player)
    }

    // === Queries ===

    /// Current game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player whose turn it is. Unchanged by the winning action.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Where `player`'s pawn stands.
    #[must_use]
    pub fn pawn(&self, player: Player) -> Coord {
        self.pawns[player].at
    }

    /// How many fences `player` has left to place.
    #[must_use]
    pub fn fences_left(&self, player: Player) -> u8 {
        self.pawns[player].fences_left
    }

    /// Read-only view of the board, including the diagnostic dump via
    /// its `Display` impl.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every action applied so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Legal pawn destinations for `player` right now. Empty when the
    /// game is over or it is not `player`'s turn.
    #[must_use]
    pub fn legal_pawn_moves(&self, player: Player) -> SmallVec<[Coord; 5]> {
        if self.validate_request(player).is_err() {
            return SmallVec::new();
        }
        rules::legal_moves(&self.board, &self.pawns, player)
    }

    /// Audit internal consistency.
    ///
    /// A violation indicates a bug in the engine (or a corrupt
    /// snapshot), never a caller error; the same conditions are guarded
    /// by debug assertions on every applied action.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let one = self.pawns[Player::One].at;
        let two = self.pawns[Player::Two].at;
        if one == two {
            return Err(InvariantViolation::PawnOverlap { at: one });
        }

        for (player, pawn) in self.pawns.iter() {
            if !pawn.at.in_bounds() || !self.board.is_occupied(pawn.at) {
                return Err(InvariantViolation::OccupancyMismatch { player, at: pawn.at });
            }
            if pawn.fences_left > self.fence_allotment {
                return Err(InvariantViolation::FenceOverdraw { player });
            }
        }

        let occupied = self.board.occupied_cells().count();
        if occupied != 2 {
            return Err(InvariantViolation::PawnCountMismatch { found: occupied });
        }

        for (orientation, at) in self.board.fences() {
            let side = orientation.anchor_side();
            let legal_anchor = at.in_bounds()
                && at.step(side).in_bounds()
                && self.board.border(at, side) == Border::Fenced;
            if !legal_anchor {
                return Err(InvariantViolation::BadFenceEntry { orientation, at });
            }
        }

        Ok(())
    }

    // === Internals ===

    fn validate_request(&self, player: Player) -> Result<(), IllegalAction> {
        if self.status.is_finished() {
            return Err(IllegalAction::GameOver);
        }
        if player != self.turn {
            return Err(IllegalAction::NotYourTurn);
        }
        Ok(())
    }

    fn record(&mut self, player: Player, action: Action) {
        let ply = self.history.len() as u32 + 1;
        self.history.push_back(ActionRecord::new(player, action, ply));
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for non-standard setups (custom fence allotments, mid-game
/// positions for tests and analysis).
pub struct GameBuilder {
    fences: u8,
    starts: PlayerMap<Coord>,
    first_turn: Player,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            fences: STARTING_FENCES,
            starts: PlayerMap::new(Player::start),
            first_turn: Player::One,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fence allotment per player.
    #[must_use]
    pub fn fences(mut self, fences: u8) -> Self {
        self.fences = fences;
        self
    }

    /// Put `player`'s pawn on `at` instead of its starting square.
    #[must_use]
    pub fn pawn_at(mut self, player: Player, at: Coord) -> Self {
        assert!(at.in_bounds(), "pawn placed off the board: {at}");
        self.starts[player] = at;
        self
    }

    /// Which player moves first.
    #[must_use]
    pub fn first_turn(mut self, player: Player) -> Self {
        self.first_turn = player;
        self
    }

    /// Build the game.
    #[must_use]
    pub fn build(self) -> Game {
        assert!(
            self.starts[Player::One] != self.starts[Player::Two],
            "both pawns on the same square"
        );

        let mut board = Board::new();
        for player in Player::ALL {
            board.set_occupied(self.starts[player], true);
        }

        let game = Game {
            board,
            pawns: PlayerMap::new(|p| Pawn::new(self.starts[p], self.fences)),
            turn: self.first_turn,
            status: GameStatus::InProgress,
            history: Vector::new(),
            fence_allotment: self.fences,
        };
        debug_assert!(game.check_invariants().is_ok());
        game
    }
}

/// Serialized form of a [`Game`]: the fence ledger plus pawn records,
/// from which the full grid is rebuilt on load.
#[derive(Clone, Serialize, Deserialize)]
struct GameSnapshot {
    pawns: PlayerMap<Pawn>,
    turn: Player,
    status: GameStatus,
    history: Vector<ActionRecord>,
    fence_allotment: u8,
    fences: Vec<(Orientation, Coord)>,
}

impl From<Game> for GameSnapshot {
    fn from(game: Game) -> Self {
        let mut fences: Vec<_> = game.board.fences().collect();
        fences.sort_unstable();
        Self {
            pawns: game.pawns,
            turn: game.turn,
            status: game.status,
            history: game.history,
            fence_allotment: game.fence_allotment,
            fences,
        }
    }
}

impl TryFrom<GameSnapshot> for Game {
    type Error = InvariantViolation;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let mut board = Board::new();

        for &(orientation, at) in &snapshot.fences {
            let side = orientation.anchor_side();
            let placeable = at.in_bounds()
                && at.step(side).in_bounds()
                && board.border(at, side).is_open();
            if !placeable {
                return Err(InvariantViolation::BadFenceEntry { orientation, at });
            }
            board.place_fence(orientation, at);
        }

        for (player, pawn) in snapshot.pawns.iter() {
            if !pawn.at.in_bounds() {
                return Err(InvariantViolation::OccupancyMismatch { player, at: pawn.at });
            }
            board.set_occupied(pawn.at, true);
        }

        let game = Game {
            board,
            pawns: snapshot.pawns,
            turn: snapshot.turn,
            status: snapshot.status,
            history: snapshot.history,
            fence_allotment: snapshot.fence_allotment,
        };
        game.check_invariants()?;
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_setup() {
        let game = Game::new();

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.turn(), Player::One);
        assert_eq!(game.pawn(Player::One), Coord::new(4, 0));
        assert_eq!(game.pawn(Player::Two), Coord::new(4, 8));
        assert_eq!(game.fences_left(Player::One), STARTING_FENCES);
        assert_eq!(game.fences_left(Player::Two), STARTING_FENCES);
        assert!(game.history().is_empty());
        assert!(game.check_invariants().is_ok());
    }

    #[test]
    fn test_builder_custom_setup() {
        let game = Game::builder()
            .fences(5)
            .pawn_at(Player::One, Coord::new(2, 3))
            .first_turn(Player::Two)
            .build();

        assert_eq!(game.pawn(Player::One), Coord::new(2, 3));
        assert_eq!(game.fences_left(Player::Two), 5);
        assert_eq!(game.turn(), Player::Two);
        assert!(game.check_invariants().is_ok());
    }

    #[test]
    #[should_panic(expected = "both pawns on the same square")]
    fn test_builder_rejects_overlapping_pawns() {
        let _ = Game::builder()
            .pawn_at(Player::One, Coord::new(4, 4))
            .pawn_at(Player::Two, Coord::new(4, 4))
            .build();
    }

    #[test]
    fn test_move_records_history() {
        let mut game = Game::new();
        assert!(game.move_pawn(Player::One, Coord::new(4, 1)));
        assert!(game.place_fence(Player::Two, Orientation::Horizontal, Coord::new(4, 4)));

        let records: Vec<_> = game.history().iter().copied().collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].player, Player::One);
        assert_eq!(records[0].ply, 1);
        assert_eq!(records[0].action, Action::Move { to: Coord::new(4, 1) });
        assert_eq!(records[1].ply, 2);
    }

    #[test]
    fn test_rejection_reasons() {
        let mut game = Game::new();

        assert_eq!(
            game.try_move_pawn(Player::Two, Coord::new(4, 7)),
            Err(IllegalAction::NotYourTurn)
        );
        assert_eq!(
            game.try_move_pawn(Player::One, Coord::new(4, 9)),
            Err(IllegalAction::OutOfBounds)
        );
        assert_eq!(
            game.try_move_pawn(Player::One, Coord::new(4, 4)),
            Err(IllegalAction::NotReachable)
        );
    }

    #[test]
    fn test_legal_pawn_moves_respects_turn() {
        let game = Game::new();

        assert_eq!(game.legal_pawn_moves(Player::One).len(), 3);
        assert!(game.legal_pawn_moves(Player::Two).is_empty());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut game = Game::new();
        assert!(game.move_pawn(Player::One, Coord::new(4, 1)));
        assert!(game.place_fence(Player::Two, Orientation::Vertical, Coord::new(3, 3)));

        let json = serde_json::to_string(&game).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();

        assert_eq!(back.pawn(Player::One), game.pawn(Player::One));
        assert_eq!(back.fences_left(Player::Two), game.fences_left(Player::Two));
        assert_eq!(back.turn(), game.turn());
        assert_eq!(back.history(), game.history());
        assert!(back.board().has_fence(Orientation::Vertical, Coord::new(3, 3)));
        assert!(back.check_invariants().is_ok());
    }

    #[test]
    fn test_corrupt_snapshot_rejected() {
        let mut game = Game::new();
        assert!(game.move_pawn(Player::One, Coord::new(4, 1)));
        let mut value: serde_json::Value = serde_json::to_value(&game).unwrap();

        // Duplicate fence entries name an impossible ledger.
        value["fences"] = serde_json::json!([
            ["Horizontal", { "col": 4, "row": 4 }],
            ["Horizontal", { "col": 4, "row": 4 }],
        ]);
        let err = serde_json::from_value::<Game>(value).unwrap_err();
        assert!(err.to_string().contains("impossible"));
    }
}
