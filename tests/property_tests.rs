//! Property-based checks over randomized request streams.

use proptest::prelude::*;
use quoridor::{Coord, Game, Orientation, Player};

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::One), Just(Player::Two)]
}

fn arb_orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

/// One raw request: move or fence, possibly out of turn or off the board.
#[derive(Clone, Debug)]
enum Request {
    Move(Player, Coord),
    Fence(Player, Orientation, Coord),
}

fn arb_request() -> impl Strategy<Value = Request> {
    let coord = (-2i8..11, -2i8..11).prop_map(|(col, row)| Coord::new(col, row));
    prop_oneof![
        (arb_player(), coord.clone()).prop_map(|(p, c)| Request::Move(p, c)),
        (arb_player(), arb_orientation(), coord)
            .prop_map(|(p, o, c)| Request::Fence(p, o, c)),
    ]
}

proptest! {
    /// Requests naming an off-board coordinate are rejected and leave
    /// the entire game state untouched.
    #[test]
    fn out_of_bounds_never_mutates(
        col in -3i8..12,
        row in -3i8..12,
        orientation in arb_orientation(),
    ) {
        prop_assume!(!(0..9).contains(&col) || !(0..9).contains(&row));

        let mut game = Game::new();
        let before = serde_json::to_string(&game).unwrap();
        let target = Coord::new(col, row);

        prop_assert!(!game.move_pawn(Player::One, target));
        prop_assert!(!game.place_fence(Player::One, orientation, target));

        prop_assert_eq!(serde_json::to_string(&game).unwrap(), before);
    }

    /// Under any request stream: invariants hold, fences are conserved,
    /// the turn alternates exactly on successful non-winning actions,
    /// and rejected requests change nothing observable.
    #[test]
    fn request_stream_preserves_laws(requests in prop::collection::vec(arb_request(), 0..80)) {
        let mut game = Game::new();

        for request in requests {
            let turn_before = game.turn();
            let status_before = game.status();
            let fences_before = (
                game.fences_left(Player::One),
                game.fences_left(Player::Two),
            );

            let (actor, accepted) = match request {
                Request::Move(player, to) => (player, game.move_pawn(player, to)),
                Request::Fence(player, orientation, at) => {
                    (player, game.place_fence(player, orientation, at))
                }
            };

            prop_assert!(game.check_invariants().is_ok());

            if accepted {
                prop_assert_eq!(actor, turn_before);
                if game.status().is_finished() {
                    prop_assert_eq!(game.turn(), turn_before);
                } else {
                    prop_assert_eq!(game.turn(), turn_before.opponent());
                }
            } else {
                prop_assert_eq!(game.turn(), turn_before);
                prop_assert_eq!(game.status(), status_before);
                prop_assert_eq!(
                    (game.fences_left(Player::One), game.fences_left(Player::Two)),
                    fences_before
                );
            }

            // Conservation: a success costs the actor at most one fence
            // and never touches the opponent's budget.
            let spent_one = fences_before.0 - game.fences_left(Player::One);
            let spent_two = fences_before.1 - game.fences_left(Player::Two);
            prop_assert!(spent_one + spent_two <= 1);
        }
    }

    /// Every destination the engine enumerates is accepted when played.
    #[test]
    fn enumerated_moves_are_playable(requests in prop::collection::vec(arb_request(), 0..40)) {
        let mut game = Game::new();
        for request in requests {
            match request {
                Request::Move(player, to) => {
                    game.move_pawn(player, to);
                }
                Request::Fence(player, orientation, at) => {
                    game.place_fence(player, orientation, at);
                }
            }
        }

        if !game.status().is_finished() {
            let mover = game.turn();
            for to in game.legal_pawn_moves(mover) {
                let mut replay = game.clone();
                prop_assert!(replay.move_pawn(mover, to));
            }
        }
    }
}
