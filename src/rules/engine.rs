//! Legality checks for pawn moves and fence placements.
//!
//! A pawn move is one of three shapes:
//!
//! - **Orthogonal step**: one cell in a cardinal direction, blocked only
//!   by a fence on the crossed border.
//! - **Straight jump**: two cells in one cardinal direction, over the
//!   opponent's pawn on the intermediate cell, with both crossed borders
//!   open.
//! - **Diagonal jump**: available only when the opponent is orthogonally
//!   adjacent and the far side of the opponent's cell is fenced or the
//!   board edge. The destination must be diagonally adjacent to the mover,
//!   orthogonally adjacent to the opponent, and the border between the
//!   opponent's cell and the destination must not be fenced.
//!
//! A fence placement needs remaining budget, an anchor off the matching
//! board edge (row 0 for horizontal, column 0 for vertical), and an open
//! anchor border slot. Placements are not checked for keeping a path to
//! either goal row open; legality is purely local.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Border};
use crate::core::coord::{Coord, Direction, Orientation};
use crate::core::player::{Pawn, Player, PlayerMap};
use crate::core::IllegalAction;

/// The state change of a legal pawn move: clear occupancy at `from`, set
/// it at `to`, and update the mover's pawn coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDelta {
    pub player: Player,
    pub from: Coord,
    pub to: Coord,
}

/// The state change of a legal fence placement: fence the anchor's facing
/// border and the matching border of `paired`, then charge one fence to
/// `player`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FenceDelta {
    pub player: Player,
    pub orientation: Orientation,
    pub at: Coord,
    pub paired: Coord,
}

/// Decide whether `player` may move their pawn to `to`.
///
/// Pure: consults the board and pawn records, mutates nothing. Turn
/// ownership and game-over are the controller's concern, not checked
/// here.
pub fn check_move(
    board: &Board,
    pawns: &PlayerMap<Pawn>,
    player: Player,
    to: Coord,
) -> Result<MoveDelta, IllegalAction> {
    if !to.in_bounds() {
        return Err(IllegalAction::OutOfBounds);
    }

    let from = pawns[player].at;

    // A pawn may never move onto an occupied cell; this also rules out
    // `to == from`.
    if board.is_occupied(to) {
        return Err(IllegalAction::DestinationOccupied);
    }

    if let Some(dir) = from.toward(to) {
        return check_step(board, from, dir).map(|()| MoveDelta { player, from, to });
    }

    if let Some(dir) = straight_jump_direction(from, to) {
        let opponent = pawns[player.opponent()].at;
        return check_straight_jump(board, from, dir, opponent)
            .map(|()| MoveDelta { player, from, to });
    }

    let dc = to.col - from.col;
    let dr = to.row - from.row;
    if dc.abs() == 1 && dr.abs() == 1 {
        let opponent = pawns[player.opponent()].at;
        return check_diagonal_jump(board, from, to, opponent)
            .map(|()| MoveDelta { player, from, to });
    }

    Err(IllegalAction::NotReachable)
}

/// Decide whether `player` may place a fence of `orientation` at `at`.
///
/// On success the returned delta names both affected cells; application
/// must update them atomically.
pub fn check_fence(
    board: &Board,
    pawns: &PlayerMap<Pawn>,
    player: Player,
    orientation: Orientation,
    at: Coord,
) -> Result<FenceDelta, IllegalAction> {
    if !at.in_bounds() {
        return Err(IllegalAction::OutOfBounds);
    }

    if pawns[player].fences_left == 0 {
        return Err(IllegalAction::NoFencesLeft);
    }

    let on_edge = match orientation {
        Orientation::Horizontal => at.row == 0,
        Orientation::Vertical => at.col == 0,
    };
    if on_edge {
        return Err(IllegalAction::FenceOnEdge);
    }

    let side = orientation.anchor_side();
    match board.border(at, side) {
        Border::Open => Ok(FenceDelta {
            player,
            orientation,
            at,
            paired: at.step(side),
        }),
        Border::Fenced => Err(IllegalAction::FenceSlotTaken),
        // The row/column check above already excluded the board edge.
        Border::Edge => unreachable!("edge slot past the edge-row check"),
    }
}

/// Enumerate every legal destination for `player`'s pawn.
///
/// At most five moves are ever legal at once: up to four steps, with a
/// blocked one replaced by a jump or a pair of diagonals.
pub fn legal_moves(
    board: &Board,
    pawns: &PlayerMap<Pawn>,
    player: Player,
) -> SmallVec<[Coord; 5]> {
    let from = pawns[player].at;
    let mut out = SmallVec::new();

    for dir in Direction::ALL {
        let step = from.step(dir);
        if check_move(board, pawns, player, step).is_ok() {
            out.push(step);
        }
        let jump = step.step(dir);
        if check_move(board, pawns, player, jump).is_ok() {
            out.push(jump);
        }
    }
    for (dc, dr) in [(-1, -1), (1, -1), (-1, 1), (1, 1)] {
        let diag = Coord::new(from.col + dc, from.row + dr);
        if check_move(board, pawns, player, diag).is_ok() {
            out.push(diag);
        }
    }

    out
}

fn check_step(board: &Board, from: Coord, dir: Direction) -> Result<(), IllegalAction> {
    // The destination is on the board, so the crossed border is never an
    // edge; only a fence can block.
    if board.border(from, dir) == Border::Fenced {
        return Err(IllegalAction::BlockedByFence);
    }
    Ok(())
}

fn check_straight_jump(
    board: &Board,
    from: Coord,
    dir: Direction,
    opponent: Coord,
) -> Result<(), IllegalAction> {
    let mid = from.step(dir);
    if opponent != mid {
        return Err(IllegalAction::NotReachable);
    }
    if board.border(from, dir) == Border::Fenced || board.border(mid, dir) == Border::Fenced {
        return Err(IllegalAction::BlockedByFence);
    }
    Ok(())
}

fn check_diagonal_jump(
    board: &Board,
    from: Coord,
    to: Coord,
    opponent: Coord,
) -> Result<(), IllegalAction> {
    // The opponent must sit on the cell orthogonally adjacent to both the
    // mover and the destination. For a diagonal destination there are
    // exactly two such cells, and the opponent occupies at most one.
    let vertical_neighbor = Coord::new(from.col, to.row);
    let horizontal_neighbor = Coord::new(to.col, from.row);
    if opponent != vertical_neighbor && opponent != horizontal_neighbor {
        return Err(IllegalAction::NotReachable);
    }

    // The diagonal only opens up when the straight jump over the opponent
    // is impossible: fenced behind, or the far side is the board edge.
    let toward_opponent = from
        .toward(opponent)
        .expect("diagonal-adjacent opponent is orthogonally adjacent to the mover");
    if !board.border(opponent, toward_opponent).blocks_jump() {
        return Err(IllegalAction::NotReachable);
    }

    let toward_dest = opponent
        .toward(to)
        .expect("diagonal destination is orthogonally adjacent to the opponent");
    if board.border(opponent, toward_dest) == Border::Fenced {
        return Err(IllegalAction::BlockedByFence);
    }
    Ok(())
}

fn straight_jump_direction(from: Coord, to: Coord) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&d| from.step(d).step(d) == to)
}
