//! Terminal detector - game-over check
//!
//! A board is terminal only when every cell is filled and no two orthogonal
//! neighbours share a mergeable value. Any empty cell leaves at least one slide open.

use crate::board::Board;
use crate::types::{Direction, Position};

/// Whether any two orthogonally adjacent tiles can merge
pub fn has_available_merge(board: &Board) -> bool {
    board.tiles().any(|tile| {
        Direction::ALL.iter().any(|&dir| {
            tile.pos
                .step(dir)
                .and_then(|n| board.get(n))
                .is_some_and(|neighbour| tile.can_merge_with(neighbour))
        })
    })
}

/// Whether the game is over
pub fn is_terminal(board: &Board) -> bool {
    board.is_full() && !has_available_merge(board)
}

/// First pair of equal neighbours, if any (useful when debugging a stuck board).
pub fn find_merge_pair(board: &Board) -> Option<(Position, Position)> {
    board.tiles().find_map(|tile| {
        [Direction::Right, Direction::Down].iter().find_map(|&dir| {
            let n = tile.pos.step(dir)?;
            let neighbour = board.get(n)?;
            tile.can_merge_with(neighbour).then_some((tile.pos, n))
        })
    })
}
