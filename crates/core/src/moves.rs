//! Move engine - slides and merges tiles in one direction
//!
//! Tiles are resolved starting from the wall the move points at, so a tile
//! nearer the wall settles before the tiles behind it try to move into its
//! old cell:
//!
//! | Direction | Traversal |
//! |-----------|-----------|
//! | up | ascending rows |
//! | down | descending rows |
//! | left | ascending columns |
//! | right | descending columns |
//!
//! Each tile steps one cell at a time. An empty cell lets it keep sliding; an
//! equal-valued tile in a cell that has not merged yet this move absorbs it
//! (the mover keeps its id); anything else stops it one cell short. A cell
//! that received a merge is locked for the rest of the move, which is what
//! turns `[2, 2, 2, 2]` into `[4, 4, _, _]` instead of `[8, _, _, _]`.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Direction, Position, BOARD_SIZE, CELL_COUNT};

/// Result of one move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// Any tile changed cell, or any merge happened.
    pub changed: bool,
    /// Sum of the values of all merged tiles.
    pub score_delta: u32,
    /// Number of merges performed.
    pub merges: u8,
}

/// Per-move record of cells that already received a merge.
#[derive(Debug, Clone, Default)]
pub struct MergeLocks {
    locked: [bool; CELL_COUNT],
}

impl MergeLocks {
    pub fn clear(&mut self) {
        self.locked = [false; CELL_COUNT];
    }

    pub fn lock(&mut self, pos: Position) {
        self.locked[pos.index()] = true;
    }

    pub fn is_locked(&self, pos: Position) -> bool {
        self.locked[pos.index()]
    }
}

/// Cell visiting order for a move in `dir`.
pub fn traversal_order(dir: Direction) -> ArrayVec<Position, CELL_COUNT> {
    let mut lanes: ArrayVec<u8, { BOARD_SIZE as usize }> = (0..BOARD_SIZE).collect();
    if matches!(dir, Direction::Down | Direction::Right) {
        lanes.reverse();
    }

    let mut order = ArrayVec::new();
    for &lane in &lanes {
        for other in 0..BOARD_SIZE {
            let cell = if dir.is_horizontal() {
                Position::new(other, lane)
            } else {
                Position::new(lane, other)
            };
            if let Some(pos) = cell {
                order.push(pos);
            }
        }
    }
    order
}

/// Apply a move to `board` in place.
///
/// Transient flags are cleared on every tile before anything moves, even if
/// the move turns out to be a no-op.
///
/// # Panics
///
/// Panics if the registry rejects a placement, which would mean two tiles
/// were routed into the same cell.
pub fn apply_move(board: &mut Board, dir: Direction) -> MoveResult {
    let mut locks = MergeLocks::default();
    apply_move_with_locks(board, dir, &mut locks)
}

/// [`apply_move`] with a caller-provided lock grid (cleared on entry).
pub fn apply_move_with_locks(board: &mut Board, dir: Direction, locks: &mut MergeLocks) -> MoveResult {
    board.clear_transient_flags();
    locks.clear();

    let mut result = MoveResult::default();

    for start in traversal_order(dir) {
        let Some(&tile) = board.get(start) else {
            continue;
        };

        let mut dest = start;
        let mut merge_at = None;
        while let Some(next) = dest.step(dir) {
            match board.get(next) {
                None => dest = next,
                Some(other) if tile.can_merge_with(other) && !locks.is_locked(next) => {
                    merge_at = Some(next);
                    break;
                }
                Some(_) => break,
            }
        }

        if let Some(target) = merge_at {
            board.remove(target);
            let merged = tile.merged_into(target);
            settle(board, start, merged);
            locks.lock(target);
            result.score_delta += merged.value;
            result.merges += 1;
            result.changed = true;
        } else if dest != start {
            settle(board, start, tile.moved_to(dest));
            result.changed = true;
        }
    }

    if result.changed {
        log::debug!(
            "move {dir}: {} merges, +{} points",
            result.merges,
            result.score_delta
        );
    }
    result
}

/// Pure form of [`apply_move`]: the input board is left untouched.
pub fn slide(board: &Board, dir: Direction) -> (Board, MoveResult) {
    let mut next = board.clone();
    let result = apply_move(&mut next, dir);
    (next, result)
}

/// Whether a move in `dir` would change the board.
pub fn can_move(board: &Board, dir: Direction) -> bool {
    slide(board, dir).1.changed
}

fn settle(board: &mut Board, from: Position, tile: crate::tile::Tile) {
    if let Err(err) = board.replace(from, tile) {
        panic!("move engine routed two tiles into one cell: {err}");
    }
}
