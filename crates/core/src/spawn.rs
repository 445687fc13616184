//! Spawn module - random tile placement
//!
//! A spawn drops one tile into a uniformly chosen empty cell. The value is 2
//! nine times out of ten and 4 otherwise. Randomness is always passed in, so a
//! seeded generator replays the same sequence of spawns.

use rand::Rng;

use crate::board::Board;
use crate::tile::{Tile, TileIdGen};
use crate::types::{
    Position, SPAWN_HIGH_DENOMINATOR, SPAWN_HIGH_NUMERATOR, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE,
};

/// Draw a spawn value (2 or 4)
pub fn spawn_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_ratio(SPAWN_HIGH_NUMERATOR, SPAWN_HIGH_DENOMINATOR) {
        SPAWN_HIGH_VALUE
    } else {
        SPAWN_LOW_VALUE
    }
}

/// Choose where and what to spawn; `None` on a full board
pub fn pick_spawn<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(Position, u32)> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }
    let pos = empty[rng.gen_range(0..empty.len())];
    Some((pos, spawn_value(rng)))
}

/// Spawn one tile onto the board
///
/// Returns the new tile (flagged `is_new`), or `None` when the board is full.
/// A full board is not an error: the terminal detector deals with it.
///
/// # Panics
///
/// Panics if the chosen cell is occupied, which would mean the registry's
/// empty-cell list is wrong.
pub fn spawn<R: Rng + ?Sized>(board: &mut Board, ids: &mut TileIdGen, rng: &mut R) -> Option<Tile> {
    let (pos, value) = pick_spawn(board, rng)?;
    let tile = Tile::spawned(ids.next_id(), value, pos);
    board.insert(tile);
    log::trace!("spawned {value} at {pos} as {}", tile.id);
    Some(tile)
}
