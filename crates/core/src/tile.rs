//! Tile module - a single numbered piece and its identity allocator

use crate::types::{Position, TileId, MAX_TILE_VALUE};

/// A numbered tile sitting on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    /// Power of two, minimum 2.
    pub value: u32,
    pub pos: Position,
    /// Set on the step a tile is spawned, cleared by the next move.
    pub is_new: bool,
    /// Set on the step a tile results from a merge, cleared by the next move.
    pub just_merged: bool,
}

impl Tile {
    /// A plain tile with no transient flags set.
    pub fn new(id: TileId, value: u32, pos: Position) -> Self {
        debug_assert!(
            value >= 2 && value <= MAX_TILE_VALUE && value.is_power_of_two(),
            "bad tile value {value}"
        );
        Self {
            id,
            value,
            pos,
            is_new: false,
            just_merged: false,
        }
    }

    /// A freshly spawned tile (`is_new` set).
    pub fn spawned(id: TileId, value: u32, pos: Position) -> Self {
        Self {
            is_new: true,
            ..Self::new(id, value, pos)
        }
    }

    pub fn row(&self) -> u8 {
        self.pos.row()
    }

    pub fn col(&self) -> u8 {
        self.pos.col()
    }

    /// Whether this tile and `other` may merge: equal values below the cap.
    pub fn can_merge_with(&self, other: &Tile) -> bool {
        self.value == other.value && self.value < MAX_TILE_VALUE
    }

    /// The tile produced when this tile absorbs an equal one at `target`.
    ///
    /// Keeps this tile's id; the absorbed tile's id is dropped.
    pub fn merged_into(self, target: Position) -> Self {
        debug_assert!(self.value < MAX_TILE_VALUE, "merging a capped tile");
        Self {
            value: self.value * 2,
            pos: target,
            is_new: false,
            just_merged: true,
            ..self
        }
    }

    /// Same tile, relocated.
    pub fn moved_to(self, target: Position) -> Self {
        Self { pos: target, ..self }
    }
}

/// Monotonic tile id allocator.
#[derive(Debug, Clone, Default)]
pub struct TileIdGen {
    next: u32,
}

impl TileIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start handing out ids after `last`.
    pub fn starting_after(last: TileId) -> Self {
        Self {
            next: last.0.wrapping_add(1),
        }
    }

    pub fn next_id(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_tile_keeps_mover_identity() {
        let from = Position::new(0, 2).unwrap();
        let to = Position::new(0, 0).unwrap();
        let tile = Tile::spawned(TileId(7), 8, from);

        let merged = tile.merged_into(to);
        assert_eq!(merged.id, TileId(7));
        assert_eq!(merged.value, 16);
        assert_eq!(merged.pos, to);
        assert!(merged.just_merged);
        assert!(!merged.is_new);
    }

    #[test]
    fn id_gen_is_monotonic() {
        let mut ids = TileIdGen::new();
        assert_eq!(ids.next_id(), TileId(0));
        assert_eq!(ids.next_id(), TileId(1));

        let mut resumed = TileIdGen::starting_after(TileId(41));
        assert_eq!(resumed.next_id(), TileId(42));
    }
}
