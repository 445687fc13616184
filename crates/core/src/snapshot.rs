//! Snapshot - serializable per-command output for renderers

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::tile::Tile;
use crate::types::{TileId, BOARD_SIZE, CELL_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileSnapshot {
    pub id: TileId,
    pub value: u32,
    pub row: u8,
    pub col: u8,
    pub is_new: bool,
    pub just_merged: bool,
}

impl From<Tile> for TileSnapshot {
    fn from(value: Tile) -> Self {
        Self {
            id: value.id,
            value: value.value,
            row: value.row(),
            col: value.col(),
            is_new: value.is_new,
            just_merged: value.just_merged,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Tiles in row-major order.
    pub tiles: ArrayVec<TileSnapshot, CELL_COUNT>,
    pub board: [[u32; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    pub score: u32,
    pub best_score: u32,
    pub is_over: bool,
    pub episode_id: u32,
    pub moves: u32,
    pub max_tile: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.board = [[0; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        self.score = 0;
        self.best_score = 0;
        self.is_over = false;
        self.episode_id = 0;
        self.moves = 0;
        self.max_tile = 0;
    }

    pub fn playable(&self) -> bool {
        !self.is_over
    }

    pub fn tile(&self, id: TileId) -> Option<&TileSnapshot> {
        self.tiles.iter().find(|t| t.id == id)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tiles: ArrayVec::new(),
            board: [[0; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            score: 0,
            best_score: 0,
            is_over: false,
            episode_id: 0,
            moves: 0,
            max_tile: 0,
        }
    }
}
