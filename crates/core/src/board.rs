//! Board module - the tile registry
//!
//! The board is a 4x4 grid where each cell is empty or holds one tile.
//! Uses a flat array for cache locality and zero allocation; because every
//! cell stores at most one tile, "no two tiles share a coordinate" holds by
//! construction. Coordinates: (row, col), row 0 at the top, col 0 at the left.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::tile::Tile;
use crate::types::{Position, TileId, BOARD_SIZE, CELL_COUNT, MAX_TILE_VALUE};

/// Registry contract violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell {pos} is already occupied by tile {occupant}")]
    Occupied { pos: Position, occupant: TileId },
    #[error("cell {pos} holds no tile")]
    Vacant { pos: Position },
}

/// The game board - 4x4 grid of optional tiles using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Row-major (row * BOARD_SIZE + col)
    cells: [Option<Tile>; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Build a board from a value grid (`0` = empty).
    ///
    /// Tiles get ids `1..` in row-major order, with no transient flags.
    /// Non-power-of-two values and values above `MAX_TILE_VALUE` are rejected.
    pub fn from_values(values: [[u32; BOARD_SIZE as usize]; BOARD_SIZE as usize]) -> Option<Self> {
        let mut board = Self::new();
        let mut next_id = 1u32;
        for pos in Position::all() {
            let value = values[pos.row() as usize][pos.col() as usize];
            if value == 0 {
                continue;
            }
            if value < 2 || value > MAX_TILE_VALUE || !value.is_power_of_two() {
                return None;
            }
            board.cells[pos.index()] = Some(Tile::new(TileId(next_id), value, pos));
            next_id += 1;
        }
        Some(board)
    }

    /// Tile at a position
    #[inline]
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.cells[pos.index()].as_ref()
    }

    /// Tile at raw (row, col); `None` if empty or out of bounds
    pub fn tile_at(&self, row: u8, col: u8) -> Option<&Tile> {
        Position::new(row, col).and_then(|pos| self.get(pos))
    }

    /// Value at raw (row, col), `0` for empty or out-of-bounds cells
    pub fn value_at(&self, row: u8, col: u8) -> u32 {
        self.tile_at(row, col).map_or(0, |t| t.value)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells[pos.index()].is_some()
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    /// Find a tile by id
    pub fn find(&self, id: TileId) -> Option<&Tile> {
        self.tiles().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tiles().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Empty positions in row-major order (stack-only, no allocation)
    pub fn empty_cells(&self) -> ArrayVec<Position, CELL_COUNT> {
        Position::all().filter(|&pos| !self.is_occupied(pos)).collect()
    }

    /// Largest tile value, `0` on an empty board
    pub fn max_value(&self) -> u32 {
        self.tiles().map(|t| t.value).max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn value_sum(&self) -> u64 {
        self.tiles().map(|t| u64::from(t.value)).sum()
    }

    /// Highest tile id on the board
    pub fn max_id(&self) -> Option<TileId> {
        self.tiles().map(|t| t.id).max()
    }

    /// Place a tile at `tile.pos`
    ///
    /// Fails without touching the board if the cell is occupied.
    pub fn try_insert(&mut self, tile: Tile) -> Result<(), BoardError> {
        let slot = &mut self.cells[tile.pos.index()];
        if let Some(occupant) = slot {
            return Err(BoardError::Occupied {
                pos: tile.pos,
                occupant: occupant.id,
            });
        }
        *slot = Some(tile);
        Ok(())
    }

    /// Place a tile, treating an occupied cell as a broken invariant.
    ///
    /// # Panics
    ///
    /// Panics if `tile.pos` is already occupied.
    pub fn insert(&mut self, tile: Tile) {
        if let Err(err) = self.try_insert(tile) {
            panic!("tile registry invariant violated: {err}");
        }
    }

    /// Remove and return the tile at a position
    pub fn remove(&mut self, pos: Position) -> Option<Tile> {
        self.cells[pos.index()].take()
    }

    /// Swap the tile at `from` for `tile` (which may sit at a different cell)
    ///
    /// Returns the tile previously at `from`. Fails without touching the board
    /// if `from` is empty or `tile.pos` is held by some other tile.
    pub fn replace(&mut self, from: Position, tile: Tile) -> Result<Tile, BoardError> {
        if !self.is_occupied(from) {
            return Err(BoardError::Vacant { pos: from });
        }
        if tile.pos != from {
            if let Some(occupant) = self.get(tile.pos) {
                return Err(BoardError::Occupied {
                    pos: tile.pos,
                    occupant: occupant.id,
                });
            }
        }
        let old = self.cells[from.index()].take().ok_or(BoardError::Vacant { pos: from })?;
        self.cells[tile.pos.index()] = Some(tile);
        Ok(old)
    }

    /// Clear `is_new` and `just_merged` on every tile
    pub fn clear_transient_flags(&mut self) {
        for tile in self.cells.iter_mut().flatten() {
            tile.is_new = false;
            tile.just_merged = false;
        }
    }

    /// Write tile values into a 2D grid (`0` = empty)
    pub fn write_values(&self, out: &mut [[u32; BOARD_SIZE as usize]; BOARD_SIZE as usize]) {
        for pos in Position::all() {
            out[pos.row() as usize][pos.col() as usize] = self.get(pos).map_or(0, |t| t.value);
        }
    }

    /// Tile values as a 2D grid (`0` = empty)
    pub fn values(&self) -> [[u32; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        let mut out = [[0; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        self.write_values(&mut out);
        out
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }
}
