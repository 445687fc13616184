//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond parsing and coordinate
//! arithmetic, so they can be shared by the engine, the renderer and the input
//! layer alike.
//!
//! # Board Dimensions
//!
//! The playfield is a square grid:
//!
//! - **Size**: 4 x 4 cells (`BOARD_SIZE`)
//! - **Rows**: indexed 0-3, top to bottom
//! - **Columns**: indexed 0-3, left to right
//!
//! # Spawn Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TILES` | 2 | Tiles spawned on a fresh board |
//! | `SPAWN_LOW_VALUE` | 2 | Common spawn value |
//! | `SPAWN_HIGH_VALUE` | 4 | Rare spawn value |
//! | `SPAWN_HIGH_NUMERATOR` / `SPAWN_HIGH_DENOMINATOR` | 1 / 10 | Chance of a 4 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Position, BOARD_SIZE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//!
//! // Step a position, bounds-checked
//! let pos = Position::new(0, 1).unwrap();
//! assert_eq!(pos.step(dir), Position::new(0, 0));
//! assert_eq!(Position::new(0, 0).unwrap().step(dir), None);
//!
//! // Actions map back to directions
//! assert_eq!(GameAction::MoveUp.direction(), Some(Direction::Up));
//! assert_eq!(GameAction::NewGame.direction(), None);
//!
//! assert_eq!(BOARD_SIZE, 4);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board edge length in cells (4)
pub const BOARD_SIZE: u8 = 4;

/// Total number of cells on the board (16)
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Number of tiles spawned when a game starts
pub const INITIAL_TILES: usize = 2;

/// Value of a regular spawn
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of a rare spawn
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// A spawn is `SPAWN_HIGH_VALUE` with probability numerator / denominator.
pub const SPAWN_HIGH_NUMERATOR: u32 = 1;

/// See [`SPAWN_HIGH_NUMERATOR`].
pub const SPAWN_HIGH_DENOMINATOR: u32 = 10;

/// Largest tile value. Tiles at this value no longer merge, which keeps every
/// value and every per-move score delta well inside `u32`.
///
/// 2^17 is the largest tile a 4x4 game can build from regular spawns.
pub const MAX_TILE_VALUE: u32 = 1 << 17;

/// Key under which the best score lives in the key-value store.
pub const BEST_SCORE_KEY: &str = "best_score";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_rules_defaults() {
        assert_eq!(BOARD_SIZE, 4);
        assert_eq!(CELL_COUNT, 16);
        assert_eq!(INITIAL_TILES, 2);
        assert_eq!(SPAWN_LOW_VALUE, 2);
        assert_eq!(SPAWN_HIGH_VALUE, 4);
        assert_eq!(SPAWN_HIGH_NUMERATOR * 10, SPAWN_HIGH_DENOMINATOR);
    }

    #[test]
    fn position_index_roundtrip() {
        for index in 0..CELL_COUNT {
            let pos = Position::from_index(index).unwrap();
            assert_eq!(pos.index(), index);
        }
        assert_eq!(Position::from_index(CELL_COUNT), None);
    }

    #[test]
    fn position_step_is_bounds_checked() {
        let corner = Position::new(3, 3).unwrap();
        assert_eq!(corner.step(Direction::Down), None);
        assert_eq!(corner.step(Direction::Right), None);
        assert_eq!(corner.step(Direction::Up), Position::new(2, 3));
        assert_eq!(corner.step(Direction::Left), Position::new(3, 2));
    }

    #[test]
    fn direction_parse_rejects_unknown() {
        assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_str(" right "), Some(Direction::Right));
        assert_eq!(Direction::from_str("diagonal"), None);
        assert_eq!(Direction::from_str(""), None);
    }

    #[test]
    fn action_names_roundtrip() {
        for action in [
            GameAction::MoveUp,
            GameAction::MoveDown,
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::NewGame,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}

/// The four slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive, surrounding whitespace ignored)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Row/column delta of one step in this direction.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Whether the direction moves tiles along a row (horizontal).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell coordinate on the board. Always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position, returning `None` if it falls outside the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(Self { row, col })
    }

    /// Position for a row-major flat index.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let size = BOARD_SIZE as usize;
        Some(Self {
            row: (index / size) as u8,
            col: (index % size) as u8,
        })
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Row-major flat index (row * BOARD_SIZE + col)
    #[inline(always)]
    pub fn index(&self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + (self.col as usize)
    }

    /// The neighbouring cell one step in `dir`, or `None` past the edge.
    #[inline]
    pub fn step(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Iterate all board positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).filter_map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Stable tile identity, unique for the tile's lifetime.
///
/// Renderers use it to correlate a tile across moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Commands that can be applied to a game session
///
/// These are used by both keyboard input and string commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles up
    MoveUp,
    /// Slide all tiles down
    MoveDown,
    /// Slide all tiles left
    MoveLeft,
    /// Slide all tiles right
    MoveRight,
    /// Discard the current board and start over (best score is kept)
    NewGame,
}

impl GameAction {
    /// Parse action from string
    ///
    /// Accepts camelCase action names as well as bare direction names.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "newgame" | "restart" => Some(GameAction::NewGame),
            other => Direction::from_str(other).map(GameAction::from),
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::NewGame => "newGame",
        }
    }

    /// The slide direction for move actions.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::NewGame => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
        }
    }
}
