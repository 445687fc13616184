//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the 2048 rules: how tiles slide and merge, where new
//! tiles appear, how points are scored and when the game is over. It has
//! **no dependencies** on terminals, input devices or files, which makes it:
//!
//! - **Deterministic**: the same seed and the same moves produce the same game
//! - **Testable**: every rule is a plain function over a [`Board`]
//! - **Portable**: runs headless, in a terminal, or behind any other front end
//! - **Fast**: the move pipeline works on fixed-size arrays and does not allocate
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 tile registry with O(1) cell lookup
//! - [`moves`]: slide/merge engine with per-move merge locks
//! - [`spawn`]: random tile placement (injectable RNG)
//! - [`terminal`]: game-over detection
//! - [`scoring`]: running score and persisted best score
//! - [`store`]: key-value persistence contract
//! - [`game_state`]: the session that runs the pipeline
//! - [`snapshot`]: serializable per-command output for renderers
//!
//! # Game Rules
//!
//! - **Slide**: every tile travels as far as it can toward the chosen wall
//! - **Merge**: two equal tiles meeting in a slide become one tile of twice the value
//! - **Merge lock**: a tile produced by a merge cannot merge again in the same move
//! - **Spawn**: each move that changes the board adds a 2 (90%) or a 4 (10%)
//! - **Scoring**: each merge scores the value of the new tile
//! - **Game over**: the board is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameSession;
//! use tui_2048_types::{Direction, GameAction};
//!
//! // Create a seeded game: two tiles are already on the board
//! let mut game = GameSession::new(12345);
//! assert_eq!(game.board().len(), 2);
//!
//! // Slide tiles around
//! game.apply_move(Direction::Left);
//! game.apply_action(GameAction::MoveUp);
//! game.apply_command("right");
//!
//! // Inspect the state
//! let snap = game.snapshot();
//! assert_eq!(snap.score, game.score());
//! assert!(snap.tiles.len() >= 2);
//! ```

pub mod board;
pub mod game_state;
pub mod moves;
pub mod scoring;
pub mod snapshot;
pub mod spawn;
pub mod store;
pub mod terminal;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use game_state::{GameSession, MoveOutcome};
pub use moves::{apply_move, can_move, slide, MergeLocks, MoveResult};
pub use scoring::ScoreTracker;
pub use snapshot::{GameSnapshot, TileSnapshot};
pub use spawn::{pick_spawn, spawn, spawn_value};
pub use store::{KeyValueStore, MemoryStore, StoreError};
pub use terminal::{has_available_merge, is_terminal};
pub use tile::{Tile, TileIdGen};
