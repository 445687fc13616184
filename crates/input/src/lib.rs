//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. There is no
//! key-repeat handling: every press is one command, and the engine applies
//! commands back to back as fast as they arrive.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
