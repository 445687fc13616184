//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view paints a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a framebuffer of styled
//! cells, and the renderer flushes only the cells that changed since the
//! previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep the view pure so it can be unit-tested without a terminal
//! - Colour tiles by value and show transient flags through styling only

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, TerminalRenderer};
