//! Best-score persistence backends.
//!
//! The engine only knows the [`KeyValueStore`](crate::core::KeyValueStore)
//! trait. This crate provides the implementations the terminal game uses:
//!
//! - [`JsonFileStore`]: a small JSON object on disk
//! - [`WriteBehindStore`]: wraps any store so writes happen on a worker thread
//!   and never stall move processing

pub mod json_file;
pub mod write_behind;

pub use tui_2048_core as core;

pub use json_file::JsonFileStore;
pub use write_behind::WriteBehindStore;
