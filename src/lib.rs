//! Top-down guy: a body + gun composite steered and aimed with the pointer across a
//! Tiled map, with a health bar that drains while it moves.
//!
//! The binary only parses arguments; everything else lives here so integration tests
//! in `tests/` can build the same app headless.

pub mod game;
pub mod common;
pub mod plugins;
