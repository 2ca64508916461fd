//! Terminal input module (player-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::PlayerAction`]s for the frame
//! player.

pub mod map;

pub use tui_raster_types as types;

pub use map::{handle_key_event, should_quit};
