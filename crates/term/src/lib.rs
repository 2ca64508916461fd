//! Terminal playback module.
//!
//! This is the display side of the rasterizer: it puts frames produced by the
//! core on a terminal and paces them. Nothing here draws shapes; frames
//! arrive fully rendered.
//!
//! - [`TerminalRenderer`]: alternate-screen output with changed-run diffs
//! - [`PlainSink`]: clear-and-print output for any `io::Write`
//! - [`SleepPacer`]: blocking delay between frames
//! - [`Player`]: pause/step state for interactive playback

pub mod pacer;
pub mod plain;
pub mod player;
pub mod renderer;

pub use tui_raster_core as core;
pub use tui_raster_types as types;

pub use pacer::SleepPacer;
pub use plain::PlainSink;
pub use player::Player;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
