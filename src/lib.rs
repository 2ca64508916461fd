//! TUI Raster (workspace facade crate).
//!
//! Re-exports the member crates as `tui_raster::{core,input,term,types}` so
//! the binary, tests and benches share one import path while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_raster_core as core;
pub use tui_raster_input as input;
pub use tui_raster_term as term;
pub use tui_raster_types as types;
