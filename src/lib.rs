//! TUI Tiles (workspace facade crate).
//!
//! Re-exports the member crates as `tui_tiles::{core,input,term,types}` and
//! holds the pieces only the binary needs: environment configuration and log
//! setup.

pub mod config;
pub mod logging;

pub use tui_tiles_core as core;
pub use tui_tiles_input as input;
pub use tui_tiles_term as term;
pub use tui_tiles_types as types;

pub use config::{ConfigError, GameConfig};
