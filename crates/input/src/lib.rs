//! Terminal input module (engine-facing).
//!
//! Independent of any UI framework beyond `crossterm` event types. Mouse
//! presses, drags and releases become [`PointerEvent`]s in board-local space;
//! a few keys map to front-end [`Command`]s.

pub mod map;
pub mod pointer;

pub use tui_tiles_types as types;

pub use map::{handle_key_event, should_quit, Command};
pub use pointer::{map_mouse, pointer_id, PointerEvent};
