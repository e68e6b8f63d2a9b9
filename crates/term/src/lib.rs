//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for the tile board. It avoids
//! widget/layout frameworks and renders into a framebuffer that is diffed and
//! flushed to the terminal.
//!
//! - [`Animator`] is the [`core::RenderAdapter`] the game drives: it turns
//!   move/despawn requests into interpolated sprites.
//! - [`GameView`] draws a snapshot plus those sprites, 2 columns per cell to
//!   compensate for glyph aspect ratio.
//! - [`TerminalRenderer`] owns raw mode, the alternate screen and mouse capture.

pub mod animator;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tiles_core as core;
pub use tui_tiles_types as types;

pub use animator::{Animator, Sprite};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
