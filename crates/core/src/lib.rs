//! Core game logic - pure, deterministic, and testable
//!
//! Everything that decides what happens on the board lives here. There is no
//! terminal, no clock and no I/O: time comes in through
//! [`GameState::advance`], drawing goes out through the [`RenderAdapter`]
//! trait, and randomness comes from a [`TileSource`].
//!
//! # Module Structure
//!
//! - [`grid`]: W×H cell storage; the one place a tile's coordinate is written
//! - [`tile`]: tile identity and kind
//! - [`gravity`]: one downward sweep with top-row spawning
//! - [`matching`]: one detect-then-remove pass for runs of three or more
//! - [`cascade`]: the resolution loop as a step function
//! - [`timeline`]: deferred continuations on a cooperative clock
//! - [`shift`]: a line shift in progress and its commit
//! - [`gesture`]: pointer begin/drag/end into shift sessions
//! - [`scoring`]: per-kind turn and total tallies
//! - [`rng`]: seeded uniform tile kinds
//! - [`game_state`]: the facade tying all of the above together
//!
//! # Game Rules
//!
//! - Gravity runs to a fixed point before any match pass.
//! - A match pass removes every horizontal or vertical run of three or more
//!   identical kinds at once; removal always gets another gravity check.
//! - Input is disabled from the first step of a cascade until it settles.
//! - Dragging a tile past a small threshold locks an axis; releasing rotates
//!   that row or column by the rounded number of cells, wrapping around.
//!
//! # Example
//!
//! ```
//! use tui_tiles_core::{matching, GameState};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert!(game.settle(10_000));
//!
//! assert!(game.grid().is_full());
//! assert!(!matching::has_run(game.grid()));
//! assert!(game.input_enabled());
//! ```

pub mod cascade;
pub mod game_state;
pub mod gesture;
pub mod gravity;
pub mod grid;
pub mod matching;
pub mod render;
pub mod rng;
pub mod scoring;
pub mod shift;
pub mod snapshot;
pub mod tile;
pub mod timeline;

pub use tui_tiles_types as types;

// Re-export commonly used types for convenience
pub use cascade::{Cascade, CascadeStats, Phase, Step, Timing};
pub use game_state::{CoreEvent, GameState};
pub use gesture::InputController;
pub use grid::Grid;
pub use render::{NullRenderer, Recorder, RenderAdapter, RenderCall};
pub use rng::{Sequence, SimpleRng, TileSource};
pub use scoring::Tally;
pub use shift::ShiftSession;
pub use snapshot::{GameSnapshot, ShiftSnapshot};
pub use tile::{Tile, TileId, TileIds};
pub use timeline::Timeline;
