//! Core game logic - pure, deterministic, and testable.
//!
//! Everything in this crate runs without I/O. Same seed, same inputs, same
//! game: the engine mutates state only through `tick` and `apply_input`,
//! and every candidate piece position is validated before it is committed.
//!
//! # Module Structure
//!
//! - [`board`]: the fixed-size grid of settled cells with row compaction
//! - [`catalog`]: canonical piece shapes and 90-degree rotation
//! - [`engine`]: the falling-block state machine (gravity, locking, spawning)
//! - [`rng`]: seedable uniform piece selection
//! - [`snapshot`]: merged board + active piece view for renderers
//! - [`shared`]: the exclusive-lock handle shared by the host's two drivers
//!
//! # Example
//!
//! ```
//! use blockfall_core::Engine;
//! use blockfall_types::InputCommand;
//!
//! let mut engine = Engine::new(12, 14, 12345);
//! engine.tick(); // first tick spawns a piece
//! engine.apply_input(InputCommand::ShiftLeft);
//! engine.tick(); // gravity moves it down one row
//! assert!(engine.current().is_some());
//! ```

pub mod board;
pub mod catalog;
pub mod engine;
pub mod rng;
pub mod shared;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{rotate, shape_for, PieceShape};
pub use engine::{Engine, PositionedPiece, TickEvent};
pub use rng::{PieceSource, SimpleRng, UniformSource};
pub use shared::SharedEngine;
pub use snapshot::Snapshot;
