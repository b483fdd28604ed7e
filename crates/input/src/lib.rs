//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`blockfall_types::InputCommand`]s.
//! Commands are discrete presses; held keys repeat through the terminal's
//! own auto-repeat, which is all the engine needs.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, should_reset};
