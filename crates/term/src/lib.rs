//! Terminal front end: a pure text view plus a crossterm renderer.

pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
