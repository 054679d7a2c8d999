//! Interactive chat mode.
//!
//! Provides a REPL-style interface with slash commands for history,
//! export and language selection.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{ChatSession, SessionConfig};
