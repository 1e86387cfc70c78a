//! Command-line driver: command parsing, dispatch, rendering and the REPL.

pub mod commands;
pub mod repl;
pub mod repl_commands;
pub mod repl_complete;

pub use commands::{render, render_text, Command, Outcome, Session};
pub use repl_commands::ReplState;
