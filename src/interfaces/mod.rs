//! User-facing surfaces: interactive TUI and one-shot CLI commands.

pub mod cli;
pub mod tui;
