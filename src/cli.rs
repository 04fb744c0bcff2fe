//! Command-line interface definitions using clap
//!
//! No subcommand starts the interactive TUI; each subcommand runs one
//! operation against the backend and exits.

use clap::{Parser, Subcommand};

/// linkdeck - terminal client for a URL-shortening service
#[derive(Parser)]
#[command(name = "linkdeck")]
#[command(version)]
#[command(about = "Shorten URLs, browse recent links, inspect click analytics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Shorten a URL and print the short link
    Shorten {
        /// The long URL to shorten (must include scheme and host)
        url: String,
    },

    /// List recently created short links
    Recent,

    /// Show click analytics for a short code
    Analytics {
        /// The short code to inspect
        code: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate an example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
}
