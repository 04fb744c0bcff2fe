//! CLI interface module
//!
//! One-shot command runners. Each runner performs a single backend operation
//! and prints a colored, human-readable result; errors bubble up for main to
//! print and turn into a non-zero exit.

pub mod commands;

use std::sync::Arc;

use crate::api::HttpShortenerApi;
use crate::cli::{Commands, ConfigCommands};
use crate::config::Config;

/// Run a CLI command from clap-parsed input.
pub async fn run_cli_command(command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        // Config management needs no backend.
        Commands::Config { action } => {
            let ConfigCommands::Generate { output_path, force } = action;
            commands::generate_config(output_path.as_deref(), force)
        }
        command => {
            let api = Arc::new(HttpShortenerApi::from_config(config));
            match command {
                Commands::Shorten { url } => commands::shorten_url(api, &url).await?,
                Commands::Recent => commands::list_recent(api).await?,
                Commands::Analytics { code } => commands::show_analytics(api, &code).await?,
                Commands::Config { .. } => unreachable!("handled above"),
            }
            Ok(())
        }
    }
}
