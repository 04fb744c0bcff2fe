//! Config generate command

use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use crate::config::Config;

pub fn generate_config(output_path: Option<&str>, force: bool) -> anyhow::Result<()> {
    let path = output_path.unwrap_or("config.example.toml");

    if Path::new(path).exists() && !force {
        anyhow::bail!("{} already exists, pass --force to overwrite", path);
    }

    let content = Config::generate_sample_config();
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path))?;

    println!(
        "{} Wrote example configuration to {}",
        "✓".bold().green(),
        path.cyan()
    );
    println!(
        "  {}",
        "Edit it and move it to linkdeck.toml (or set LINKDECK_CONFIG)".dimmed()
    );

    Ok(())
}
