//! Shorten command

use std::sync::Arc;

use colored::Colorize;

use crate::api::{ShortenRequest, ShortenerApi};
use crate::errors::{Result, ServiceError};
use crate::utils::format::format_datetime;
use crate::utils::url_validator::validate_submission_url;

pub async fn shorten_url(api: Arc<dyn ShortenerApi>, url: &str) -> Result<()> {
    // Same local validation the TUI runs: invalid input never reaches the
    // backend.
    validate_submission_url(url).map_err(|e| ServiceError::validation(e.message()))?;

    let result = api.shorten(ShortenRequest::new(url.trim())).await?;

    println!(
        "{} Shortened: {}",
        "✓".bold().green(),
        result.original_url.blue().underline()
    );
    println!(
        "  {} {}",
        "Short URL:".bold(),
        result.short_url.cyan().bold()
    );
    println!("  {} {}", "Code:".bold(), result.short_code.magenta());
    println!(
        "  {} {}",
        "Created:".bold(),
        format_datetime(&result.created_at).yellow()
    );

    Ok(())
}
