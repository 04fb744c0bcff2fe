//! Recent command

use std::sync::Arc;

use colored::Colorize;

use crate::api::ShortenerApi;
use crate::errors::Result;
use crate::utils::format::format_datetime;

pub async fn list_recent(api: Arc<dyn ShortenerApi>) -> Result<()> {
    let links = api.list_recent().await?;

    if links.is_empty() {
        println!("{} No URLs have been shortened yet", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Recent short links:".bold().green());
    println!();
    for link in &links {
        println!(
            "  {} -> {} {}",
            link.short_url.cyan().bold(),
            link.original_url.blue().underline(),
            format!("({})", format_datetime(&link.created_at))
                .dimmed()
                .yellow()
        );
    }
    println!();
    println!(
        "{} Total {} short links",
        "ℹ".bold().blue(),
        links.len().to_string().green()
    );

    Ok(())
}
