//! Analytics command

use std::sync::Arc;

use colored::Colorize;

use crate::api::{BreakdownEntry, ShortenerApi};
use crate::errors::Result;
use crate::utils::format::format_datetime;

pub async fn show_analytics(api: Arc<dyn ShortenerApi>, code: &str) -> Result<()> {
    let aggregate = api.get_analytics(code).await?;

    println!(
        "{} Analytics for {}",
        "✓".bold().green(),
        aggregate.short_code.cyan().bold()
    );
    println!(
        "  {} {}",
        "URL:".bold(),
        aggregate.original_url.blue().underline()
    );
    println!(
        "  {} {}",
        "Created:".bold(),
        format_datetime(&aggregate.created_at).yellow()
    );
    println!(
        "  {} {}",
        "Total clicks:".bold(),
        aggregate.total_clicks.to_string().green().bold()
    );

    print_breakdown("Clicks by date", &aggregate.clicks_by_date);
    print_breakdown("Clicks by browser", &aggregate.clicks_by_browser);
    print_breakdown("Clicks by device", &aggregate.clicks_by_device);
    print_breakdown("Clicks by country", &aggregate.clicks_by_country);

    Ok(())
}

fn print_breakdown<E: BreakdownEntry>(title: &str, entries: &[E]) {
    println!();
    println!("{}", title.bold());

    if entries.is_empty() {
        println!("  {}", "no data".dimmed());
        return;
    }

    for entry in entries {
        println!(
            "  {:>6}  {}",
            entry.count().to_string().green(),
            entry.dimension().cyan()
        );
    }
}
