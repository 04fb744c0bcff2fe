//! Analytics screen: totals, top-dimension cards, date sparkline,
//! per-dimension breakdown tables.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Sparkline, Table},
};

use crate::api::{AnalyticsAggregate, BreakdownEntry};
use crate::controllers::AnalyticsState;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::BREAKDOWN_ROW_LIMIT;
use crate::interfaces::tui::theme::Theme;
use crate::interfaces::tui::ui::widgets::StatCard;

pub fn draw_analytics_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme.theme();

    match app.analytics.state() {
        AnalyticsState::Loaded(aggregate) => {
            let aggregate = aggregate.clone();
            draw_aggregate(frame, &aggregate, theme, area);
        }
        AnalyticsState::Loading | AnalyticsState::Idle => {
            draw_message(frame, "Loading analytics…", theme.warning, theme, area);
        }
        AnalyticsState::Failed(e) => {
            let message = if e.is_not_found() {
                "This link does not exist."
            } else {
                "Failed to load analytics data. Please try again later."
            };
            draw_message(frame, message, theme.error, theme, area);
        }
    }
}

fn draw_message(
    frame: &mut Frame,
    message: &str,
    color: ratatui::style::Color,
    theme: &Theme,
    area: Rect,
) {
    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(theme.muted)),
            Span::styled("[r]", Style::default().fg(theme.primary).bold()),
            Span::styled(" to retry or ", Style::default().fg(theme.muted)),
            Span::styled("[Esc]", Style::default().fg(theme.error).bold()),
            Span::styled(" to go back", Style::default().fg(theme.muted)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.muted))
                .title("Analytics")
                .title_style(Style::default().fg(theme.primary)),
        );

    frame.render_widget(paragraph, area);
}

fn draw_aggregate(frame: &mut Frame, aggregate: &AnalyticsAggregate, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Header
            Constraint::Length(4),  // Stat cards
            Constraint::Length(6),  // Clicks by date
            Constraint::Min(6),     // Breakdown tables
        ])
        .split(area);

    draw_header(frame, aggregate, theme, chunks[0]);
    draw_stat_cards(frame, aggregate, theme, chunks[1]);
    draw_sparkline(frame, aggregate, theme, chunks[2]);
    draw_breakdowns(frame, aggregate, theme, chunks[3]);
}

fn draw_header(frame: &mut Frame, aggregate: &AnalyticsAggregate, theme: &Theme, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Code: ", Style::default().fg(theme.muted)),
            Span::styled(
                aggregate.short_code.clone(),
                Style::default().fg(theme.primary).bold(),
            ),
            Span::styled("   Created: ", Style::default().fg(theme.muted)),
            Span::styled(
                crate::utils::format::format_date(&aggregate.created_at),
                Style::default().fg(theme.text),
            ),
        ]),
        Line::from(vec![
            Span::styled("URL:  ", Style::default().fg(theme.muted)),
            Span::styled(aggregate.original_url.clone(), Style::default().fg(theme.text)),
        ]),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.primary))
            .title("Analytics")
            .title_style(Style::default().fg(theme.primary).bold()),
    );

    frame.render_widget(header, area);
}

fn draw_stat_cards(frame: &mut Frame, aggregate: &AnalyticsAggregate, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    StatCard::new("Total Clicks", aggregate.total_clicks.to_string(), theme.success)
        .render(frame, chunks[0], theme);
    StatCard::new(
        "Top Browser",
        aggregate.top_browser().unwrap_or("N/A"),
        theme.primary,
    )
    .render(frame, chunks[1], theme);
    StatCard::new(
        "Top Device",
        aggregate.top_device().unwrap_or("N/A"),
        theme.primary,
    )
    .render(frame, chunks[2], theme);
    StatCard::new(
        "Top Country",
        aggregate.top_country().unwrap_or("N/A"),
        theme.warning,
    )
    .render(frame, chunks[3], theme);
}

fn draw_sparkline(frame: &mut Frame, aggregate: &AnalyticsAggregate, theme: &Theme, area: Rect) {
    let data: Vec<u64> = aggregate.clicks_by_date.iter().map(|d| d.count).collect();

    if data.is_empty() {
        let empty = Paragraph::new("No data available")
            .style(Style::default().fg(theme.muted))
            .alignment(Alignment::Center)
            .block(date_block(theme));
        frame.render_widget(empty, area);
        return;
    }

    let sparkline = Sparkline::default()
        .block(date_block(theme))
        .data(&data)
        .style(Style::default().fg(theme.success));

    frame.render_widget(sparkline, area);
}

fn date_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.muted))
        .title("Clicks by Date")
        .title_style(Style::default().fg(theme.primary))
}

fn draw_breakdowns(frame: &mut Frame, aggregate: &AnalyticsAggregate, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    draw_breakdown_table(frame, "Browsers", &aggregate.clicks_by_browser, theme, chunks[0]);
    draw_breakdown_table(frame, "Devices", &aggregate.clicks_by_device, theme, chunks[1]);
    draw_breakdown_table(frame, "Countries", &aggregate.clicks_by_country, theme, chunks[2]);
}

fn draw_breakdown_table<E: BreakdownEntry>(
    frame: &mut Frame,
    title: &str,
    entries: &[E],
    theme: &Theme,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.muted))
        .title(title.to_string())
        .title_style(Style::default().fg(theme.primary));

    if entries.is_empty() {
        let empty = Paragraph::new("No data available")
            .style(Style::default().fg(theme.muted))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = entries
        .iter()
        .take(BREAKDOWN_ROW_LIMIT)
        .map(|entry| {
            Row::new(vec![
                Span::styled(entry.dimension().to_string(), Style::default().fg(theme.text)),
                Span::styled(
                    entry.count().to_string(),
                    Style::default().fg(theme.success).bold(),
                ),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Percentage(72), Constraint::Percentage(28)])
        .block(block);

    frame.render_widget(table, area);
}
