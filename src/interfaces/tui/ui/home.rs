//! Home screen: URL input, last result card, recent-links table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use crate::controllers::RecentState;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{SHORT_URL_TRUNCATE_LENGTH, URL_TRUNCATE_LENGTH};
use crate::interfaces::tui::ui::widgets::InputField;
use crate::utils::format::{format_date, truncate};

pub fn draw_home_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let input = InputField::new("Long URL", app.submission.input())
        .active(app.editing_url)
        .error(app.submission.error())
        .placeholder("https://example.com/some/long/path");

    let result_height = if app.submission.last_result().is_some() {
        6
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(input.height()),
            Constraint::Length(result_height),
            Constraint::Min(5),
        ])
        .split(area);

    input.render(frame, chunks[0], app.theme.theme());

    if app.submission.last_result().is_some() {
        draw_result_card(frame, app, chunks[1]);
    }

    draw_recent_table(frame, app, chunks[2]);
}

/// Card showing the most recently shortened link.
fn draw_result_card(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme.theme();
    let Some(result) = app.submission.last_result() else {
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Short URL: ", Style::default().fg(theme.muted)),
            Span::styled(
                result.short_url.clone(),
                Style::default().fg(theme.success).bold(),
            ),
            Span::styled("  [c] copy", Style::default().fg(theme.muted)),
        ]),
        Line::from(vec![
            Span::styled("Original:  ", Style::default().fg(theme.muted)),
            Span::styled(result.original_url.clone(), Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::styled("Created:   ", Style::default().fg(theme.muted)),
            Span::styled(
                crate::utils::format::format_datetime(&result.created_at),
                Style::default().fg(theme.text),
            ),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.success))
            .title("Shortened!")
            .title_style(Style::default().fg(theme.success).bold()),
    );

    frame.render_widget(card, area);
}

fn draw_recent_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme.theme();
    let links = app.recent.links();

    if links.is_empty() {
        let (text, border) = match app.recent.state() {
            RecentState::Loading => ("Loading recent links…", theme.warning),
            RecentState::Failed => ("Could not load recent links. Press [r] to retry.", theme.error),
            RecentState::Loaded(_) => ("No URLs have been shortened yet.", theme.muted),
        };

        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                text,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(theme.muted)),
                Span::styled("[i]", Style::default().fg(theme.success).bold()),
                Span::styled(" to shorten your first URL", Style::default().fg(theme.muted)),
            ]),
        ])
        .block(table_block(theme, "Recent URLs"))
        .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Span::styled("Original URL", Style::default().fg(theme.warning).bold()),
        Span::styled("Short URL", Style::default().fg(theme.warning).bold()),
        Span::styled("Created", Style::default().fg(theme.warning).bold()),
    ])
    .bottom_margin(1);

    let rows: Vec<Row> = links
        .iter()
        .map(|link| {
            Row::new(vec![
                Span::styled(
                    truncate(&link.original_url, URL_TRUNCATE_LENGTH),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    truncate(&link.short_url, SHORT_URL_TRUNCATE_LENGTH),
                    Style::default().fg(theme.primary).bold(),
                ),
                Span::styled(format_date(&link.created_at), Style::default().fg(theme.muted)),
            ])
        })
        .collect();

    let title = format!("Recent URLs ({})", links.len());
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(32),
            Constraint::Percentage(18),
        ],
    )
    .header(header)
    .block(table_block(theme, &title))
    .row_highlight_style(
        Style::default()
            .bg(theme.highlight_bg)
            .fg(theme.highlight_fg)
            .bold(),
    )
    .highlight_symbol("» ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn table_block(theme: &crate::interfaces::tui::theme::Theme, title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.muted))
        .title(title.to_string())
        .title_style(Style::default().fg(theme.primary))
}
