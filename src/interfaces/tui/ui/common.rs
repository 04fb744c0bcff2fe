//! Shared chrome: title bar, status bar, footer.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::controllers::RecentState;
use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::notify::NotifyKind;

/// Title bar with version and link count once the list has loaded.
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme.theme();

    let mut spans = vec![
        Span::styled("linkdeck", Style::default().fg(theme.primary).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.muted),
        ),
    ];

    if let RecentState::Loaded(list) = app.recent.state() {
        spans.push(Span::styled("| ", Style::default().fg(theme.muted)));
        spans.push(Span::styled(
            format!("Links: {} ", list.len()),
            Style::default().fg(theme.warning),
        ));
    }

    let title = Paragraph::new(vec![Line::from(spans)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.primary)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Status bar: the live notification wins, then in-flight hints, then Ready.
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme.theme();

    let (status_text, status_style) = if let Some(toast) = app.active_toast() {
        let text = match &toast.message {
            Some(message) => format!("{}: {}", toast.title, message),
            None => toast.title.clone(),
        };
        match toast.kind {
            NotifyKind::Success => (
                format!("[SUCCESS] {}", text),
                Style::default().fg(Color::Black).bg(theme.success).bold(),
            ),
            NotifyKind::Error => (
                format!("[ERROR] {}", text),
                Style::default().fg(Color::White).bg(theme.error).bold(),
            ),
        }
    } else if app.submission.is_submitting() {
        ("Shortening…".to_string(), Style::default().fg(theme.warning))
    } else if app.recent.is_loading() {
        (
            "Loading recent links…".to_string(),
            Style::default().fg(theme.warning),
        )
    } else if app.analytics.is_loading() {
        (
            "Loading analytics…".to_string(),
            Style::default().fg(theme.warning),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(theme.primary))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Footer with the shortcuts valid on the current screen.
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme.theme();

    let shortcuts: Vec<(&str, &str, Color)> = match app.current_screen {
        CurrentScreen::Home if app.editing_url => vec![
            ("Enter", "Shorten", theme.success),
            ("Esc", "Browse list", theme.error),
        ],
        CurrentScreen::Home => vec![
            ("i", "Enter URL", theme.success),
            ("j/k", "Navigate", theme.primary),
            ("Enter", "Analytics", theme.primary),
            ("y", "Copy", theme.warning),
            ("r", "Refresh", theme.primary),
            ("t", "Theme", theme.primary),
            ("?", "Help", theme.primary),
            ("q", "Quit", theme.error),
        ],
        CurrentScreen::Analytics => vec![
            ("r", "Reload", theme.primary),
            ("y", "Copy short URL", theme.warning),
            ("Esc/b", "Back", theme.error),
        ],
        CurrentScreen::Help => vec![("q/Esc", "Close", theme.error)],
        CurrentScreen::Exiting => vec![("y", "Yes", theme.success), ("n", "No", theme.error)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(theme.muted)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(theme.text),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}
