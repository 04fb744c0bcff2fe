//! Help popup listing every keyboard shortcut.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;
use crate::interfaces::tui::ui::widgets::Popup;

pub fn draw_help_screen(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme.theme();

    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP)
        .theme_color(theme.primary)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let section = |name: &'static str| {
        Line::from(Span::styled(
            name,
            Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(keys, Style::default().fg(theme.primary)),
            Span::styled(desc, Style::default().fg(theme.text)),
        ])
    };

    let help_text = vec![
        Line::from(""),
        section("SHORTEN"),
        entry("  i, e             ", "Edit the URL field"),
        entry("  Enter            ", "Submit the URL (while editing)"),
        entry("  Esc              ", "Leave the URL field"),
        entry("  c                ", "Copy the last short URL"),
        Line::from(""),
        section("RECENT LINKS"),
        entry("  Up/Down, j/k     ", "Select a row"),
        entry("  g / G            ", "Jump to top / bottom"),
        entry("  Enter            ", "Open analytics for the selection"),
        entry("  y                ", "Copy the selected short URL"),
        entry("  r                ", "Refresh the list"),
        Line::from(""),
        section("ANALYTICS"),
        entry("  r                ", "Reload the aggregate"),
        entry("  y                ", "Copy the short URL"),
        entry("  Esc, b           ", "Back to the link list"),
        Line::from(""),
        section("GENERAL"),
        entry("  t                ", "Toggle dark/light theme"),
        entry("  ?                ", "This help"),
        entry("  q                ", "Quit"),
    ];

    let paragraph = Paragraph::new(help_text);
    frame.render_widget(paragraph, inner_area);
}
