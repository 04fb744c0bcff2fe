//! Quit confirmation popup.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;
use crate::interfaces::tui::ui::widgets::Popup;

pub fn draw_exiting_screen(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme.theme();

    let inner_area = Popup::new("Exit Confirmation", popup::EXITING)
        .theme_color(theme.warning)
        .margin(Margin::new(2, 2))
        .render(frame, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to exit?",
            Style::default().fg(theme.text).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press [y] to quit, [n] to cancel",
            Style::default().fg(theme.muted),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(paragraph, inner_area);
}
