//! Small labeled value box used on the analytics screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::theme::Theme;

pub struct StatCard<'a> {
    label: &'a str,
    value: String,
    accent: Color,
}

impl<'a> StatCard<'a> {
    pub fn new(label: &'a str, value: impl Into<String>, accent: Color) -> Self {
        Self {
            label,
            value: value.into(),
            accent,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let card = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                self.value.clone(),
                Style::default().fg(self.accent).bold(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.muted))
                .title(self.label)
                .title_style(Style::default().fg(theme.text)),
        );

        frame.render_widget(card, area);
    }
}
