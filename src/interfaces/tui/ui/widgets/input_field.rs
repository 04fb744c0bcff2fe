//! Single-line text input with an optional inline error row.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::theme::Theme;

/// Bordered input field. Configured via builder calls, rendered once.
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    error: Option<&'a str>,
    placeholder: Option<&'a str>,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            placeholder: None,
        }
    }

    /// Active fields get a highlighted border and a visible cursor.
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Validation error shown on the row below the field.
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Height the field needs: 3 for the bordered input, +1 for the error
    /// row when present.
    pub fn height(&self) -> u16 {
        if self.error.is_some() { 4 } else { 3 }
    }

    fn display_title(&self) -> String {
        if self.value.is_empty()
            && let Some(placeholder) = self.placeholder
        {
            return format!("{} ({})", self.title, placeholder);
        }
        self.title.to_string()
    }

    fn border_style(&self, theme: &Theme) -> Style {
        if self.is_active {
            Style::default().fg(theme.primary).bold()
        } else {
            Style::default().fg(theme.muted)
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let input = Paragraph::new(self.value)
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(self.display_title())
                    .border_style(self.border_style(theme)),
            );
        frame.render_widget(input, chunks[0]);

        if self.is_active {
            // Block cursor after the last character.
            frame.set_cursor_position((
                chunks[0].x + 1 + self.value.chars().count() as u16,
                chunks[0].y + 1,
            ));
        }

        if let Some(error) = self.error {
            let error_line = Paragraph::new(Line::from(vec![
                Span::styled("✗ ", Style::default().fg(theme.error).bold()),
                Span::styled(error, Style::default().fg(theme.error)),
            ]));
            frame.render_widget(error_line, chunks[1]);
        }
    }
}
