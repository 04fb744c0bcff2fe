//! Analytics screen input.

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

pub fn handle_analytics_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Esc | KeyCode::Char('b') => app.close_analytics(),
        KeyCode::Char('r') => app.analytics.reload(),
        KeyCode::Char('y') => {
            if let Some(url) = app.viewed_short_url.clone() {
                app.copy_to_clipboard(&url);
            }
        }
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('q') => app.current_screen = CurrentScreen::Exiting,
        _ => {}
    }
    false
}
