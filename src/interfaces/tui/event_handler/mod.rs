//! Keyboard event handling
//!
//! One handler per screen; `handle_key_event` dispatches on the current
//! screen and returns whether the application should exit. Handlers only
//! trigger controller operations and flip presentation state; controller
//! state itself advances in `App::poll_updates`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};

mod analytics_screen;
mod home_screen;
mod misc_screens;

use analytics_screen::handle_analytics_screen;
use home_screen::handle_home_screen;
use misc_screens::{handle_exiting_screen, handle_help_screen};

/// Handle one key event. Returns true when the application should exit.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    // Windows terminals deliver both press and release.
    if key.kind == KeyEventKind::Release {
        return false;
    }

    // Ctrl-C quits from anywhere, without confirmation.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.current_screen {
        CurrentScreen::Home => handle_home_screen(app, key.code),
        CurrentScreen::Analytics => handle_analytics_screen(app, key.code),
        CurrentScreen::Help => handle_help_screen(app, key.code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key.code),
    }
}
