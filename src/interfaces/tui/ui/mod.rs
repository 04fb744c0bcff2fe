// UI submodules
mod analytics;
mod common;
mod exiting;
mod help;
mod home;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};

pub use analytics::draw_analytics_screen;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use home::draw_home_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    match app.current_screen {
        CurrentScreen::Home => draw_home_screen(frame, app, main_chunks[1]),
        CurrentScreen::Analytics => draw_analytics_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => {
            // Help floats over the screen it was opened from.
            draw_home_screen(frame, app, main_chunks[1]);
            draw_help_screen(frame, app, main_chunks[1]);
        }
        CurrentScreen::Exiting => {
            draw_home_screen(frame, app, main_chunks[1]);
            draw_exiting_screen(frame, app, main_chunks[1]);
        }
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
