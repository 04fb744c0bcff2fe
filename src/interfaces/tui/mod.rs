//! Terminal user interface
//!
//! Interactive mode: shorten URLs, browse recent links, inspect analytics.
//! Draws on stderr so shell pipelines reading stdout stay usable.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

mod app;
mod event_handler;
mod theme;
mod ui;

pub mod constants;

use app::App;
use ui::ui;

use crate::api::HttpShortenerApi;
use crate::config::Config;

/// Run the TUI application until the user quits.
pub async fn run_tui(config: &Config) -> anyhow::Result<()> {
    install_panic_hook();

    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let api = Arc::new(HttpShortenerApi::from_config(config));
    let mut app = App::new(api, config);
    let res = run_app(&mut terminal, &mut app).await;

    restore_terminal();
    terminal.show_cursor()?;

    res?;
    Ok(())
}

/// Main application loop: draw, poll input with a short timeout, advance
/// controller state between frames.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    let tick = Duration::from_millis(app.tick_ms);

    loop {
        app.poll_updates();

        terminal.draw(|f| ui(f, app))?;

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
        {
            let should_exit = event_handler::handle_key_event(app, key);
            if should_exit {
                return Ok(());
            }
        }
    }
}

/// Leave raw mode and the alternate screen. Safe to call more than once.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stderr(), LeaveAlternateScreen);
}

/// Restore the terminal before the crash report prints, so the panic message
/// lands on a usable screen instead of vanishing with the alternate buffer.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}
