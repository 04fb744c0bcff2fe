//! Home screen input: modal URL editing plus list navigation.

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

pub fn handle_home_screen(app: &mut App, key_code: KeyCode) -> bool {
    if app.editing_url {
        handle_url_editing(app, key_code)
    } else {
        handle_navigation(app, key_code)
    }
}

/// Keys while the URL field is focused. Submission stays in editing mode so
/// the result card appears under a still-focused field.
fn handle_url_editing(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Enter => app.submission.submit(),
        KeyCode::Esc => app.editing_url = false,
        KeyCode::Backspace => app.submission.backspace(),
        KeyCode::Char(c) => app.submission.push_char(c),
        _ => {}
    }
    false
}

fn handle_navigation(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('i') | KeyCode::Char('e') => app.editing_url = true,
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::Enter => app.open_analytics(),
        KeyCode::Char('y') => {
            if let Some(link) = app.selected_link() {
                let url = link.short_url.clone();
                app.copy_to_clipboard(&url);
            }
        }
        KeyCode::Char('c') => {
            if let Some(result) = app.submission.last_result() {
                let url = result.short_url.clone();
                app.copy_to_clipboard(&url);
            }
        }
        KeyCode::Char('r') => app.recent.refresh(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('?') => app.current_screen = CurrentScreen::Help,
        KeyCode::Char('q') => app.current_screen = CurrentScreen::Exiting,
        // Any other printable refocuses the URL field and types into it.
        KeyCode::Char(c) => {
            app.editing_url = true;
            app.submission.push_char(c);
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::api::{
        AnalyticsAggregate, RecentList, ShortenRequest, ShortenResult, ShortenerApi,
    };
    use crate::config::Config;
    use crate::errors::Result as ApiResult;

    struct NoopApi;

    #[async_trait]
    impl ShortenerApi for NoopApi {
        async fn shorten(&self, _req: ShortenRequest) -> ApiResult<ShortenResult> {
            panic!("shorten must not be called");
        }

        async fn get_analytics(&self, _code: &str) -> ApiResult<AnalyticsAggregate> {
            panic!("get_analytics must not be called");
        }

        async fn list_recent(&self) -> ApiResult<RecentList> {
            panic!("list_recent must not be called");
        }
    }

    fn app() -> App {
        App::new(Arc::new(NoopApi), &Config::default())
    }

    #[tokio::test]
    async fn test_unbound_printable_enters_editing_with_that_char() {
        let mut app = app();
        app.editing_url = false;

        handle_home_screen(&mut app, KeyCode::Char('h'));
        assert!(app.editing_url);
        assert_eq!(app.submission.input(), "h");

        // Once editing, formerly bound keys type as characters.
        handle_home_screen(&mut app, KeyCode::Char('q'));
        assert_eq!(app.submission.input(), "hq");
        assert_eq!(app.current_screen, CurrentScreen::Home);
    }

    #[tokio::test]
    async fn test_bound_keys_keep_navigating() {
        let mut app = app();
        app.editing_url = false;

        handle_home_screen(&mut app, KeyCode::Char('j'));
        assert!(!app.editing_url);
        assert_eq!(app.submission.input(), "");

        handle_home_screen(&mut app, KeyCode::Char('q'));
        assert_eq!(app.current_screen, CurrentScreen::Exiting);
    }
}
