//! App state
//!
//! Owns the three controllers plus presentation-only state (screen, theme,
//! selection, toast). All controller state advances inside `poll_updates`,
//! called by the main loop between frames; key handlers only trigger
//! operations and flip presentation state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::widgets::TableState;
use tokio::sync::mpsc;

use crate::api::{ShortenResult, ShortenerApi};
use crate::config::Config;
use crate::controllers::{AnalyticsController, RecentListController, SubmissionController};
use crate::events::LinkEvents;
use crate::notify::{ChannelSink, Notification, NotifySink};

use super::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Home,
    Analytics,
    Help,
    Exiting,
}

pub struct App {
    pub current_screen: CurrentScreen,

    pub submission: SubmissionController,
    pub recent: RecentListController,
    pub analytics: AnalyticsController,

    /// Modal input: when set, Home keys edit the URL field instead of
    /// navigating the table.
    pub editing_url: bool,
    pub selected_index: usize,
    pub table_state: TableState,
    pub theme: ThemeMode,

    /// Short URL belonging to the analytics view currently open; kept here
    /// because the aggregate payload does not carry it.
    pub viewed_short_url: Option<String>,

    pub tick_ms: u64,
    toast_ttl: Duration,
    active_toast: Option<(Notification, Instant)>,
    notifications_rx: mpsc::UnboundedReceiver<Notification>,
}

impl App {
    pub fn new(api: Arc<dyn ShortenerApi>, config: &Config) -> App {
        let (sink, notifications_rx) = ChannelSink::new();
        let sink: Arc<dyn NotifySink> = Arc::new(sink);
        let events = LinkEvents::default();

        let submission = SubmissionController::new(api.clone(), sink.clone(), events.clone());
        let recent = RecentListController::new(api.clone(), sink.clone(), &events);
        let analytics = AnalyticsController::new(api, sink);

        let mut table_state = TableState::default();
        table_state.select(Some(0));

        App {
            current_screen: CurrentScreen::Home,
            submission,
            recent,
            analytics,
            editing_url: true,
            selected_index: 0,
            table_state,
            theme: ThemeMode::from_name(&config.ui.theme),
            viewed_short_url: None,
            tick_ms: config.ui.tick_ms,
            toast_ttl: Duration::from_secs(config.ui.toast_secs),
            active_toast: None,
            notifications_rx,
        }
    }

    /// Advance all controllers and the toast lifecycle. Returns true when
    /// anything observable changed.
    pub fn poll_updates(&mut self) -> bool {
        let mut changed = self.submission.poll();
        changed |= self.recent.poll();
        changed |= self.analytics.poll();

        while let Ok(notification) = self.notifications_rx.try_recv() {
            self.active_toast = Some((notification, Instant::now()));
            changed = true;
        }

        if let Some((_, shown_at)) = &self.active_toast
            && shown_at.elapsed() >= self.toast_ttl
        {
            self.active_toast = None;
            changed = true;
        }

        // The list may have shrunk under the selection.
        let len = self.recent.links().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
        self.table_state.select(if len == 0 {
            None
        } else {
            Some(self.selected_index)
        });

        changed
    }

    pub fn active_toast(&self) -> Option<&Notification> {
        self.active_toast.as_ref().map(|(n, _)| n)
    }

    /// Show presentation-originated feedback (clipboard results and the
    /// like) through the same toast slot controller notifications use.
    pub fn toast(&mut self, notification: Notification) {
        self.active_toast = Some((notification, Instant::now()));
    }

    pub fn copy_to_clipboard(&mut self, text: &str) {
        if crate::clipboard::copy(text) {
            self.toast(Notification::success("URL copied to clipboard"));
        } else {
            self.toast(Notification::error("Failed to copy URL"));
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let len = self.recent.links().len();
        if len > 0 && self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.selected_index = self.recent.links().len().saturating_sub(1);
    }

    pub fn selected_link(&self) -> Option<&ShortenResult> {
        self.recent.links().get(self.selected_index)
    }

    /// Open the analytics view for the selected row, falling back to the
    /// most recently shortened link.
    pub fn open_analytics(&mut self) {
        let link = self
            .selected_link()
            .or_else(|| self.submission.last_result())
            .cloned();

        if let Some(link) = link {
            self.viewed_short_url = Some(link.short_url.clone());
            self.analytics.load(&link.short_code);
            self.current_screen = CurrentScreen::Analytics;
        }
    }

    pub fn close_analytics(&mut self) {
        self.analytics.reset();
        self.viewed_short_url = None;
        self.current_screen = CurrentScreen::Home;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}
