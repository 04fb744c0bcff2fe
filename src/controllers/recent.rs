//! Recent-list controller
//!
//! Fetches the recent-links collection at startup and once per observed
//! link-created event. Every fetch carries a generation number; a response
//! from a superseded generation is discarded, so only the newest request can
//! populate state. Failures surface one notification per attempt and are
//! never retried automatically.

use std::sync::Arc;

use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, warn};

use crate::api::{RecentList, ShortenResult, ShortenerApi};
use crate::errors::ServiceError;
use crate::events::{LinkEvent, LinkEvents};
use crate::notify::{Notification, NotifySink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecentState {
    Loading,
    Loaded(RecentList),
    Failed,
}

type FetchOutcome = (u64, Result<RecentList, ServiceError>);

pub struct RecentListController {
    api: Arc<dyn ShortenerApi>,
    notify: Arc<dyn NotifySink>,
    events_rx: broadcast::Receiver<LinkEvent>,

    state: RecentState,
    generation: u64,

    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl RecentListController {
    /// Subscribes to link events and starts the initial fetch immediately.
    pub fn new(
        api: Arc<dyn ShortenerApi>,
        notify: Arc<dyn NotifySink>,
        events: &LinkEvents,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        let mut controller = Self {
            api,
            notify,
            events_rx: events.subscribe(),
            state: RecentState::Loading,
            generation: 0,
            outcome_tx,
            outcome_rx,
        };
        controller.refresh();
        controller
    }

    pub fn state(&self) -> &RecentState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == RecentState::Loading
    }

    /// The links to display; empty while loading or after a failure.
    pub fn links(&self) -> &[ShortenResult] {
        match &self.state {
            RecentState::Loaded(list) => list,
            _ => &[],
        }
    }

    /// Start a new fetch, superseding any in-flight one.
    pub fn refresh(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        self.state = RecentState::Loading;

        let api = self.api.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = api.list_recent().await;
            let _ = tx.send((generation, outcome));
        });
    }

    /// Drain link events and completed fetches. Returns true when state
    /// changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        loop {
            match self.events_rx.try_recv() {
                Ok(LinkEvent::Created(_)) => {
                    self.refresh();
                    changed = true;
                }
                Err(TryRecvError::Lagged(missed)) => {
                    // Events were dropped; one refetch covers them all.
                    warn!("missed {} link events, refreshing", missed);
                    self.refresh();
                    changed = true;
                }
                Err(_) => break,
            }
        }

        while let Ok((generation, outcome)) = self.outcome_rx.try_recv() {
            if generation != self.generation {
                debug!(
                    "discarding superseded recent-list response (generation {} of {})",
                    generation, self.generation
                );
                continue;
            }
            changed = true;

            match outcome {
                Ok(list) => {
                    debug!("recent list loaded: {} links", list.len());
                    self.state = RecentState::Loaded(list);
                }
                Err(e) => {
                    warn!("recent list fetch failed: {}", e);
                    self.state = RecentState::Failed;
                    self.notify
                        .notify(Notification::error("Error fetching recent URLs"));
                }
            }
        }

        changed
    }
}
