//! Analytics controller
//!
//! Fetches one link's aggregate by short code. Responses come back tagged
//! with the code they were requested for and are applied only while that
//! code is still the selected one: last request wins by code identity, not
//! by arrival order. The failed state keeps the service error so
//! presentation can tell an unknown code from a backend fault.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{AnalyticsAggregate, ShortenerApi};
use crate::errors::ServiceError;
use crate::notify::{Notification, NotifySink};

#[derive(Debug, Clone)]
pub enum AnalyticsState {
    /// No code selected yet.
    Idle,
    Loading,
    Loaded(AnalyticsAggregate),
    Failed(ServiceError),
}

type FetchOutcome = (String, Result<AnalyticsAggregate, ServiceError>);

pub struct AnalyticsController {
    api: Arc<dyn ShortenerApi>,
    notify: Arc<dyn NotifySink>,

    code: Option<String>,
    state: AnalyticsState,

    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl AnalyticsController {
    pub fn new(api: Arc<dyn ShortenerApi>, notify: Arc<dyn NotifySink>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Self {
            api,
            notify,
            code: None,
            state: AnalyticsState::Idle,
            outcome_tx,
            outcome_rx,
        }
    }

    /// The short code the controller is currently keyed by.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn state(&self) -> &AnalyticsState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, AnalyticsState::Loading)
    }

    /// Select a code and fetch its aggregate. Any response still in flight
    /// for a previously selected code becomes stale.
    pub fn load(&mut self, code: &str) {
        self.code = Some(code.to_string());
        self.state = AnalyticsState::Loading;

        let api = self.api.clone();
        let tx = self.outcome_tx.clone();
        let code = code.to_string();
        tokio::spawn(async move {
            let outcome = api.get_analytics(&code).await;
            let _ = tx.send((code, outcome));
        });
    }

    /// Refetch the selected code, if any. Manual retry path.
    pub fn reload(&mut self) {
        if let Some(code) = self.code.clone() {
            self.load(&code);
        }
    }

    /// Forget the selection, e.g. when leaving the detail view.
    pub fn reset(&mut self) {
        self.code = None;
        self.state = AnalyticsState::Idle;
    }

    /// Apply completed fetches for the selected code. Returns true when
    /// state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        while let Ok((code, outcome)) = self.outcome_rx.try_recv() {
            if self.code.as_deref() != Some(code.as_str()) {
                debug!("discarding stale analytics response for {}", code);
                continue;
            }
            changed = true;

            match outcome {
                Ok(aggregate) => {
                    debug!(
                        "analytics loaded for {}: {} clicks",
                        code, aggregate.total_clicks
                    );
                    self.state = AnalyticsState::Loaded(aggregate);
                }
                Err(e) => {
                    warn!("analytics fetch failed for {}: {}", code, e);
                    self.notify.notify(
                        Notification::error("Error").with_message("Failed to load analytics data"),
                    );
                    self.state = AnalyticsState::Failed(e);
                }
            }
        }

        changed
    }
}
