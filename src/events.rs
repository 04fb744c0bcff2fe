//! Link lifecycle events
//!
//! Broadcast bus decoupling the submission flow from whoever cares that a
//! link was created. Emitting with no subscribers is not an error; a lagged
//! receiver only means missed events, which subscribers compensate for by
//! refetching.

use tokio::sync::broadcast;
use tracing::debug;

use crate::api::ShortenResult;

#[derive(Debug, Clone)]
pub enum LinkEvent {
    Created(ShortenResult),
}

#[derive(Debug, Clone)]
pub struct LinkEvents {
    tx: broadcast::Sender<LinkEvent>,
}

impl LinkEvents {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn emit(&self, event: LinkEvent) {
        let LinkEvent::Created(result) = &event;
        debug!("link created: {}", result.short_code);
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LinkEvent> {
        self.tx.subscribe()
    }
}

impl Default for LinkEvents {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_result() -> ShortenResult {
        ShortenResult {
            original_url: "https://example.com".to_string(),
            short_code: "abc123".to_string(),
            short_url: "https://short.ly/abc123".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_subscriber_receives_created_event() {
        let events = LinkEvents::default();
        let mut rx = events.subscribe();

        events.emit(LinkEvent::Created(sample_result()));

        let LinkEvent::Created(result) = rx.try_recv().unwrap();
        assert_eq!(result.short_code, "abc123");
    }

    #[tokio::test]
    async fn test_emit_without_subscribers_is_silent() {
        let events = LinkEvents::default();
        // Must not panic or error.
        events.emit(LinkEvent::Created(sample_result()));
    }
}
