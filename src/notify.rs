//! Transient user feedback
//!
//! Controllers push notifications into an injected sink; they never render
//! anything themselves. The production sink is an unbounded channel drained
//! by the UI loop, tests substitute a recording sink.

use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub kind: NotifyKind,
    pub message: Option<String>,
}

impl Notification {
    pub fn success<T: Into<String>>(title: T) -> Self {
        Self {
            title: title.into(),
            kind: NotifyKind::Success,
            message: None,
        }
    }

    pub fn error<T: Into<String>>(title: T) -> Self {
        Self {
            title: title.into(),
            kind: NotifyKind::Error,
            message: None,
        }
    }

    pub fn with_message<T: Into<String>>(mut self, message: T) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Destination for transient feedback, injected at controller construction.
pub trait NotifySink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Sink posting onto an unbounded channel; the receiving end belongs to the
/// UI loop.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NotifySink for ChannelSink {
    fn notify(&self, notification: Notification) {
        // The UI loop owning the receiver may already be gone during shutdown.
        let _ = self.tx.send(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_fills_message() {
        let n = Notification::error("Error shortening URL").with_message("Please try again later");
        assert_eq!(n.kind, NotifyKind::Error);
        assert_eq!(n.message.as_deref(), Some("Please try again later"));
    }

    #[test]
    fn test_channel_sink_delivers() {
        let (sink, mut rx) = ChannelSink::new();
        sink.notify(Notification::success("URL shortened successfully"));

        let got = rx.try_recv().unwrap();
        assert_eq!(got.title, "URL shortened successfully");
        assert_eq!(got.kind, NotifyKind::Success);
        assert!(got.message.is_none());
    }
}
