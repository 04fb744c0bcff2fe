//! Submission flow controller
//!
//! Owns "enter URL -> validate -> submit -> show result". Validation is pure
//! and local; only a valid URL ever reaches the service client. One shorten
//! request may be in flight at a time: `submit` while busy is ignored, so
//! repeated user action cannot double-submit.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{ShortenRequest, ShortenResult, ShortenerApi};
use crate::errors::ServiceError;
use crate::events::{LinkEvent, LinkEvents};
use crate::notify::{Notification, NotifySink};
use crate::utils::url_validator::validate_submission_url;

type SubmitOutcome = Result<ShortenResult, ServiceError>;

pub struct SubmissionController {
    api: Arc<dyn ShortenerApi>,
    notify: Arc<dyn NotifySink>,
    events: LinkEvents,

    input: String,
    inline_error: Option<&'static str>,
    submitting: bool,
    last_result: Option<ShortenResult>,

    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
}

impl SubmissionController {
    pub fn new(api: Arc<dyn ShortenerApi>, notify: Arc<dyn NotifySink>, events: LinkEvents) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Self {
            api,
            notify,
            events,
            input: String::new(),
            inline_error: None,
            submitting: false,
            last_result: None,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Inline validation error, shown next to the input field.
    pub fn error(&self) -> Option<&'static str> {
        self.inline_error
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn last_result(&self) -> Option<&ShortenResult> {
        self.last_result.as_ref()
    }

    /// Any input edit returns the flow to a clean idle state.
    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.inline_error = None;
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.inline_error = None;
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.inline_error = None;
    }

    /// Validate the current input and, when valid, start the shorten call.
    /// Ignored while a submission is already in flight.
    pub fn submit(&mut self) {
        if self.submitting {
            debug!("shorten already in flight, submit ignored");
            return;
        }

        if let Err(e) = validate_submission_url(&self.input) {
            self.inline_error = Some(e.message());
            return;
        }

        self.inline_error = None;
        self.submitting = true;

        let api = self.api.clone();
        let req = ShortenRequest::new(self.input.trim());
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = api.shorten(req).await;
            // Receiver dropped means the controller is gone; nothing to do.
            let _ = tx.send(outcome);
        });
    }

    /// Apply any completed submission. Returns true when state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.submitting = false;
            changed = true;

            match outcome {
                Ok(result) => {
                    debug!("shorten succeeded: {}", result.short_code);
                    self.input.clear();
                    self.inline_error = None;
                    self.events.emit(LinkEvent::Created(result.clone()));
                    self.notify.notify(
                        Notification::success("URL shortened successfully")
                            .with_message(result.short_url.clone()),
                    );
                    self.last_result = Some(result);
                }
                Err(e) => {
                    // Input is left untouched so the user can retry.
                    warn!("shorten failed: {}", e);
                    self.notify.notify(
                        Notification::error("Error shortening URL")
                            .with_message("Please try again later"),
                    );
                }
            }
        }

        changed
    }
}
