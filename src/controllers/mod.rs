//! Controllers
//!
//! Each controller owns one asynchronous flow: its observable state, the
//! operations that trigger transitions, and a channel its spawned fetches
//! report back on. State is mutated exclusively inside the controller's own
//! `poll`, which the UI loop calls between frames; spawned tasks never touch
//! state directly. Superseded responses are discarded on arrival, not
//! cancelled.

pub mod analytics;
pub mod recent;
pub mod submission;

pub use analytics::{AnalyticsController, AnalyticsState};
pub use recent::{RecentListController, RecentState};
pub use submission::SubmissionController;
