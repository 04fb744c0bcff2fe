//! Service client for the shortener backend
//!
//! Three remote operations behind one trait so controllers can be driven by
//! a mock in tests. All operations are side-effect-free with respect to
//! client state: they perform the call and return the outcome, nothing else.

mod http;
pub mod types;

pub use http::HttpShortenerApi;
pub use types::{
    AnalyticsAggregate, BreakdownEntry, BrowserClicks, CountryClicks, DateClicks, DeviceClicks,
    RecentList, ShortenRequest, ShortenResult,
};

use crate::errors::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ShortenerApi: Send + Sync {
    /// Submit a URL for shortening. Single attempt, no retry.
    async fn shorten(&self, req: ShortenRequest) -> Result<ShortenResult>;

    /// Fetch aggregate analytics for one short code.
    async fn get_analytics(&self, code: &str) -> Result<AnalyticsAggregate>;

    /// Fetch the recent-links collection. An empty list is a success.
    async fn list_recent(&self) -> Result<RecentList>;
}
