//! Wire types for the shortener backend
//!
//! Shapes mirror the backend JSON contract exactly; nothing here is mutated
//! after deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /shorten`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenRequest {
    pub original_url: String,
}

impl ShortenRequest {
    pub fn new<T: Into<String>>(original_url: T) -> Self {
        Self {
            original_url: original_url.into(),
        }
    }
}

/// A shortened link as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenResult {
    pub original_url: String,
    /// Opaque identifier assigned by the backend.
    pub short_code: String,
    /// Fully-qualified redirect link.
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

/// The recent-links collection, newest first. Ordering is owned by the
/// backend; the client never re-sorts.
pub type RecentList = Vec<ShortenResult>;

/// One row of a breakdown array: a dimension value plus its click count.
///
/// The four breakdowns carry distinct JSON field names for the dimension, so
/// each gets its own struct; this trait gives rendering code a uniform view.
pub trait BreakdownEntry {
    fn dimension(&self) -> &str;
    fn count(&self) -> u64;
}

macro_rules! breakdown_entry {
    ($type:ty, $field:ident) => {
        impl BreakdownEntry for $type {
            fn dimension(&self) -> &str {
                &self.$field
            }

            fn count(&self) -> u64 {
                self.count
            }
        }
    };
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateClicks {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrowserClicks {
    pub browser: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceClicks {
    pub device: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryClicks {
    pub country: String,
    pub count: u64,
}

breakdown_entry!(DateClicks, date);
breakdown_entry!(BrowserClicks, browser);
breakdown_entry!(DeviceClicks, device);
breakdown_entry!(CountryClicks, country);

/// Aggregate click analytics for one short link.
///
/// Breakdowns arrive sorted by descending count; the "top X" accessors take
/// index 0 as authoritative and do not re-verify the ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyticsAggregate {
    pub short_code: String,
    pub original_url: String,
    pub total_clicks: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub clicks_by_date: Vec<DateClicks>,
    #[serde(default)]
    pub clicks_by_browser: Vec<BrowserClicks>,
    #[serde(default)]
    pub clicks_by_device: Vec<DeviceClicks>,
    #[serde(default)]
    pub clicks_by_country: Vec<CountryClicks>,
}

impl AnalyticsAggregate {
    pub fn top_browser(&self) -> Option<&str> {
        self.clicks_by_browser.first().map(|b| b.browser.as_str())
    }

    pub fn top_device(&self) -> Option<&str> {
        self.clicks_by_device.first().map(|d| d.device.as_str())
    }

    pub fn top_country(&self) -> Option<&str> {
        self.clicks_by_country.first().map(|c| c.country.as_str())
    }
}
