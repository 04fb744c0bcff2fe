//! HTTP implementation of the service client
//!
//! ureq is synchronous, so every call runs on the blocking pool via
//! `spawn_blocking`; the agent is cheap to clone and carries the global
//! timeout from configuration. Non-2xx responses surface as
//! `ureq::Error::StatusCode` and are mapped into the error taxonomy
//! per operation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, warn};
use ureq::Agent;

use super::ShortenerApi;
use super::types::{AnalyticsAggregate, RecentList, ShortenRequest, ShortenResult};
use crate::config::Config;
use crate::errors::{Result, ServiceError};

pub struct HttpShortenerApi {
    agent: Agent,
    base_url: String,
}

impl HttpShortenerApi {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_base(),
            Duration::from_secs(config.api.timeout_secs),
        )
    }

    fn shorten_sync(agent: Agent, url: String, req: ShortenRequest) -> Result<ShortenResult> {
        let started = Instant::now();

        let resp = agent.post(&url).send_json(&req).map_err(|e| match e {
            ureq::Error::StatusCode(code) if (400..500).contains(&code) => {
                ServiceError::validation(format!("backend rejected the URL (HTTP {})", code))
            }
            ureq::Error::StatusCode(code) => {
                ServiceError::server(format!("backend failed (HTTP {})", code))
            }
            other => ServiceError::network(other.to_string()),
        })?;

        let result: ShortenResult = resp.into_body().read_json().map_err(decode_error)?;
        debug!(
            "POST {} -> {} in {:?}",
            url,
            result.short_code,
            started.elapsed()
        );
        Ok(result)
    }

    fn get_analytics_sync(agent: Agent, url: String) -> Result<AnalyticsAggregate> {
        let started = Instant::now();

        let resp = agent.get(&url).call().map_err(|e| match e {
            ureq::Error::StatusCode(404) => ServiceError::not_found("URL not found"),
            ureq::Error::StatusCode(code) => {
                ServiceError::server(format!("backend failed (HTTP {})", code))
            }
            other => ServiceError::network(other.to_string()),
        })?;

        let aggregate: AnalyticsAggregate = resp.into_body().read_json().map_err(decode_error)?;
        debug!("GET {} in {:?}", url, started.elapsed());
        Ok(aggregate)
    }

    fn list_recent_sync(agent: Agent, url: String) -> Result<RecentList> {
        let started = Instant::now();

        let resp = agent.get(&url).call().map_err(|e| match e {
            ureq::Error::StatusCode(code) => {
                ServiceError::server(format!("backend failed (HTTP {})", code))
            }
            other => ServiceError::network(other.to_string()),
        })?;

        let list: RecentList = resp.into_body().read_json().map_err(decode_error)?;
        debug!("GET {} -> {} links in {:?}", url, list.len(), started.elapsed());
        Ok(list)
    }
}

#[async_trait]
impl ShortenerApi for HttpShortenerApi {
    async fn shorten(&self, req: ShortenRequest) -> Result<ShortenResult> {
        let agent = self.agent.clone();
        let url = format!("{}/shorten", self.base_url);

        tokio::task::spawn_blocking(move || Self::shorten_sync(agent, url, req))
            .await
            .unwrap_or_else(join_error)
    }

    async fn get_analytics(&self, code: &str) -> Result<AnalyticsAggregate> {
        let agent = self.agent.clone();
        let url = format!("{}/analytics/{}", self.base_url, urlencoding::encode(code));

        tokio::task::spawn_blocking(move || Self::get_analytics_sync(agent, url))
            .await
            .unwrap_or_else(join_error)
    }

    async fn list_recent(&self) -> Result<RecentList> {
        let agent = self.agent.clone();
        let url = format!("{}/recent", self.base_url);

        tokio::task::spawn_blocking(move || Self::list_recent_sync(agent, url))
            .await
            .unwrap_or_else(join_error)
    }
}

/// A 2xx response whose body does not match the contract is a backend fault.
fn decode_error(e: ureq::Error) -> ServiceError {
    ServiceError::server(format!("invalid response body: {}", e))
}

fn join_error<T>(e: tokio::task::JoinError) -> Result<T> {
    warn!("HTTP task failed to complete: {}", e);
    Err(ServiceError::network(format!("request task failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let api = HttpShortenerApi::new("http://localhost:8000/api/", Duration::from_secs(1));
        assert_eq!(api.base_url, "http://localhost:8000/api");
    }

    /// Requires a running backend on localhost:8000.
    #[tokio::test]
    #[ignore]
    async fn test_list_recent_against_live_backend() {
        let api = HttpShortenerApi::new("http://localhost:8000/api", Duration::from_secs(5));

        let list = api.list_recent().await.unwrap();
        // Limit is enforced server-side.
        assert!(list.len() <= 10, "got: {}", list.len());
    }
}
