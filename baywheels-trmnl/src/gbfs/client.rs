//! GBFS HTTP client.
//!
//! Plain unauthenticated GETs against a feed base URL. The base URL is
//! passed per call so one client can serve any configured system.

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use super::error::FeedError;
use super::types::{Document, FeedDocument, StationRecord};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// How much of an unparseable body to keep for diagnostics.
const BODY_EXCERPT_CHARS: usize = 500;

/// Source of the two station documents.
///
/// Records come back decoded only as far as their `station_id`; callers
/// decode the one they want with [`StationRecord::decode`].
///
/// Implemented by [`GbfsClient`] for the live feed and by
/// [`MockFeedClient`](super::MockFeedClient) in tests. Returns boxed futures
/// so the trait stays object safe for use behind `Arc<dyn FeedClient>`.
pub trait FeedClient: Send + Sync {
    /// All stations from `station_information.json`.
    fn station_information<'a>(
        &'a self,
        base_url: &'a str,
    ) -> BoxFuture<'a, Result<Vec<StationRecord>, FeedError>>;

    /// All stations from `station_status.json`.
    fn station_status<'a>(
        &'a self,
        base_url: &'a str,
    ) -> BoxFuture<'a, Result<Vec<StationRecord>, FeedError>>;
}

/// Configuration for the GBFS client.
#[derive(Debug, Clone)]
pub struct GbfsConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl GbfsConfig {
    /// Create a config with default timeout and user agent.
    pub fn new() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for GbfsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// GBFS feed client backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct GbfsClient {
    http: reqwest::Client,
}

impl GbfsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GbfsConfig) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();

        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| FeedError::Api {
                status: 0,
                message: "Invalid user agent".to_string(),
            })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http })
    }

    /// Fetch one document and return its station array.
    async fn fetch_stations(
        &self,
        base_url: &str,
        document: Document,
    ) -> Result<Vec<StationRecord>, FeedError> {
        let url = document.url(base_url);
        debug!(%url, "fetching feed document");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: FeedDocument<StationRecord> =
            serde_json::from_str(&body).map_err(|e| FeedError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
            })?;

        debug!(
            %document,
            stations = parsed.data.stations.len(),
            "feed document parsed"
        );

        Ok(parsed.data.stations)
    }
}

impl FeedClient for GbfsClient {
    fn station_information<'a>(
        &'a self,
        base_url: &'a str,
    ) -> BoxFuture<'a, Result<Vec<StationRecord>, FeedError>> {
        Box::pin(self.fetch_stations(base_url, Document::StationInformation))
    }

    fn station_status<'a>(
        &'a self,
        base_url: &'a str,
    ) -> BoxFuture<'a, Result<Vec<StationRecord>, FeedError>> {
        Box::pin(self.fetch_stations(base_url, Document::StationStatus))
    }
}
