//! In-memory feed client for testing without network access.
//!
//! Serves fixed station arrays, can be told to fail or hang per document,
//! and counts calls so tests can assert that nothing was fetched.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::{self, BoxFuture};

use super::client::FeedClient;
use super::error::FeedError;
use super::types::{StationInformation, StationRecord, StationStatus};

/// Canned behaviour for one document.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Resolve with these station records.
    Stations(Vec<StationRecord>),
    /// Resolve with a non-success status.
    Status(u16),
    /// Resolve with a JSON parse error.
    Malformed,
    /// Never resolve.
    Hang,
}

impl MockResponse {
    /// Resolve with these typed stations.
    pub fn stations<T: serde::Serialize>(stations: &[T]) -> Self {
        MockResponse::Stations(stations.iter().map(StationRecord::from_station).collect())
    }

    fn respond(&self) -> BoxFuture<'static, Result<Vec<StationRecord>, FeedError>> {
        match self {
            MockResponse::Stations(stations) => Box::pin(future::ready(Ok(stations.clone()))),
            MockResponse::Status(status) => Box::pin(future::ready(Err(FeedError::Api {
                status: *status,
                message: "mock failure".to_string(),
            }))),
            MockResponse::Malformed => Box::pin(future::ready(Err(FeedError::Json {
                message: "mock malformed body".to_string(),
                body: None,
            }))),
            MockResponse::Hang => Box::pin(future::pending()),
        }
    }
}

/// Mock feed client serving canned responses.
#[derive(Clone)]
pub struct MockFeedClient {
    information: MockResponse,
    status: MockResponse,
    information_calls: Arc<AtomicUsize>,
    status_calls: Arc<AtomicUsize>,
}

impl MockFeedClient {
    /// Create a client that serves the given stations from both documents.
    pub fn new(information: Vec<StationInformation>, status: Vec<StationStatus>) -> Self {
        Self {
            information: MockResponse::stations(&information),
            status: MockResponse::stations(&status),
            information_calls: Arc::new(AtomicUsize::new(0)),
            status_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Override the `station_information` response.
    pub fn with_information(mut self, response: MockResponse) -> Self {
        self.information = response;
        self
    }

    /// Override the `station_status` response.
    pub fn with_status(mut self, response: MockResponse) -> Self {
        self.status = response;
        self
    }

    /// Number of `station_information` fetches so far.
    pub fn information_calls(&self) -> usize {
        self.information_calls.load(Ordering::SeqCst)
    }

    /// Number of `station_status` fetches so far.
    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    /// Total fetches across both documents.
    pub fn total_calls(&self) -> usize {
        self.information_calls() + self.status_calls()
    }
}

impl FeedClient for MockFeedClient {
    fn station_information<'a>(
        &'a self,
        _base_url: &'a str,
    ) -> BoxFuture<'a, Result<Vec<StationRecord>, FeedError>> {
        self.information_calls.fetch_add(1, Ordering::SeqCst);
        self.information.respond()
    }

    fn station_status<'a>(
        &'a self,
        _base_url: &'a str,
    ) -> BoxFuture<'a, Result<Vec<StationRecord>, FeedError>> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.status.respond()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::gbfs::Document;

    fn information() -> StationInformation {
        StationInformation {
            station_id: "SF-001".to_string(),
            name: "Market St".to_string(),
            capacity: Some(20),
        }
    }

    #[tokio::test]
    async fn serves_canned_stations_and_counts_calls() {
        let client = MockFeedClient::new(vec![information()], vec![]);

        let stations = client.station_information("unused").await.unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(
            stations[0]
                .decode::<StationInformation>(Document::StationInformation)
                .unwrap(),
            information()
        );

        let status = client.station_status("unused").await.unwrap();
        assert!(status.is_empty());

        assert_eq!(client.information_calls(), 1);
        assert_eq!(client.status_calls(), 1);
        assert_eq!(client.total_calls(), 2);
    }

    #[tokio::test]
    async fn injected_failures() {
        let client = MockFeedClient::new(vec![], vec![])
            .with_information(MockResponse::Status(500))
            .with_status(MockResponse::Malformed);

        assert!(matches!(
            client.station_information("unused").await,
            Err(FeedError::Api { status: 500, .. })
        ));
        assert!(matches!(
            client.station_status("unused").await,
            Err(FeedError::Json { .. })
        ));
    }

    #[tokio::test]
    async fn clones_share_counters() {
        let client = MockFeedClient::new(vec![], vec![]);
        let clone = client.clone();

        clone.station_status("unused").await.unwrap();
        assert_eq!(client.status_calls(), 1);
    }
}
