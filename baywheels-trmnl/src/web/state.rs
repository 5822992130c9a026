//! Application state for the web layer.

use std::sync::Arc;

use crate::config::StationConfig;
use crate::gbfs::FeedClient;

/// Shared application state.
///
/// The station config is fixed at startup; every request builds a fresh
/// report from it.
#[derive(Clone)]
pub struct AppState {
    /// Feed client used for every report
    pub feed: Arc<dyn FeedClient>,

    /// Station to report on
    pub station: Arc<StationConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(feed: impl FeedClient + 'static, station: StationConfig) -> Self {
        Self {
            feed: Arc::new(feed),
            station: Arc::new(station),
        }
    }
}
