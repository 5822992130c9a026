//! Configuration.
//!
//! [`StationConfig`] is the explicit value the report builder runs on. It is
//! never read from the environment by the builder itself; [`AppConfig`]
//! does that for the binary.

use std::time::Duration;

use chrono_tz::Tz;

use crate::domain::{ShortName, StationId};

/// Default GBFS base URL (Bay Wheels, English).
pub const DEFAULT_FEED_BASE_URL: &str = "https://gbfs.lyft.com/gbfs/2.3/bay/en";

/// Default per-fetch timeout in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

/// Default zone for rendering `last_updated`.
pub const DEFAULT_DISPLAY_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

/// Default HTTP port for the server.
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No station ID was configured
    #[error("missing required configuration: STATION_ID must be set")]
    MissingStationId,

    /// No short name was configured
    #[error("missing required configuration: STATION_SHORT_NAME must be set")]
    MissingStationShortName,

    /// Timezone is not a known IANA name
    #[error("invalid DISPLAY_TIMEZONE: {0}")]
    InvalidTimezone(String),

    /// Timeout is not a positive integer
    #[error("invalid FEED_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),

    /// Port is not a valid u16
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// The validated identity of the station to report on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationTarget {
    pub id: StationId,
    pub short_name: ShortName,
}

/// Per-invocation configuration for building a report.
#[derive(Debug, Clone)]
pub struct StationConfig {
    /// Station to look up in both feed documents
    pub station_id: Option<String>,
    /// Label for the display's title bar
    pub station_short_name: Option<String>,
    /// GBFS base URL (documents live directly under it)
    pub feed_base_url: String,
    /// Upper bound on each feed fetch
    pub fetch_timeout: Duration,
    /// Zone in which `last_updated` is rendered
    pub display_timezone: Tz,
}

impl StationConfig {
    /// Create a config for the given station with default feed settings.
    pub fn new(station_id: impl Into<String>, station_short_name: impl Into<String>) -> Self {
        Self::from_parts(Some(station_id.into()), Some(station_short_name.into()))
    }

    /// Create a config from possibly-absent identity fields.
    ///
    /// Nothing is validated here; [`validate`](Self::validate) runs when a
    /// report is built.
    pub fn from_parts(station_id: Option<String>, station_short_name: Option<String>) -> Self {
        Self {
            station_id,
            station_short_name,
            feed_base_url: DEFAULT_FEED_BASE_URL.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            display_timezone: DEFAULT_DISPLAY_TIMEZONE,
        }
    }

    /// Set a custom feed base URL.
    pub fn with_feed_base_url(mut self, url: impl Into<String>) -> Self {
        self.feed_base_url = url.into();
        self
    }

    /// Set the per-fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Set the zone `last_updated` is rendered in.
    pub fn with_display_timezone(mut self, tz: Tz) -> Self {
        self.display_timezone = tz;
        self
    }

    /// Check that both identity fields are present and non-blank.
    pub fn validate(&self) -> Result<StationTarget, ConfigError> {
        let id = StationId::parse(self.station_id.as_deref().unwrap_or_default())
            .map_err(|_| ConfigError::MissingStationId)?;
        let short_name = ShortName::parse(self.station_short_name.as_deref().unwrap_or_default())
            .map_err(|_| ConfigError::MissingStationShortName)?;
        Ok(StationTarget { id, short_name })
    }
}

/// Process-level configuration for the binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub station: StationConfig,
    pub port: u16,
}

impl AppConfig {
    /// Load from the environment, reading `.env` first if present.
    ///
    /// Missing station identity is not an error here: the server still
    /// starts and reports the problem per request.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut station = StationConfig::from_parts(get("STATION_ID"), get("STATION_SHORT_NAME"));

        if let Some(url) = get("GBFS_BASE_URL") {
            station = station.with_feed_base_url(url);
        }

        if let Some(tz) = get("DISPLAY_TIMEZONE") {
            let tz: Tz = tz.parse().map_err(|_| ConfigError::InvalidTimezone(tz))?;
            station = station.with_display_timezone(tz);
        }

        if let Some(secs) = get("FEED_TIMEOUT_SECS") {
            let parsed = secs
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidTimeout(secs))?;
            station = station.with_fetch_timeout(Duration::from_secs(parsed));
        }

        let port = match get("PORT") {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { station, port })
    }

    /// Per-fetch timeout in whole seconds, rounded up.
    pub fn fetch_timeout_secs(&self) -> u64 {
        let timeout = self.station.fetch_timeout;
        timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0)
    }
}
