//! GBFS feed error types.

use super::types::Document;

/// Errors from fetching or reading a GBFS feed document.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (connection refused, DNS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Body was not the expected JSON shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Fetch did not complete within the per-fetch bound
    #[error("{document} fetch timed out after {millis}ms")]
    Timeout { document: Document, millis: u128 },

    /// Feed resolved but has no record for the configured station
    #[error("station {station_id} not found in {document}")]
    StationNotFound {
        document: Document,
        station_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeedError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = FeedError::Json {
            message: "missing field `data`".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("missing field `data`"));

        let err = FeedError::Timeout {
            document: Document::StationStatus,
            millis: 5000,
        };
        assert_eq!(err.to_string(), "station_status fetch timed out after 5000ms");

        let err = FeedError::StationNotFound {
            document: Document::StationInformation,
            station_id: "SF-001".into(),
        };
        assert_eq!(
            err.to_string(),
            "station SF-001 not found in station_information"
        );
    }
}
