//! Building a report from the live feed.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{ConfigError, StationConfig, StationTarget};
use crate::gbfs::{
    Document, FeedClient, FeedError, StationInformation, StationRecord, StationStatus,
};

use super::Report;

/// Build the report for the configured station.
///
/// Fails only on configuration errors, before anything is fetched. Any
/// feed problem (network, status, body, timeout, unknown station) is logged
/// and turned into [`Report::degraded`].
pub async fn build_report<C>(client: &C, config: &StationConfig) -> Result<Report, ConfigError>
where
    C: FeedClient + ?Sized,
{
    let target = config.validate()?;

    match fetch_records(client, config, &target).await {
        Ok((information, status)) => Ok(Report::from_records(
            &information,
            &status,
            target.short_name.as_str(),
            config.display_timezone,
        )),
        Err(e) => {
            warn!(
                station_id = %target.id,
                feed = %config.feed_base_url,
                error = %e,
                "feed unavailable, returning degraded report"
            );
            Ok(Report::degraded(Some(target.short_name.as_str())))
        }
    }
}

/// Fetch both documents concurrently and pick out the target station.
///
/// The join is fail-fast: the first error drops the other fetch.
async fn fetch_records<C>(
    client: &C,
    config: &StationConfig,
    target: &StationTarget,
) -> Result<(StationInformation, StationStatus), FeedError>
where
    C: FeedClient + ?Sized,
{
    let base_url = config.feed_base_url.as_str();
    let timeout = config.fetch_timeout;

    let (information, status) = tokio::try_join!(
        bounded(
            Document::StationInformation,
            timeout,
            client.station_information(base_url),
        ),
        bounded(
            Document::StationStatus,
            timeout,
            client.station_status(base_url),
        )
    )?;

    debug!(
        information = information.len(),
        status = status.len(),
        "feed documents fetched"
    );

    let information = find_station(&information, Document::StationInformation, target)?;
    let status = find_station(&status, Document::StationStatus, target)?;

    Ok((information, status))
}

/// Decode the record for `target`, leaving every other record untouched.
fn find_station<T: DeserializeOwned>(
    records: &[StationRecord],
    document: Document,
    target: &StationTarget,
) -> Result<T, FeedError> {
    records
        .iter()
        .find(|r| r.station_id().is_some_and(|id| target.id.matches(id)))
        .ok_or_else(|| FeedError::StationNotFound {
            document,
            station_id: target.id.to_string(),
        })?
        .decode(document)
}

/// Apply the per-fetch timeout to one document fetch.
async fn bounded<T, F>(document: Document, timeout: Duration, fetch: F) -> Result<T, FeedError>
where
    F: Future<Output = Result<T, FeedError>>,
{
    tokio::time::timeout(timeout, fetch)
        .await
        .map_err(|_| FeedError::Timeout {
            document,
            millis: timeout.as_millis(),
        })?
}
