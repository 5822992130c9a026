//! One-shot command line mode.
//!
//! `baywheels-trmnl --once` builds a single report, prints the envelope as
//! pretty JSON on stdout and exits. Feed problems still print a degraded
//! envelope; only missing configuration is an error.

use thiserror::Error;

use crate::config::{ConfigError, StationConfig};
use crate::gbfs::FeedClient;
use crate::report::{Envelope, build_report};

/// Flag that selects one-shot mode.
pub const ONCE_FLAG: &str = "--once";

/// Errors from a one-shot run.
#[derive(Debug, Error)]
pub enum OnceError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode envelope: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whether the command line asks for one-shot mode.
///
/// `args` excludes the program name.
pub fn wants_once<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter().any(|arg| arg.as_ref() == ONCE_FLAG)
}

/// Build one report and render its envelope as pretty JSON.
pub async fn run_once<C>(feed: &C, config: &StationConfig) -> Result<String, OnceError>
where
    C: FeedClient + ?Sized,
{
    let report = build_report(feed, config).await?;
    Ok(serde_json::to_string_pretty(&Envelope::new(report))?)
}
