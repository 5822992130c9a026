//! GBFS feed DTOs.
//!
//! These types map directly to the two GBFS documents we read. Only the
//! fields the report needs are declared; serde ignores the rest, so feeds
//! that carry vehicle types, rental URIs and the like still parse.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::FeedError;

/// How much of an undecodable record to keep for diagnostics.
const RECORD_EXCERPT_CHARS: usize = 500;

/// The feed documents this crate reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    /// `station_information.json`: static station metadata.
    StationInformation,
    /// `station_status.json`: live availability.
    StationStatus,
}

impl Document {
    /// Document name as used in GBFS discovery (`gbfs.json`).
    pub fn name(&self) -> &'static str {
        match self {
            Document::StationInformation => "station_information",
            Document::StationStatus => "station_status",
        }
    }

    /// URL of this document under a feed base URL.
    ///
    /// A trailing slash on the base is tolerated.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}.json", base_url.trim_end_matches('/'), self.name())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Top-level GBFS document: `{ last_updated, ttl, data: { stations } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedDocument<T> {
    /// When the publisher last regenerated the document (POSIX seconds).
    pub last_updated: Option<i64>,

    /// Seconds before the publisher expects the data to change.
    pub ttl: Option<u32>,

    pub data: StationList<T>,
}

/// The `data` object shared by both station documents.
#[derive(Debug, Clone, Deserialize)]
pub struct StationList<T> {
    pub stations: Vec<T>,
}

/// One entry of a station array, decoded only as far as its ID.
///
/// Feeds mix station kinds (virtual stations omit dock counts, some
/// operators publish numeric IDs), so records for other stations are never
/// decoded; only the one we look up has to match our types.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StationRecord(Value);

impl StationRecord {
    /// Wrap an arbitrary JSON value.
    pub fn new(value: Value) -> Self {
        StationRecord(value)
    }

    /// Build a record from a typed station.
    pub fn from_station<T: Serialize>(station: &T) -> Self {
        StationRecord(serde_json::to_value(station).unwrap_or(Value::Null))
    }

    /// The record's `station_id`, if it is a string.
    pub fn station_id(&self) -> Option<&str> {
        self.0.get("station_id").and_then(Value::as_str)
    }

    /// Decode the full record.
    pub fn decode<T: DeserializeOwned>(&self, document: Document) -> Result<T, FeedError> {
        T::deserialize(&self.0).map_err(|e| FeedError::Json {
            message: format!("{document} record: {e}"),
            body: Some(self.0.to_string().chars().take(RECORD_EXCERPT_CHARS).collect()),
        })
    }
}

/// One entry of `station_information.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationInformation {
    pub station_id: String,

    /// Public name of the station (e.g. "Market St at 10th St").
    pub name: String,

    /// Total number of docks. Optional in GBFS.
    pub capacity: Option<u32>,
}

/// One entry of `station_status.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationStatus {
    pub station_id: String,

    /// All bikes available for rental, ebikes included.
    pub num_bikes_available: i64,

    /// Omitted by systems without ebikes.
    #[serde(default)]
    pub num_ebikes_available: i64,

    pub num_docks_available: i64,

    #[serde(deserialize_with = "deserialize_flag")]
    pub is_renting: bool,

    #[serde(deserialize_with = "deserialize_flag")]
    pub is_returning: bool,

    /// Last time the station checked in (POSIX seconds).
    pub last_reported: i64,
}

/// Decode a GBFS boolean.
///
/// GBFS 1.x and 2.x publish `0`/`1`; some producers send JSON booleans.
/// Only `1` (or `true`) counts as set.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Int(i64),
        Bool(bool),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Int(n) => n == 1,
        Flag::Bool(b) => b,
    })
}
