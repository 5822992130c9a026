//! Station identity types.

use std::fmt;

/// Error returned when a station field is blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: must not be empty")]
pub struct BlankField {
    field: &'static str,
}

impl BlankField {
    /// Name of the field that was blank.
    pub fn field(&self) -> &'static str {
        self.field
    }
}

/// A GBFS `station_id`.
///
/// GBFS only promises that IDs are stable strings; formats vary by operator
/// (Lyft systems use UUID-like strings, others use small integers). The only
/// thing we can check is that one was given. Matching against feed records
/// is exact, so the value is kept as supplied.
///
/// # Examples
///
/// ```
/// use baywheels_trmnl::domain::StationId;
///
/// let id = StationId::parse("SF-001").unwrap();
/// assert_eq!(id.as_str(), "SF-001");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station ID, rejecting empty or whitespace-only input.
    pub fn parse(s: &str) -> Result<Self, BlankField> {
        if s.trim().is_empty() {
            return Err(BlankField {
                field: "station_id",
            });
        }
        Ok(StationId(s.to_string()))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a feed record's `station_id` refers to this station.
    pub fn matches(&self, feed_id: &str) -> bool {
        self.0 == feed_id
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The short label shown in the display's title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortName(String);

impl ShortName {
    /// Parse a short name, rejecting empty or whitespace-only input.
    pub fn parse(s: &str) -> Result<Self, BlankField> {
        if s.trim().is_empty() {
            return Err(BlankField {
                field: "station_short_name",
            });
        }
        Ok(ShortName(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
