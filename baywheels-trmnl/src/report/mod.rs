//! Station report: the flat, display-ready field mapping.
//!
//! A report is either built from a station's feed records or, when the feed
//! could not be read, the fixed degraded shape. Both serialize to the
//! `merge_variables` object the TRMNL display template reads.

mod builder;
mod format;
mod markup;

use std::fmt;

use chrono_tz::Tz;
use serde::{Serialize, Serializer};

use crate::gbfs::{StationInformation, StationStatus};

pub use builder::build_report;
pub use format::clock_time;
pub use markup::{Envelope, MARKUP};

/// Placeholder shown for counts when the feed is unavailable.
pub const UNAVAILABLE_COUNT: &str = "--";

/// Station name shown when the feed is unavailable.
pub const ERROR_STATION_NAME: &str = "Error";

/// Short name used when none was configured.
pub const UNKNOWN_SHORT_NAME: &str = "Unknown";

/// `last_updated` shown when the feed is unavailable.
pub const UNAVAILABLE_TIME: &str = "Unavailable";

/// A bike or dock count as shown on the display.
///
/// Serializes as a JSON number, or as `"--"` when unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Available(i64),
    Unavailable,
}

impl Serialize for Count {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Count::Available(n) => serializer.serialize_i64(*n),
            Count::Unavailable => serializer.serialize_str(UNAVAILABLE_COUNT),
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Available(n) => write!(f, "{n}"),
            Count::Unavailable => f.write_str(UNAVAILABLE_COUNT),
        }
    }
}

/// A station flag rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum YesNo {
    Yes,
    No,
}

impl From<bool> for YesNo {
    fn from(b: bool) -> Self {
        if b { YesNo::Yes } else { YesNo::No }
    }
}

/// Display fields for one station.
///
/// Field order matches the JSON the display template was written against.
/// The optional fields are only present on a report built from feed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub station_name: String,
    pub station_short_name: String,
    pub bikes_available: Count,

    /// Classic (non-electric) bikes. Not clamped: if the feed reports more
    /// ebikes than bikes this goes negative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_bikes: Option<i64>,

    pub ebikes_available: Count,
    pub docks_available: Count,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_renting: Option<YesNo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_returning: Option<YesNo>,

    pub last_updated: String,
}

impl Report {
    /// Join a station's two feed records into a report.
    ///
    /// The records are assumed to belong to the same station; the caller
    /// matches them by ID.
    pub fn from_records(
        information: &StationInformation,
        status: &StationStatus,
        short_name: &str,
        tz: Tz,
    ) -> Self {
        let last_updated = clock_time(status.last_reported, tz)
            .unwrap_or_else(|| UNAVAILABLE_TIME.to_string());

        Self {
            station_name: information.name.clone(),
            station_short_name: short_name.to_string(),
            bikes_available: Count::Available(status.num_bikes_available),
            regular_bikes: Some(status.num_bikes_available - status.num_ebikes_available),
            ebikes_available: Count::Available(status.num_ebikes_available),
            docks_available: Count::Available(status.num_docks_available),
            capacity: information.capacity,
            is_renting: Some(status.is_renting.into()),
            is_returning: Some(status.is_returning.into()),
            last_updated,
        }
    }

    /// The fixed error-state report.
    pub fn degraded(short_name: Option<&str>) -> Self {
        Self {
            station_name: ERROR_STATION_NAME.to_string(),
            station_short_name: short_name.unwrap_or(UNKNOWN_SHORT_NAME).to_string(),
            bikes_available: Count::Unavailable,
            regular_bikes: None,
            ebikes_available: Count::Unavailable,
            docks_available: Count::Unavailable,
            capacity: None,
            is_renting: None,
            is_returning: None,
            last_updated: UNAVAILABLE_TIME.to_string(),
        }
    }

    /// Whether this is the error-state report.
    pub fn is_degraded(&self) -> bool {
        self.bikes_available == Count::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use serde_json::json;

    fn information() -> StationInformation {
        StationInformation {
            station_id: "SF-001".to_string(),
            name: "Market St".to_string(),
            capacity: Some(20),
        }
    }

    fn status(bikes: i64, ebikes: i64) -> StationStatus {
        StationStatus {
            station_id: "SF-001".to_string(),
            num_bikes_available: bikes,
            num_ebikes_available: ebikes,
            num_docks_available: 15,
            is_renting: true,
            is_returning: false,
            last_reported: 1_700_000_000,
        }
    }

    #[test]
    fn report_from_records_serializes_in_display_shape() {
        let report = Report::from_records(&information(), &status(5, 2), "Market", chrono_tz::UTC);

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "station_name": "Market St",
                "station_short_name": "Market",
                "bikes_available": 5,
                "regular_bikes": 3,
                "ebikes_available": 2,
                "docks_available": 15,
                "capacity": 20,
                "is_renting": "Yes",
                "is_returning": "No",
                "last_updated": "10:13 PM"
            })
        );
        assert!(!report.is_degraded());
    }

    #[test]
    fn field_order_is_stable() {
        let report = Report::from_records(&information(), &status(5, 2), "Market", chrono_tz::UTC);
        let json = serde_json::to_string(&report).unwrap();

        let keys = [
            "station_name",
            "station_short_name",
            "bikes_available",
            "regular_bikes",
            "ebikes_available",
            "docks_available",
            "capacity",
            "is_renting",
            "is_returning",
            "last_updated",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn missing_capacity_is_omitted() {
        let mut info = information();
        info.capacity = None;
        let report = Report::from_records(&info, &status(1, 0), "Market", chrono_tz::UTC);

        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("capacity").is_none());
    }

    #[test]
    fn unrepresentable_timestamp_renders_unavailable() {
        let mut st = status(1, 0);
        st.last_reported = i64::MAX;
        let report = Report::from_records(&information(), &st, "Market", chrono_tz::UTC);
        assert_eq!(report.last_updated, UNAVAILABLE_TIME);
    }

    #[test]
    fn degraded_report_shape() {
        let report = Report::degraded(Some("Market"));

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "station_name": "Error",
                "station_short_name": "Market",
                "bikes_available": "--",
                "ebikes_available": "--",
                "docks_available": "--",
                "last_updated": "Unavailable"
            })
        );
        assert!(report.is_degraded());
    }

    #[test]
    fn degraded_report_without_short_name() {
        let report = Report::degraded(None);
        assert_eq!(report.station_short_name, "Unknown");
    }

    #[test]
    fn count_display() {
        assert_eq!(Count::Available(7).to_string(), "7");
        assert_eq!(Count::Unavailable.to_string(), "--");
    }

    // Upstream data can report more ebikes than bikes. The difference is
    // passed through rather than clamped.
    #[test]
    fn regular_bikes_can_go_negative() {
        let report = Report::from_records(&information(), &status(1, 3), "Market", chrono_tz::UTC);
        assert_eq!(report.regular_bikes, Some(-2));
    }

    proptest! {
        #[test]
        fn regular_bikes_is_bikes_minus_ebikes(bikes in 0i64..10_000, ebikes in 0i64..10_000) {
            let report =
                Report::from_records(&information(), &status(bikes, ebikes), "Market", chrono_tz::UTC);
            prop_assert_eq!(report.regular_bikes, Some(bikes - ebikes));
        }

        #[test]
        fn flags_render_as_yes_or_no(renting: bool, returning: bool) {
            let mut st = status(1, 0);
            st.is_renting = renting;
            st.is_returning = returning;
            let report = Report::from_records(&information(), &st, "Market", chrono_tz::UTC);
            let value = serde_json::to_value(&report).unwrap();

            let expected = |b: bool| if b { "Yes" } else { "No" };
            prop_assert_eq!(value["is_renting"].as_str(), Some(expected(renting)));
            prop_assert_eq!(value["is_returning"].as_str(), Some(expected(returning)));
        }
    }
}
