//! GBFS (General Bikeshare Feed Specification) client.
//!
//! Reads the two station documents of a GBFS system:
//! - `station_information.json` - name and capacity per station
//! - `station_status.json` - live bike, ebike and dock counts
//!
//! Both are arrays over every station in the system; callers pick out the
//! one they want by `station_id`.

mod client;
mod error;
mod mock;
mod types;

pub use client::{FeedClient, GbfsClient, GbfsConfig};
pub use error::FeedError;
pub use mock::{MockFeedClient, MockResponse};
pub use types::{
    Document, FeedDocument, StationInformation, StationList, StationRecord, StationStatus,
};
