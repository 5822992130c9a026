//! Domain types for the station display.
//!
//! Identity types validate at construction time, so code that receives a
//! `StationId` or `ShortName` can trust it is non-blank.

mod station;

pub use station::{BlankField, ShortName, StationId};
