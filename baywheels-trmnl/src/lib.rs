//! Bay Wheels station display for TRMNL.
//!
//! Reads one station's live availability from a GBFS feed and renders it
//! as the flat field mapping a TRMNL e-ink display template consumes.

pub mod cli;
pub mod config;
pub mod domain;
pub mod gbfs;
pub mod report;
pub mod web;
