//! Nearest transit stop lookup.
//!
//! Queries the MBTA `/stops` endpoint filtered by position and sorted by
//! distance, then reads the first stop's name and wheelchair boarding code.

mod client;
mod types;

pub use client::{StopLocator, StopsConfig};
