//! Geocoding: place name to coordinates.
//!
//! Calls the Mapbox Places search endpoint restricted to points of
//! interest and takes the first match's position. Mapbox returns
//! positions as `[longitude, latitude]`; the resolver swaps them.

mod client;
mod types;

pub use client::{Geocoder, GeocoderConfig};
