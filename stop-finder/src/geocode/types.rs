//! Geocoding response DTOs.
//!
//! Only the fields we read are modelled. Everything is optional, down to
//! individual list elements, so a missing or `null` value is reported as
//! "no match" rather than a parse failure.

use serde::Deserialize;

/// Top-level places search response (a GeoJSON feature collection).
#[derive(Debug, Deserialize)]
pub struct PlacesResponse {
    pub features: Option<Vec<Option<Feature>>>,
}

/// One candidate place.
#[derive(Debug, Deserialize)]
pub struct Feature {
    pub geometry: Option<Geometry>,
}

/// Point geometry, `[longitude, latitude]`.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub coordinates: Option<Vec<Option<f64>>>,
}
