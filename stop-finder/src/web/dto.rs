//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::StopInfo;
use crate::error::ErrorKind;

/// Form posted from the home page.
#[derive(Debug, Deserialize)]
pub struct PlaceForm {
    /// Place name typed by the user
    pub place_name: Option<String>,
}

/// Query string of the nearest-stop page.
#[derive(Debug, Deserialize)]
pub struct NearestRequest {
    /// Place name to resolve
    pub place_name: Option<String>,
}

/// Successful lookup, for JSON clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct NearestResponse {
    /// The place name as supplied
    pub place_name: String,

    /// Nearest stop
    pub station_name: String,

    /// Whether the stop reports wheelchair boarding
    pub wheelchair_accessible: bool,
}

impl NearestResponse {
    pub fn new(place_name: impl Into<String>, stop: StopInfo) -> Self {
        Self {
            place_name: place_name.into(),
            station_name: stop.station_name,
            wheelchair_accessible: stop.wheelchair_accessible,
        }
    }
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,

    /// Machine-readable category
    pub kind: ErrorKind,
}
