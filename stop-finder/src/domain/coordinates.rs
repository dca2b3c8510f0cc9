//! Geographic coordinate type.

use std::fmt;

/// Error returned when a coordinate value is not usable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A (latitude, longitude) pair in decimal degrees.
///
/// Both values are finite by construction. The `Display` forms of
/// [`latitude`](Self::latitude) and [`longitude`](Self::longitude) are the
/// shortest decimal rendering of the value, which is what ends up in the
/// stops request URL.
///
/// # Examples
///
/// ```
/// use stop_finder::domain::Coordinates;
///
/// let coords = Coordinates::new(42.3, -71.1).unwrap();
/// assert_eq!(coords.latitude().to_string(), "42.3");
/// assert_eq!(coords.longitude().to_string(), "-71.1");
///
/// assert!(Coordinates::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !latitude.is_finite() {
            return Err(InvalidCoordinates {
                reason: "latitude must be finite",
            });
        }
        if !longitude.is_finite() {
            return Err(InvalidCoordinates {
                reason: "longitude must be finite",
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create coordinates from a GeoJSON-ordered `[longitude, latitude]` position.
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Result<Self, InvalidCoordinates> {
        Self::new(latitude, longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
