//! Transit stop types.

use std::fmt;

/// Wheelchair boarding code as reported by the stops service.
///
/// The service uses GTFS `wheelchair_boarding` semantics:
/// `0` means no information, `1` accessible, `2` inaccessible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelchairBoarding {
    NoInformation,
    Accessible,
    Inaccessible,
    /// Any other code, or no usable code at all.
    Unrecognised(Option<i64>),
}

impl WheelchairBoarding {
    /// Interpret a raw code.
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(0) => WheelchairBoarding::NoInformation,
            Some(1) => WheelchairBoarding::Accessible,
            Some(2) => WheelchairBoarding::Inaccessible,
            other => WheelchairBoarding::Unrecognised(other),
        }
    }

    /// Only an explicit "accessible" code counts as accessible.
    pub fn is_accessible(&self) -> bool {
        matches!(self, WheelchairBoarding::Accessible)
    }
}

/// The nearest stop to a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopInfo {
    /// Display name of the stop, never empty.
    pub station_name: String,
    /// True only when the stop reports step-free boarding.
    pub wheelchair_accessible: bool,
}

impl StopInfo {
    /// Build stop info from a name and a boarding code.
    pub fn new(station_name: impl Into<String>, boarding: WheelchairBoarding) -> Self {
        Self {
            station_name: station_name.into(),
            wheelchair_accessible: boarding.is_accessible(),
        }
    }
}

impl fmt::Display for StopInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let access = if self.wheelchair_accessible {
            "wheelchair accessible"
        } else {
            "not known to be wheelchair accessible"
        };
        write!(f, "{} ({})", self.station_name, access)
    }
}
