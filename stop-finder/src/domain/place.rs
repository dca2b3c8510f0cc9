//! Place name query type.

use std::fmt;

/// Error returned when a place name cannot be used as a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid place name: {reason}")]
pub struct InvalidPlace {
    reason: &'static str,
}

/// A free-text place name supplied by a user.
///
/// The only requirement is that it contains something other than
/// whitespace. The text is kept exactly as supplied; it is URL-encoded
/// when the geocoding request is built, never normalized.
///
/// # Examples
///
/// ```
/// use stop_finder::domain::PlaceQuery;
///
/// let place = PlaceQuery::parse("Fenway Park").unwrap();
/// assert_eq!(place.as_str(), "Fenway Park");
///
/// assert!(PlaceQuery::parse("").is_err());
/// assert!(PlaceQuery::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PlaceQuery(String);

impl PlaceQuery {
    /// Parse a place name, rejecting empty or whitespace-only input.
    pub fn parse(s: &str) -> Result<Self, InvalidPlace> {
        if s.trim().is_empty() {
            return Err(InvalidPlace {
                reason: "must not be empty",
            });
        }

        Ok(PlaceQuery(s.to_string()))
    }

    /// Returns the place name as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlaceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlaceQuery({:?})", self.0)
    }
}

impl fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
