//! Nearest transit stop finder.
//!
//! Resolves a free-text place name to the closest transit stop and
//! reports whether that stop is wheelchair accessible: geocode the place,
//! then ask the stops service for the nearest stop to those coordinates.

pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod finder;
pub mod geocode;
pub mod stops;
pub mod web;

pub use config::{ConfigError, FinderConfig};
pub use error::{ErrorKind, LookupError};
pub use finder::StopFinder;
