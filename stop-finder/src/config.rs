//! Process configuration.
//!
//! Credentials are required; everything else has a default. Values are
//! read through a lookup function so tests never touch the real
//! environment.

use std::net::SocketAddr;

use crate::fetch::FetcherConfig;
use crate::geocode::GeocoderConfig;
use crate::stops::StopsConfig;

/// Environment variable holding the geocoding access token.
pub const MAPBOX_TOKEN_VAR: &str = "MAPBOX_TOKEN";
/// Environment variable holding the transit API key.
pub const MBTA_API_KEY_VAR: &str = "MBTA_API_KEY";

pub(crate) const MAPBOX_BASE_URL_VAR: &str = "MAPBOX_BASE_URL";
pub(crate) const MBTA_BASE_URL_VAR: &str = "MBTA_BASE_URL";
const HTTP_TIMEOUT_VAR: &str = "HTTP_TIMEOUT_SECS";
const LISTEN_ADDR_VAR: &str = "STOP_FINDER_ADDR";

/// Default address for the web server.
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Configuration errors, detected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required value is absent or empty
    #[error("missing configuration: {0} must be set")]
    Missing(&'static str),

    /// A value is present but unusable
    #[error("invalid configuration for {var}: {message}")]
    Invalid { var: &'static str, message: String },

    /// The HTTP client could not be built from the transport settings
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Everything needed to run the stop finder.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// HTTP transport settings
    pub fetcher: FetcherConfig,
    /// Geocoding service settings
    pub geocoder: GeocoderConfig,
    /// Stops service settings
    pub stops: StopsConfig,
    /// Address the web server binds to
    pub listen_addr: SocketAddr,
}

impl FinderConfig {
    /// Create a config with the given credentials and defaults elsewhere.
    pub fn new(access_token: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            fetcher: FetcherConfig::default(),
            geocoder: GeocoderConfig::new(access_token),
            stops: StopsConfig::new(api_key),
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let access_token = get(MAPBOX_TOKEN_VAR).ok_or(ConfigError::Missing(MAPBOX_TOKEN_VAR))?;
        let api_key = get(MBTA_API_KEY_VAR).ok_or(ConfigError::Missing(MBTA_API_KEY_VAR))?;

        let mut config = Self::new(access_token, api_key);

        if let Some(url) = get(MAPBOX_BASE_URL_VAR) {
            config.geocoder = config.geocoder.with_base_url(url);
        }
        if let Some(url) = get(MBTA_BASE_URL_VAR) {
            config.stops = config.stops.with_base_url(url);
        }
        if let Some(secs) = get(HTTP_TIMEOUT_VAR) {
            let secs = secs.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: HTTP_TIMEOUT_VAR,
                message: e.to_string(),
            })?;
            config.fetcher = config.fetcher.with_timeout(secs);
        }

        let addr = get(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        config.listen_addr = addr.trim().parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::Invalid {
                var: LISTEN_ADDR_VAR,
                message: e.to_string(),
            }
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_credentials_and_defaults() {
        let config = FinderConfig::from_lookup(lookup_from(&[
            ("MAPBOX_TOKEN", "pk.test"),
            ("MBTA_API_KEY", "mbta-test"),
        ]))
        .unwrap();

        assert_eq!(config.geocoder.access_token, "pk.test");
        assert_eq!(config.stops.api_key, "mbta-test");
        assert_eq!(config.fetcher.timeout_secs, 30);
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn missing_token_is_error() {
        let err =
            FinderConfig::from_lookup(lookup_from(&[("MBTA_API_KEY", "mbta-test")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("MAPBOX_TOKEN"));
    }

    #[test]
    fn empty_api_key_is_error() {
        let err = FinderConfig::from_lookup(lookup_from(&[
            ("MAPBOX_TOKEN", "pk.test"),
            ("MBTA_API_KEY", "  "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("MBTA_API_KEY"));
    }

    #[test]
    fn optional_overrides() {
        let config = FinderConfig::from_lookup(lookup_from(&[
            ("MAPBOX_TOKEN", "pk.test"),
            ("MBTA_API_KEY", "mbta-test"),
            ("MAPBOX_BASE_URL", "http://localhost:9001"),
            ("MBTA_BASE_URL", "http://localhost:9002"),
            ("HTTP_TIMEOUT_SECS", "5"),
            ("STOP_FINDER_ADDR", "0.0.0.0:8080"),
        ]))
        .unwrap();

        assert_eq!(config.geocoder.base_url, "http://localhost:9001");
        assert_eq!(config.stops.base_url, "http://localhost:9002");
        assert_eq!(config.fetcher.timeout_secs, 5);
        assert_eq!(config.listen_addr.port(), 8080);
    }

    #[test]
    fn bad_timeout_is_invalid() {
        let err = FinderConfig::from_lookup(lookup_from(&[
            ("MAPBOX_TOKEN", "pk.test"),
            ("MBTA_API_KEY", "mbta-test"),
            ("HTTP_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "HTTP_TIMEOUT_SECS",
                ..
            }
        ));
    }

    #[test]
    fn bad_listen_addr_is_invalid() {
        let err = FinderConfig::from_lookup(lookup_from(&[
            ("MAPBOX_TOKEN", "pk.test"),
            ("MBTA_API_KEY", "mbta-test"),
            ("STOP_FINDER_ADDR", "localhost"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("STOP_FINDER_ADDR"));
    }
}
