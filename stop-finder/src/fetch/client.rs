//! HTTP JSON fetcher.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;
use url::Url;

use super::error::FetchError;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How much of an unexpected body to keep for diagnostics.
const BODY_SNIPPET_CHARS: usize = 500;

/// Something that can GET a URL and hand back the parsed JSON body.
///
/// Both resolvers are generic over this so tests can swap in
/// [`MockFetcher`](super::MockFetcher).
pub trait FetchJson: Send + Sync {
    /// Issue one GET for `url` and parse the body as JSON.
    fn fetch_json(&self, url: &Url) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// Configuration for the HTTP fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl FetcherConfig {
    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("stop-finder/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// `reqwest`-backed fetcher.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct JsonFetcher {
    http: reqwest::Client,
}

impl JsonFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http })
    }
}

impl FetchJson for JsonFetcher {
    async fn fetch_json(&self, url: &Url) -> Result<Value, FetchError> {
        // The query string carries credentials, so only host and path are logged
        debug!(host = url.host_str(), path = url.path(), "fetching JSON");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: body.chars().take(BODY_SNIPPET_CHARS).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| FetchError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
        })
    }
}

/// Parse a base URL that we can append path segments to.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    if url.cannot_be_a_base() {
        return Err(format!("{raw} cannot be used as a base URL"));
    }
    Ok(url)
}
