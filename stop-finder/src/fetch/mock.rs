//! In-memory fetcher for testing without network access.
//!
//! Serves canned JSON keyed by URL path and records every URL it was
//! asked for, so tests can check both the request and the call count.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use url::Url;

use super::client::FetchJson;
use super::error::FetchError;

/// What the mock answers for a path.
#[derive(Debug, Clone)]
pub enum CannedResponse {
    /// A successful response with this JSON body.
    Json(Value),
    /// A non-success HTTP status.
    Status(u16),
    /// A successful response whose body is not JSON.
    Malformed(String),
}

/// Mock fetcher serving canned responses.
#[derive(Debug, Clone, Default)]
pub struct MockFetcher {
    responses: Arc<RwLock<HashMap<String, CannedResponse>>>,
    requests: Arc<RwLock<Vec<Url>>>,
}

impl MockFetcher {
    /// Create a mock with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests for `path` with `response`.
    pub async fn respond(&self, path: impl Into<String>, response: CannedResponse) {
        self.responses.write().await.insert(path.into(), response);
    }

    /// Answer requests for `path` with a JSON body.
    pub async fn respond_json(&self, path: impl Into<String>, body: Value) {
        self.respond(path, CannedResponse::Json(body)).await;
    }

    /// Every URL requested so far, in order.
    pub async fn requests(&self) -> Vec<Url> {
        self.requests.read().await.clone()
    }

    /// Number of requests made so far.
    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }
}

impl FetchJson for MockFetcher {
    async fn fetch_json(&self, url: &Url) -> Result<Value, FetchError> {
        self.requests.write().await.push(url.clone());

        let responses = self.responses.read().await;
        match responses.get(url.path()) {
            Some(CannedResponse::Json(body)) => Ok(body.clone()),
            Some(CannedResponse::Status(status)) => Err(FetchError::Status {
                status: *status,
                message: String::new(),
            }),
            Some(CannedResponse::Malformed(body)) => {
                serde_json::from_str(body).map_err(|e| FetchError::Json {
                    message: e.to_string(),
                    body: Some(body.clone()),
                })
            }
            None => Err(FetchError::Status {
                status: 404,
                message: format!("no canned response for {}", url.path()),
            }),
        }
    }
}
