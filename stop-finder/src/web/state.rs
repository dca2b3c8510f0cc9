//! Application state for the web layer.

use std::sync::Arc;

use crate::fetch::JsonFetcher;
use crate::finder::StopFinder;

/// Shared application state.
///
/// Generic over the fetcher so the router can be driven by a mock in tests.
#[derive(Debug)]
pub struct AppState<F = JsonFetcher> {
    /// The lookup pipeline
    pub finder: Arc<StopFinder<F>>,
}

impl<F> AppState<F> {
    /// Create a new app state.
    pub fn new(finder: StopFinder<F>) -> Self {
        Self {
            finder: Arc::new(finder),
        }
    }
}

// Manual impl: cloning only bumps the Arc, whatever F is.
impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            finder: Arc::clone(&self.finder),
        }
    }
}
