//! JSON-over-HTTP transport.
//!
//! The only network primitive the resolvers use: one GET, body parsed
//! as JSON. No retries.

mod client;
mod error;
mod mock;

pub(crate) use client::parse_base_url;
pub use client::{FetchJson, FetcherConfig, JsonFetcher};
pub use error::FetchError;
pub use mock::{CannedResponse, MockFetcher};
