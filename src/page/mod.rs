// src/page/mod.rs
// =============================================================================
// This module contains everything that happens per page.
//
// Submodules:
// - fetch: Makes the HTTP request and builds a PageInfo from the outcome
// - links: Extracts in-scope outbound links from raw HTML
//
// This file holds the shared pieces: the PageInfo record itself and the
// canonical address form used for all equality and deduplication.
// =============================================================================

use serde::{Serialize, Serializer};
use std::time::Duration;
use url::Url;

pub mod fetch;
pub mod links;

// Sentinel status for a fetch that never produced an HTTP response
// (connection refused, DNS failure, timeout, TLS failure)
pub const STATUS_TRANSPORT_FAILURE: u16 = 0;

// Everything we record about one fetched page
//
// Built once per fetch and never mutated afterwards. `links` holds only the
// in-scope outbound links (same host, non-asset); filtered candidates are
// not retained.
#[derive(Debug, Clone, Serialize)]
pub struct PageInfo {
    /// The address that was fetched
    pub url: Url,
    /// HTTP status code, or STATUS_TRANSPORT_FAILURE when no response arrived
    pub status: u16,
    /// Primary MIME token of the Content-Type header ("unknown" if absent)
    pub content_type: String,
    /// Wall-clock duration of the request, including the body read
    #[serde(rename = "latency_ms", serialize_with = "latency_as_millis")]
    pub latency: Duration,
    /// In-scope outbound links, in first-seen order within the page
    pub links: Vec<Url>,
}

impl PageInfo {
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

// Canonical form of an address, used for equality and dedup everywhere:
// scheme + host + path + query, fragment stripped.
//
// Two addresses are the same page exactly when their canonical forms match.
pub fn canonical(url: &Url) -> String {
    let mut url = url.clone();
    url.set_fragment(None);
    url.to_string()
}

// Serializes a latency as whole milliseconds for the --json report
fn latency_as_millis<S>(latency: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(latency.as_millis() as u64)
}
