// src/page/fetch.rs
// =============================================================================
// This module fetches a single page and turns the outcome into a PageInfo.
//
// Key behavior:
// - One GET per address through a shared reqwest Client (connection pooling)
// - Compressed responses (gzip/brotli/deflate) are decoded transparently
//   before the body reaches the link extractor
// - Latency is the wall-clock time of the request including the body read
// - A failed fetch is data, not an error: transport failures become a
//   PageInfo with a sentinel status and no links, and the crawl moves on
//
// No retries, no redirect tuning, no timeout override: the transport
// defaults stand.
// =============================================================================

use anyhow::Result;
use reqwest::Client;
use std::time::Instant;
use url::Url;

use super::links::LinkExtractor;
use super::{PageInfo, STATUS_TRANSPORT_FAILURE};

// Fetches pages and extracts their outbound links
pub struct Fetcher {
    client: Client,
    extractor: LinkExtractor,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            extractor: LinkExtractor::new(),
        })
    }

    // Performs one GET and classifies the outcome
    //
    // Never returns an error: every possible outcome, including connection
    // refused, DNS failure and TLS failure, is folded into a PageInfo so a
    // single bad page cannot end the crawl.
    pub async fn fetch_page(&self, url: Url) -> PageInfo {
        let started = Instant::now();

        match self.client.get(url.clone()).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let content_type = primary_content_type(
                    response
                        .headers()
                        .get(reqwest::header::CONTENT_TYPE)
                        .and_then(|value| value.to_str().ok()),
                );
                let body = response.text().await;
                let latency = started.elapsed();

                // The body goes to the extractor only when it was readable;
                // an unreadable body keeps the response's status but yields
                // no links.
                let links = match &body {
                    Ok(html) => self.extractor.extract(&url, html),
                    Err(_) => Vec::new(),
                };

                PageInfo {
                    url,
                    status,
                    content_type,
                    latency,
                    links,
                }
            }
            Err(error) => {
                let latency = started.elapsed();
                // A partial response (e.g. a failure while reading headers
                // of an error page) may still carry a status code; otherwise
                // fall back to the sentinel.
                let status = error
                    .status()
                    .map(|code| code.as_u16())
                    .unwrap_or(STATUS_TRANSPORT_FAILURE);

                PageInfo {
                    url,
                    status,
                    content_type: "unknown".to_string(),
                    latency,
                    links: Vec::new(),
                }
            }
        }
    }
}

// Reduces a Content-Type header to its primary MIME token
//
// "text/html; charset=utf-8" -> "text/html"; a missing or empty header
// becomes "unknown".
fn primary_content_type(raw: Option<&str>) -> String {
    raw.and_then(|value| value.split(';').next())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}
