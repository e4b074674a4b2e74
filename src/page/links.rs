// src/page/links.rs
// =============================================================================
// This module extracts in-scope outbound links from a page.
//
// Extraction is a tolerant pattern match over the raw HTML text, not a full
// DOM parse: a malformed tag or an unparsable href yields no candidate and is
// never an error. The crawl must survive whatever markup a site serves.
//
// Filtering happens in two stages:
// 1. Pre-resolution: keep only absolute ("http...") and root-relative ("/...")
//    href values; everything else (relative paths, mailto:, javascript:,
//    bare fragments) is discarded.
// 2. Post-resolution: dedupe within the page, drop self-links, drop foreign
//    hosts, drop binary-asset paths (suffix denylist, not a MIME check).
// =============================================================================

use regex::Regex;
use std::collections::HashSet;
use url::Url;

use super::canonical;

// Paths ending in one of these never enter the frontier. This is a plain
// suffix check on the URL path, checked case-insensitively.
const DENIED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".mp3", ".pdf"];

// Pulls anchor hrefs out of raw HTML and filters them down to the links the
// crawl should follow
pub struct LinkExtractor {
    anchor: Regex,
}

impl LinkExtractor {
    pub fn new() -> Self {
        // Matches <a ... href="..."> / <a ... href='...'> anywhere in the
        // text, case-insensitively, without parsing the document.
        // The pattern is constant, so a parse failure is a programmer error.
        let anchor = Regex::new(r#"(?i)<a\s[^>]*?href\s*=\s*["']([^"']+)["']"#)
            .expect("anchor pattern is valid");
        Self { anchor }
    }

    // Extracts the in-scope outbound links of one page
    //
    // Parameters:
    //   base: the address the HTML was fetched from
    //   html: the raw (already decompressed) response body
    //
    // Returns absolute same-host URLs in first-seen order, deduplicated by
    // canonical form. Every failure path drops the single candidate and
    // keeps going.
    pub fn extract(&self, base: &Url, html: &str) -> Vec<Url> {
        let base_key = canonical(base);
        let mut seen = HashSet::new();
        let mut links = Vec::new();

        for capture in self.anchor.captures_iter(html) {
            let href = capture[1].trim();

            // Pre-resolution filter: absolute http(s) or root-relative only
            if !(href.starts_with("http") || href.starts_with('/')) {
                continue;
            }

            // Root-relative values resolve against the base origin; absolute
            // values parse standalone. Either way a malformed URL is dropped.
            let resolved = if href.starts_with('/') {
                base.join(href)
            } else {
                Url::parse(href)
            };
            let url = match resolved {
                Ok(url) => url,
                Err(_) => continue,
            };

            let key = canonical(&url);
            if key == base_key {
                continue; // no self-loops
            }
            if url.host_str() != base.host_str() {
                continue; // strict same-host scope, no subdomain matching
            }
            if has_denied_extension(&url) {
                continue;
            }
            if seen.insert(key) {
                links.push(url);
            }
        }

        links
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn has_denied_extension(url: &Url) -> bool {
    let path = url.path().to_ascii_lowercase();
    DENIED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
