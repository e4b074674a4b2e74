// src/crawl/mod.rs
// =============================================================================
// This module contains the crawl engine.
//
// Submodules:
// - tracker: the shared visited-set/next-frontier with atomic admission
// - coordinator: the level-synchronous BFS loop with intra-wave concurrency
// =============================================================================

mod coordinator;
mod tracker;

pub use coordinator::{crawl, CrawlOutcome};
