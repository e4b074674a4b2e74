// src/crawl/coordinator.rs
// =============================================================================
// This module drives the crawl: a level-synchronous breadth-first traversal
// with concurrent fetches inside each wave.
//
// How it works:
// 1. The seed is admitted into the tracker and becomes wave 1
// 2. Every address in the current wave is fetched concurrently
//    (buffer_unordered, bounded by the configured concurrency)
// 3. As each fetch completes: its progress row is printed once, its links
//    are offered to the tracker, and its PageInfo joins the result list
// 4. Only after the whole wave has completed does the next wave start
//    (full barrier, so wave N+1's frontier is fully known first)
// 5. The crawl ends when a completed wave produced an empty next wave
//
// The fetch operation is a generic parameter so tests can drive the loop
// against an in-memory site instead of the network.
// =============================================================================

use futures::stream::{self, StreamExt};
use std::future::Future;
use std::time::{Duration, Instant};
use url::Url;

use super::tracker::Tracker;
use crate::page::PageInfo;
use crate::report::table;

// The complete output of one crawl: every PageInfo in completion order,
// plus the wall-clock time the whole traversal took.
#[derive(Debug)]
pub struct CrawlOutcome {
    pub pages: Vec<PageInfo>,
    pub elapsed: Duration,
}

// Crawls everything reachable from the seed within its host
//
// Parameters:
//   seed: the starting address (already validated by the caller)
//   concurrency: maximum in-flight fetches within one wave
//   fetch: performs one fetch; infallible by contract (failures arrive as
//          PageInfo records, see page::fetch)
//
// Progress rows are printed as results arrive, exactly once per page.
pub async fn crawl<F, Fut>(seed: Url, concurrency: usize, fetch: F) -> CrawlOutcome
where
    F: Fn(Url) -> Fut,
    Fut: Future<Output = PageInfo>,
{
    let tracker = Tracker::new();
    tracker.admit(&seed);

    let started = Instant::now();
    let mut pages = Vec::new();
    let mut wave = tracker.take_next();

    while !wave.is_empty() {
        // Fan the wave out; results come back in completion order, which is
        // deliberately not the dispatch order.
        let mut completions = stream::iter(wave.into_iter().map(|url| fetch(url)))
            .buffer_unordered(concurrency.max(1));

        while let Some(info) = completions.next().await {
            println!("{}", table::page_row(&info));

            // Newly discovered links land in the next wave; anything seen
            // before (in any wave, including this one) is rejected here.
            for link in &info.links {
                tracker.admit(link);
            }
            pages.push(info);
        }

        // Barrier passed: the wave is fully drained, the next frontier is
        // complete.
        wave = tracker.take_next();
    }

    CrawlOutcome {
        pages,
        elapsed: started.elapsed(),
    }
}
