// src/crawl/tracker.rs
// =============================================================================
// This module owns deduplication for the whole crawl.
//
// The tracker holds two things behind one mutex:
// - visited: every canonical address ever accepted into any wave
// - next: the addresses accepted for the upcoming wave
//
// admit() is the single synchronization point of the crawler: the visited
// check, the visited insert and the next-wave enqueue happen under one lock
// acquisition. Two fetches discovering the same new link at the same moment
// therefore produce exactly one acceptance, which is what makes every
// address fetched at most once per crawl.
//
// The lock is only ever held for the map operations; never across a fetch.
// =============================================================================

use std::collections::HashSet;
use std::sync::Mutex;
use url::Url;

use crate::page::canonical;

pub struct Tracker {
    inner: Mutex<TrackerState>,
}

struct TrackerState {
    visited: HashSet<String>,
    next: Vec<Url>,
}

impl Tracker {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TrackerState {
                visited: HashSet::new(),
                next: Vec::new(),
            }),
        }
    }

    // Atomically admits a candidate into the next wave
    //
    // Returns true when the address was new: it is now marked visited and
    // queued for the next wave. Returns false when the address was already
    // visited or already queued at any earlier point.
    pub fn admit(&self, candidate: &Url) -> bool {
        let key = canonical(candidate);
        let mut state = self.inner.lock().expect("tracker mutex poisoned");

        if state.visited.insert(key) {
            state.next.push(candidate.clone());
            true
        } else {
            false
        }
    }

    // Takes the accumulated next wave, leaving an empty one behind.
    // The visited set is untouched; it only ever grows.
    pub fn take_next(&self) -> Vec<Url> {
        let mut state = self.inner.lock().expect("tracker mutex poisoned");
        std::mem::take(&mut state.next)
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}
