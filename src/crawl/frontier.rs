// src/crawl/frontier.rs
// =============================================================================
// The crawl's bookkeeping: which URLs are waiting and which were already
// tried.
//
// - `queue` is a FIFO (VecDeque): first discovered, first fetched, which
//   makes the crawl breadth-first
// - `queued` mirrors the queue as a HashSet so "is it already waiting?"
//   is O(1) instead of a scan over the whole queue
// - `visited` holds every URL that was taken off the queue, whether the
//   download worked or not. It only ever grows.
//
// A URL is admitted to the queue only if it is in neither set, so nothing
// is fetched twice and the queue holds each URL at most once.
// =============================================================================

use std::collections::{HashSet, VecDeque};
use url::Url;

#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Url>,
    queued: HashSet<String>,
    visited: HashSet<String>,
}

impl Frontier {
    pub fn new(seed: Url) -> Self {
        let mut frontier = Self::default();
        frontier.push(seed);
        frontier
    }

    /// Queues `url` unless it was visited or is already waiting.
    /// Returns true if it was added.
    pub fn push(&mut self, mut url: Url) -> bool {
        url.set_fragment(None);
        if self.is_visited(&url) || !self.queued.insert(url.as_str().to_string()) {
            return false;
        }

        self.queue.push_back(url);
        true
    }

    /// Takes the next URL off the queue and marks it visited.
    pub fn pop(&mut self) -> Option<Url> {
        let url = self.queue.pop_front()?;
        let key = url.as_str().to_string();
        self.queued.remove(&key);
        self.visited.insert(key);
        Some(url)
    }

    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url.as_str())
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
