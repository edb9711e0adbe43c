// src/crawl/frontier.rs
// =============================================================================
// Shared discovery state for one crawl run.
//
// Two sets live here:
// - visited: every URL that has been scheduled for fetching, across all levels
// - candidates: links found during the current level that nobody has visited
//
// Every fetch task of a level writes into these at the same time, so both sit
// behind a tokio Mutex. Locks are always taken in the order
// visited -> candidates, and never held across a network call.
// =============================================================================

use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Debug)]
pub struct Frontier {
    visited: Mutex<HashSet<String>>,
    candidates: Mutex<HashSet<String>>,
}

impl Frontier {
    /// Creates a frontier whose first level holds only `seed`.
    pub fn new(seed: &str) -> Self {
        Self {
            visited: Mutex::new(HashSet::new()),
            candidates: Mutex::new(HashSet::from([seed.to_string()])),
        }
    }

    // Marks a URL as visited
    //
    // Parameters:
    //   url: the URL about to be scheduled for fetching
    //
    // Returns: true if this call visited it, false if it already was
    //
    // The check and the insert happen under one lock, so two callers racing
    // on the same URL cannot both get true.
    pub async fn mark_visited(&self, url: &str) -> bool {
        // Held until the insert below; nobody can sneak in between
        let mut visited = self.visited.lock().await;
        if visited.contains(url) {
            return false;
        }
        visited.insert(url.to_string())
    }

    // Offers a discovered link for the next level
    //
    // Parameters:
    //   link: an absolute same-origin URL found on a page
    //
    // Returns: true if the link was new to both sets
    //
    // Example:
    //   visited = {"/"}, candidates = {}
    //   offer("/")  -> false (already visited)
    //   offer("/a") -> true, candidates = {"/a"}
    //   offer("/a") -> false (already a candidate)
    pub async fn offer(&self, link: String) -> bool {
        // visited first, then candidates: the only lock order used anywhere,
        // and visited stays held so it can't change under the insert
        let visited = self.visited.lock().await;
        if visited.contains(&link) {
            return false;
        }
        let mut candidates = self.candidates.lock().await;
        candidates.insert(link)
    }

    // Takes the accumulated candidates as the next level
    //
    // Returns: Vec of URLs for the next level, sorted. A fresh empty set is
    //          left behind for the level after it.
    //
    // Only call this once every task of the current level has finished,
    // otherwise late offers would land in the wrong level.
    pub async fn advance(&self) -> Vec<String> {
        let mut candidates = self.candidates.lock().await;
        let mut level: Vec<String> = std::mem::take(&mut *candidates).into_iter().collect();
        // Stable dispatch order makes logs easier to follow
        level.sort();
        level
    }

    /// Returns a sorted copy of the visited URLs.
    pub async fn visited(&self) -> Vec<String> {
        let mut urls: Vec<String> = self.visited.lock().await.iter().cloned().collect();
        urls.sort();
        urls
    }
}
