// src/crawl/engine.rs
// =============================================================================
// The breadth-first traversal engine.
//
// How it works:
// 1. Level 0 is just the seed URL
// 2. For each level, every URL not seen before is marked visited and (unless
//    this is the last allowed level) handed to a fetch task
// 3. All fetch tasks of a level run concurrently in a JoinSet; each one offers
//    the links it finds to the shared Frontier
// 4. The engine waits for every task of the level to finish, then the offered
//    links become the next level
// 5. Stop after max_depth levels of hops, or as soon as a level is empty
//
// Depth meaning: with max_depth = d the result holds every URL whose shortest
// link distance from the seed is at most d. Pages at distance d are recorded
// but not fetched, since their links would be d + 1 hops away.
// =============================================================================

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use super::frontier::Frontier;
use super::{CrawlReport, CrawlStats};
use crate::fetch::PageFetcher;

pub struct Crawler<F> {
    fetcher: Arc<F>,
    max_depth: usize,
    concurrency: usize,
}

impl<F: PageFetcher + 'static> Crawler<F> {
    /// `concurrency` caps in-flight fetches within a level (minimum 1).
    pub fn new(fetcher: F, max_depth: usize, concurrency: usize) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            max_depth,
            concurrency: concurrency.max(1),
        }
    }

    // Crawls outward from a seed URL, one level of links at a time
    //
    // Parameters:
    //   seed: the URL to start from (already validated by the caller)
    //
    // Returns: CrawlReport with every visited URL (sorted) and crawl counters
    //
    // Never fails. A seed that can't be fetched still appears in the result,
    // because it is marked visited before the fetch is attempted. A fetch task
    // that panics is logged and counts as a page with no links.
    pub async fn traverse(&self, seed: &str) -> CrawlReport {
        let started = Instant::now();
        let frontier = Arc::new(Frontier::new(seed));
        let limiter = Arc::new(Semaphore::new(self.concurrency));
        let mut stats = CrawlStats::default();

        for depth in 0..=self.max_depth {
            let level = frontier.advance().await;
            if level.is_empty() {
                tracing::debug!(depth, "frontier is empty, stopping early");
                break;
            }

            let expand = depth < self.max_depth;
            tracing::info!(depth, frontier = level.len(), expand, "crawling level");

            // Mark the whole level before any task starts, so a page can't
            // offer one of its own level-mates as a new link
            let mut to_fetch = Vec::new();
            for url in level {
                if frontier.mark_visited(&url).await && expand {
                    to_fetch.push(url);
                }
            }

            stats.pages_fetched += to_fetch.len();

            let mut tasks = JoinSet::new();

            for url in to_fetch {
                let fetcher = Arc::clone(&self.fetcher);
                let frontier = Arc::clone(&frontier);
                let limiter = Arc::clone(&limiter);

                tasks.spawn(async move {
                    let Ok(_permit) = limiter.acquire_owned().await else {
                        return 0;
                    };

                    tracing::debug!(depth, url = %url, "fetching");
                    let links = fetcher.fetch(&url).await;

                    let mut fresh = 0;
                    for link in links {
                        if frontier.offer(link).await {
                            fresh += 1;
                        }
                    }
                    fresh
                });
            }

            // Barrier: the next level is only read once this one is finished
            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok(fresh) => stats.links_discovered += fresh,
                    Err(e) => tracing::warn!(depth, error = %e, "fetch task did not complete"),
                }
            }

            stats.levels += 1;
        }

        let urls = frontier.visited().await;
        stats.elapsed = started.elapsed();

        CrawlReport { urls, stats }
    }
}
