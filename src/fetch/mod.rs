// src/fetch/mod.rs
// =============================================================================
// This module turns one URL into the list of same-site URLs it links to.
//
// Submodules:
// - html: Pulls raw href values out of an HTML document
// - origin: Normalizes root-relative links and keeps same-origin ones
// - http: Fetches a page with reqwest and wires the two above together
//
// The crawler only talks to the PageFetcher trait defined here, so it has no
// idea whether pages come from the network or from an in-memory test graph.
// =============================================================================

pub mod html;
pub mod http;
pub mod origin;

use async_trait::async_trait;

pub use http::HttpFetcher;

/// Expands one page into its outbound same-origin links.
///
/// `fetch` never fails: a page that cannot be fetched or parsed simply has no
/// links. Implementations are shared by all fetch tasks of a crawl level, so
/// they must be `Send + Sync`.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Vec<String>;
}
