// src/fetch/html.rs
// =============================================================================
// This module pulls raw hyperlink references out of HTML pages.
//
// The crawler treats link extraction as a black box behind the LinkExtractor
// trait. The default implementation uses the `scraper` crate, which:
// - Parses HTML into a DOM (tolerates broken markup like a browser does)
// - Supports CSS selectors for finding elements
//
// Note that extraction returns hrefs exactly as written in the page (trimmed).
// Resolving them against the page origin is the job of origin.rs.
// =============================================================================

use scraper::{Html, Selector};

/// Something that can list the hyperlink targets in an HTML document.
///
/// Implementations never fail: malformed markup yields whatever links could
/// be recovered, possibly none.
pub trait LinkExtractor: Send + Sync {
    fn extract_links(&self, html: &str) -> Vec<String>;
}

/// Link extractor backed by `scraper`, reading every `<a href="...">`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScraperExtractor;

impl LinkExtractor for ScraperExtractor {
    fn extract_links(&self, html: &str) -> Vec<String> {
        if html.trim().is_empty() {
            return Vec::new();
        }

        // "a[href]" means "all <a> tags that have an href attribute"
        let Ok(selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        let document = Html::parse_document(html);

        document
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .map(|href| href.trim().to_string())
            .filter(|href| !href.is_empty())
            .collect()
    }
}
