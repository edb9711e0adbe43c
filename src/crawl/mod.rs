// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Level-by-level breadth-first crawling from a seed URL
// - Same-origin restriction (never leaves the seed's site)
// - Configurable depth limit and fetch concurrency
// - Each URL is fetched at most once, even when many pages link to it
//
// Submodules:
// - frontier: the visited set and next-level candidates, shared by all tasks
// - engine: the traversal loop itself
// =============================================================================

mod engine;
mod frontier;

use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::fetch::HttpFetcher;

pub use engine::Crawler;

/// Settings for one crawl run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub seed: String,
    /// Maximum number of link hops from the seed
    pub max_depth: usize,
    /// Maximum number of pages fetched at the same time
    pub concurrency: usize,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seed: "https://example.com".to_string(),
            max_depth: 5,
            concurrency: 32,
            timeout: Duration::from_secs(10),
            user_agent: format!("site-mapper/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Problems with the crawl settings, caught before any request is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid seed URL '{url}': {source}")]
    InvalidSeed {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("seed URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
    #[error("seed URL has no host: {0}")]
    MissingHost(String),
    #[error("concurrency must be at least 1")]
    ZeroConcurrency,
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl CrawlConfig {
    /// Checks the settings so a bad seed fails loudly instead of producing an
    /// empty sitemap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let seed = Url::parse(&self.seed).map_err(|source| ConfigError::InvalidSeed {
            url: self.seed.clone(),
            source,
        })?;

        if seed.scheme() != "http" && seed.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme(seed.scheme().to_string()));
        }
        if seed.host_str().map_or(true, str::is_empty) {
            return Err(ConfigError::MissingHost(self.seed.clone()));
        }
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(())
    }
}

/// Counters collected while crawling, reported once at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlStats {
    /// Levels that had at least one URL
    pub levels: usize,
    /// Fetches dispatched (including ones that failed)
    pub pages_fetched: usize,
    /// Links that were new when they were found
    pub links_discovered: usize,
    pub elapsed: Duration,
}

/// Outcome of a crawl: every visited URL (sorted) plus the counters.
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub urls: Vec<String>,
    pub stats: CrawlStats,
}

/// Validates `config`, crawls the site over HTTP and returns the report.
///
/// Only configuration problems are errors. Pages that fail to load are
/// logged and the crawl carries on.
pub async fn crawl_site(config: &CrawlConfig) -> Result<CrawlReport, ConfigError> {
    config.validate()?;

    let fetcher = HttpFetcher::new(config.timeout, &config.user_agent)?;
    let crawler = Crawler::new(fetcher, config.max_depth, config.concurrency);

    tracing::info!(
        seed = %config.seed,
        max_depth = config.max_depth,
        concurrency = config.concurrency,
        "starting crawl"
    );

    let report = crawler.traverse(&config.seed).await;

    tracing::info!(
        urls = report.urls.len(),
        levels = report.stats.levels,
        pages_fetched = report.stats.pages_fetched,
        links_discovered = report.stats.links_discovered,
        elapsed_ms = report.stats.elapsed.as_millis() as u64,
        "crawl finished"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::GET, MockServer};

    fn config(seed: &str) -> CrawlConfig {
        CrawlConfig {
            seed: seed.to_string(),
            ..CrawlConfig::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(CrawlConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unparsable_seed_is_rejected() {
        let err = config("not a url").validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeed { .. }));
    }

    #[test]
    fn test_non_http_seed_is_rejected() {
        let err = config("ftp://x.test/").validate().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(s) if s == "ftp"));

        let err = config("mailto:someone@x.test").validate().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(_)));
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        let mut cfg = config("https://x.test/");
        cfg.concurrency = 0;
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroConcurrency)));

        let mut cfg = config("https://x.test/");
        cfg.timeout = Duration::ZERO;
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroTimeout)));
    }

    #[tokio::test]
    async fn test_crawl_site_over_http() {
        let server = MockServer::start_async().await;
        let home = server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200).body(
                    r#"<a href="/a">A</a><a href="/b">B</a><a href="https://other.test/c">C</a>"#,
                );
            })
            .await;
        let page_a = server
            .mock_async(|when, then| {
                when.method(GET).path("/a");
                then.status(200).body(r#"<a href="/b">B</a><a href="/">Home</a>"#);
            })
            .await;
        let page_b = server
            .mock_async(|when, then| {
                when.method(GET).path("/b");
                then.status(200).body("<p>No links here.</p>");
            })
            .await;

        let cfg = CrawlConfig {
            max_depth: 2,
            ..config(&server.url("/"))
        };
        let report = crawl_site(&cfg).await.unwrap();

        assert_eq!(
            report.urls,
            vec![server.url("/"), server.url("/a"), server.url("/b")]
        );
        // Every page is requested exactly once
        home.assert_async().await;
        page_a.assert_async().await;
        page_b.assert_async().await;
    }

    #[tokio::test]
    async fn test_bad_seed_fails_before_crawling() {
        let result = crawl_site(&config("example.com/no-scheme")).await;
        assert!(matches!(result, Err(ConfigError::InvalidSeed { .. })));
    }
}
