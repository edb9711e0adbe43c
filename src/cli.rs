// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every flag can also come from an environment variable (SITE_MAPPER_*), which
// is handy in CI where the seed URL is set once for the whole job.
// =============================================================================

use clap::{ArgAction, Parser};
use std::time::Duration;

use crate::crawl::CrawlConfig;
use crate::sitemap::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "site-mapper",
    version,
    about = "Crawl a website breadth-first and print its sitemap",
    long_about = "site-mapper follows same-site links from a seed URL up to a fixed number of hops \
                  and prints every page it reached, either as a sitemap XML document or as a plain list."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g., https://example.com)
    #[arg(long, env = "SITE_MAPPER_URL", default_value = "https://example.com")]
    pub url: String,

    /// Maximum number of link hops from the seed
    ///
    /// Depth 0 = just the seed
    /// Depth 1 = the seed + every page it links to
    /// etc.
    #[arg(
        long = "max-depth",
        alias = "maxDepth",
        env = "SITE_MAPPER_MAX_DEPTH",
        default_value_t = 5
    )]
    pub max_depth: usize,

    /// Output format
    #[arg(long, value_enum, env = "SITE_MAPPER_FORMAT", default_value_t = OutputFormat::Xml)]
    pub format: OutputFormat,

    /// Maximum number of pages fetched at the same time
    #[arg(long, env = "SITE_MAPPER_CONCURRENCY", default_value_t = 32)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, env = "SITE_MAPPER_TIMEOUT", default_value_t = 10)]
    pub timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long, env = "SITE_MAPPER_USER_AGENT")]
    pub user_agent: Option<String>,

    /// More logging on stderr (-v = info, -vv = debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Converts the parsed flags into crawl settings.
    pub fn crawl_config(&self) -> CrawlConfig {
        let defaults = CrawlConfig::default();

        CrawlConfig {
            seed: self.url.clone(),
            max_depth: self.max_depth,
            concurrency: self.concurrency,
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }

    /// Log filter used when RUST_LOG is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
