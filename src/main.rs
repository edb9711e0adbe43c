// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging on stderr (stdout carries the sitemap)
// 3. Crawl the site starting from the seed URL
// 4. Print the discovered URLs as XML or as a plain list
// 5. Exit with proper code (0 = success, 2 = error)
//
// Pages that fail to load are not errors; they just contribute no links.
// Only bad settings and a failure to write the output stop the program.
// =============================================================================

mod cli;
mod crawl;
mod fetch;
mod sitemap;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let config = cli.crawl_config();
    let report = crawl::crawl_site(&config)
        .await
        .with_context(|| format!("cannot crawl '{}'", config.seed))?;

    let stdout = std::io::stdout();
    sitemap::emit(stdout.lock(), &report.urls, cli.format)
        .context("failed to write the sitemap")?;

    Ok(0)
}

// RUST_LOG wins over the -v flags when it is set
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
