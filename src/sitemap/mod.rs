// src/sitemap/mod.rs
// =============================================================================
// This module writes the crawl result to an output stream.
//
// Two formats:
// - xml: a sitemap document (<urlset><url><loc>...</loc></url>...</urlset>)
// - list: one URL per line
//
// Writers take any `impl Write` so tests can render into a Vec<u8> while the
// binary renders into stdout.
// =============================================================================

mod list;
mod xml;

use clap::ValueEnum;
use std::io::Write;
use thiserror::Error;

pub use list::write_list;
pub use xml::write_xml;

/// Namespace attribute placed on the root `<urlset>` element.
pub const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// How the discovered URLs are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Sitemap XML document
    #[default]
    Xml,
    /// Plain list, one URL per line
    List,
}

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to encode sitemap: {0}")]
    Encode(String),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes `urls` to `out` in the requested format.
pub fn emit<W: Write>(out: W, urls: &[String], format: OutputFormat) -> Result<(), EmitError> {
    match format {
        OutputFormat::Xml => write_xml(out, urls),
        OutputFormat::List => write_list(out, urls),
    }
}
