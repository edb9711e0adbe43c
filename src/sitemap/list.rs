// src/sitemap/list.rs
// Plain-text output: one URL per line.

use std::io::Write;

use super::EmitError;

pub fn write_list<W: Write>(mut out: W, urls: &[String]) -> Result<(), EmitError> {
    for url in urls {
        writeln!(out, "{}", url)?;
    }
    out.flush()?;
    Ok(())
}
