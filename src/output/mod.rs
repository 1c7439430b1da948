mod cli;
mod json;

pub use cli::{write_source_detail, write_source_listing, Style};
pub use json::{write_json, DetailView};

use crate::aggregate::{SourceDetail, SourceListing};
use anyhow::Result;
use std::io::Write;

/// Output format for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table and text blocks
    Table,
    /// JSON format for programmatic use
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use 'table' or 'json'", s)),
        }
    }
}

pub fn print_sources(listing: &SourceListing, format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_source_listing(&mut out, listing)?,
        OutputFormat::Json => write_json(&mut out, listing)?,
    }
    out.flush()?;
    Ok(())
}

pub fn print_source_detail(
    detail: &SourceDetail,
    format: OutputFormat,
    style: Style,
) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_source_detail(&mut out, detail, style)?,
        OutputFormat::Json => write_json(&mut out, &DetailView::from(detail))?,
    }
    out.flush()?;
    Ok(())
}
