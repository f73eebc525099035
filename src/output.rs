// src/output.rs
use std::io::Write;

use chrono::{DateTime, Local};
use pdf_sizes_domain::FileRecord;
use pdf_sizes_shared_kernel::{PresentationError, PresentationResult, path::display_relative};
use pdf_sizes_usecase::ListingOutput;

use crate::config::{Config, OutputFormat};

mod delimited;
mod json;
mod long;

/// Writes the sorted listing in the configured format.
pub fn emit(
    listing: &ListingOutput,
    config: &Config,
    now: &DateTime<Local>,
    out: &mut impl Write,
) -> PresentationResult<()> {
    match config.format {
        OutputFormat::Long => long::output_long(listing, config.size_style, now, out),
        OutputFormat::Tsv => delimited::output_tsv(listing, out),
        OutputFormat::Json => json::output_json(listing, out),
    }
    .map_err(PresentationError::Write)
}

/// One `find`-style diagnostic line per skipped entry.
pub fn report_skipped(listing: &ListingOutput, err: &mut impl Write) -> PresentationResult<()> {
    for skipped in &listing.skipped {
        let result = match &skipped.path {
            Some(path) => writeln!(
                err,
                "pdf_sizes: cannot access '{}': {}",
                display_relative(&listing.root, path).display(),
                skipped.reason
            ),
            None => writeln!(err, "pdf_sizes: {}", skipped.reason),
        };
        result.map_err(PresentationError::Write)?;
    }
    Ok(())
}

fn shown_path(listing: &ListingOutput, record: &FileRecord) -> String {
    display_relative(&listing.root, record.path.as_path()).display().to_string()
}

/// Backslash-escapes characters that would break a line-oriented row.
fn escape_path(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}
