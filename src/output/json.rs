use std::io::{self, Write};

use pdf_sizes_usecase::ListingOutput;
use serde::Serialize;

use super::shown_path;

#[derive(Debug, Serialize)]
struct JsonRecord {
    path: String,
    size_bytes: u64,
    size_human: String,
    mode: String,
    links: u64,
    owner: String,
    group: String,
    modified: Option<String>,
}

pub(super) fn output_json(listing: &ListingOutput, out: &mut impl Write) -> io::Result<()> {
    let records: Vec<_> = listing
        .records
        .iter()
        .map(|record| JsonRecord {
            path: shown_path(listing, record),
            size_bytes: record.size.bytes(),
            size_human: record.human_size(),
            mode: record.mode.symbolic(),
            links: record.links,
            owner: record.owner.clone(),
            group: record.group.clone(),
            modified: record.modified.as_ref().map(|m| m.to_rfc3339()),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)
}
