use std::io::{self, Write};

use chrono::{DateTime, Local};
use pdf_sizes_usecase::ListingOutput;

use super::{escape_path, shown_path};
use crate::config::SizeStyle;

struct Row {
    mode: String,
    links: String,
    owner: String,
    group: String,
    size: String,
    time: String,
    path: String,
}

#[derive(Default)]
struct Widths {
    links: usize,
    owner: usize,
    group: usize,
    size: usize,
}

impl Widths {
    fn fit(&mut self, row: &Row) {
        self.links = self.links.max(row.links.len());
        self.owner = self.owner.max(row.owner.chars().count());
        self.group = self.group.max(row.group.chars().count());
        self.size = self.size.max(row.size.len());
    }
}

/// `ls -l` columns: mode, links, owner, group, size, time, path.
///
/// Numbers are right-aligned and names left-aligned across the whole listing.
pub(super) fn output_long(
    listing: &ListingOutput,
    style: SizeStyle,
    now: &DateTime<Local>,
    out: &mut impl Write,
) -> io::Result<()> {
    let rows: Vec<_> = listing
        .records
        .iter()
        .map(|record| Row {
            mode: record.mode.symbolic(),
            links: record.links.to_string(),
            owner: record.owner.clone(),
            group: record.group.clone(),
            size: match style {
                SizeStyle::Human => record.human_size(),
                SizeStyle::Bytes => record.size.bytes().to_string(),
            },
            time: record
                .modified
                .as_ref()
                .map_or_else(|| "?".to_string(), |m| m.to_listing(now)),
            path: escape_path(&shown_path(listing, record)),
        })
        .collect();

    let mut widths = Widths::default();
    for row in &rows {
        widths.fit(row);
    }

    for row in &rows {
        writeln!(
            out,
            "{} {:>lw$} {:<ow$} {:<gw$} {:>sw$} {} {}",
            row.mode,
            row.links,
            row.owner,
            row.group,
            row.size,
            row.time,
            row.path,
            lw = widths.links,
            ow = widths.owner,
            gw = widths.group,
            sw = widths.size,
        )?;
    }
    Ok(())
}
