use std::io::{self, Write};

use pdf_sizes_usecase::ListingOutput;

use super::{escape_path, shown_path};

/// `bytes<TAB>human<TAB>path`, no header.
pub(super) fn output_tsv(listing: &ListingOutput, out: &mut impl Write) -> io::Result<()> {
    for record in &listing.records {
        let path = escape_path(&shown_path(listing, record));
        writeln!(out, "{}\t{}\t{}", record.size.bytes(), record.human_size(), path)?;
    }
    Ok(())
}
