use std::path::PathBuf;

use pdf_sizes_domain::FileRecord;
use pdf_sizes_ports::filesystem::SkippedEntry;

/// Sorted records of one run together with the entries that had to be skipped.
#[derive(Debug, Clone)]
pub struct ListingOutput {
    pub root: PathBuf,
    pub records: Vec<FileRecord>,
    pub skipped: Vec<SkippedEntry>,
}

impl ListingOutput {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
