use pdf_sizes_domain::{FileRecord, SizeSort};
use pdf_sizes_ports::filesystem::{FileEnumerator, ScanPlan, ScannedFile};
use pdf_sizes_shared_kernel::{ErrorContext, FileMode, FilePath, FileSize, ModificationTime, Result};

use crate::dto::ListingOutput;

pub struct ListPdfSizes<'a> {
    enumerator: &'a dyn FileEnumerator,
    sort: SizeSort,
}

impl<'a> ListPdfSizes<'a> {
    pub fn new(enumerator: &'a dyn FileEnumerator, sort: SizeSort) -> Self {
        Self { enumerator, sort }
    }

    pub fn run(&self, plan: &ScanPlan) -> Result<ListingOutput> {
        let outcome = self
            .enumerator
            .collect(plan)
            .with_context(|| format!("scanning {}", plan.root.display()))?;
        let records: Vec<_> = outcome.files.into_iter().map(scanned_to_record).collect();
        let records = self.sort.sorted(records);
        tracing::debug!(records = records.len(), order = ?self.sort.order(), "sorted listing");
        Ok(ListingOutput { root: plan.root.clone(), records, skipped: outcome.skipped })
    }
}

fn scanned_to_record(file: ScannedFile) -> FileRecord {
    FileRecord {
        path: FilePath::new(file.path),
        size: FileSize::new(file.size),
        mode: FileMode::new(file.mode),
        links: file.links,
        owner: file.owner,
        group: file.group,
        modified: file.mtime.map(ModificationTime::new),
    }
}
