// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use pdf_sizes_domain::NamePattern;
use pdf_sizes_ports::filesystem::{FileEnumerator, ScanOutcome, ScanPlan, ScannedFile, SkippedEntry};
use pdf_sizes_shared_kernel::Result;

use crate::metadata::{OwnerNames, stat_file};

/// Filesystem adapter implementing the `FileEnumerator` port with a sequential `ignore` walk.
///
/// Every entry is visited (hidden files and ignore files are not special),
/// symlinks are never followed and only regular files are reported.
#[derive(Debug, Default)]
pub struct WalkFileEnumerator;

impl WalkFileEnumerator {
    pub fn new() -> Self {
        Self
    }

    pub fn enumerate(plan: &ScanPlan) -> Result<ScanOutcome> {
        let pattern = NamePattern::new(&plan.pattern, plan.ignore_case.into())?;
        Ok(walk_root(&plan.root, &pattern))
    }
}

impl FileEnumerator for WalkFileEnumerator {
    fn collect(&self, plan: &ScanPlan) -> Result<ScanOutcome> {
        Self::enumerate(plan)
    }
}

fn walk_root(root: &Path, pattern: &NamePattern) -> ScanOutcome {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        // Name order keeps repeated runs byte-identical.
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut owners = OwnerNames::default();
    let mut outcome = ScanOutcome::default();

    for result in builder.build() {
        match result {
            Ok(entry) => {
                if let Some(result) = visit_entry(&entry, pattern, &mut owners) {
                    match result {
                        Ok(file) => {
                            tracing::debug!(path = %file.path.display(), size = file.size, "matched");
                            outcome.files.push(file);
                        }
                        Err(skipped) => outcome.skipped.push(skipped),
                    }
                }
            }
            Err(err) => outcome.skipped.push(skipped_from_walk_error(&err)),
        }
    }

    tracing::info!(
        root = %root.display(),
        matched = outcome.files.len(),
        skipped = outcome.skipped.len(),
        "scan finished"
    );
    outcome
}

// `None` for entries that are not candidates at all (directories, symlinks,
// non-matching names).
fn visit_entry(
    entry: &DirEntry,
    pattern: &NamePattern,
    owners: &mut OwnerNames,
) -> Option<std::result::Result<ScannedFile, SkippedEntry>> {
    // The walker reports the type without following symlinks.
    let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
    if !is_file || !pattern.matches_name(entry.file_name()) {
        return None;
    }

    let path = entry.path();
    Some(stat_file(path, owners).map_err(|err| SkippedEntry {
        path: Some(path.to_path_buf()),
        reason: err.to_string(),
    }))
}

fn skipped_from_walk_error(err: &ignore::Error) -> SkippedEntry {
    SkippedEntry { path: walk_error_path(err), reason: walk_error_reason(err) }
}

fn walk_error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => walk_error_path(err),
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        ignore::Error::Partial(errs) => errs.iter().find_map(walk_error_path),
        _ => None,
    }
}

// Strips the path wrappers so the diagnostic does not repeat the path.
fn walk_error_reason(err: &ignore::Error) -> String {
    match err {
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => walk_error_reason(err),
        ignore::Error::Io(io) => io.to_string(),
        other => other.to_string(),
    }
}
