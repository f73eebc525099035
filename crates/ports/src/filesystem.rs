// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use chrono::{DateTime, Local};
use pdf_sizes_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Input parameters controlling file enumeration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanPlan {
    pub root: PathBuf,
    pub pattern: String,
    pub ignore_case: bool,
}

/// DTO representing a matching regular file and its listing metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub size: u64,
    pub mode: u32,
    pub links: u64,
    pub owner: String,
    pub group: String,
    pub mtime: Option<DateTime<Local>>,
}

/// An entry that could not be walked or stat'ed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub path: Option<PathBuf>,
    pub reason: String,
}

/// Result of one enumeration: files in walk order plus whatever had to be skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub files: Vec<ScannedFile>,
    pub skipped: Vec<SkippedEntry>,
}

/// Port for enumerating matching files.
///
/// Per-entry failures belong in [`ScanOutcome::skipped`]; an `Err` means the
/// scan as a whole could not run.
pub trait FileEnumerator: Send + Sync {
    fn collect(&self, plan: &ScanPlan) -> Result<ScanOutcome>;
}
