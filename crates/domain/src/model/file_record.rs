use pdf_sizes_shared_kernel::{FileMode, FilePath, FileSize, ModificationTime};

/// One listed file: its path plus the metadata shown by a long listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: FilePath,
    pub size: FileSize,
    pub mode: FileMode,
    pub links: u64,
    pub owner: String,
    pub group: String,
    pub modified: Option<ModificationTime>,
}

impl FileRecord {
    /// Record with only a path and size; listing columns get neutral defaults.
    pub fn with_size(path: impl Into<FilePath>, bytes: u64) -> Self {
        Self {
            path: path.into(),
            size: FileSize::new(bytes),
            mode: FileMode::regular(0o644),
            links: 1,
            owner: String::new(),
            group: String::new(),
            modified: None,
        }
    }

    pub fn human_size(&self) -> String {
        self.size.to_human()
    }
}
