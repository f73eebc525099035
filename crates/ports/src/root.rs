// crates/ports/src/root.rs
use std::path::{Path, PathBuf};

use pdf_sizes_shared_kernel::Result;

/// Port for choosing the directory to scan and making it the working directory.
pub trait RootResolver {
    /// Returns the absolute scan root: `explicit` when given, otherwise the
    /// directory holding the running program.
    fn resolve(&self, explicit: Option<&Path>) -> Result<PathBuf>;

    /// Makes `root` the process working directory.
    fn enter(&self, root: &Path) -> Result<()>;
}
