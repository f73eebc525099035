// crates/infra/src/root.rs
use std::path::{Path, PathBuf};

use pdf_sizes_ports::root::RootResolver;
use pdf_sizes_shared_kernel::{InfrastructureError, Result, path::logical_absolute};

/// Resolves the scan root from the running executable's location or an explicit override.
#[derive(Debug, Default)]
pub struct ProgramDirResolver;

impl ProgramDirResolver {
    pub fn new() -> Self {
        Self
    }
}

impl RootResolver for ProgramDirResolver {
    fn resolve(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        let candidate = match explicit {
            Some(path) => logical_absolute(path),
            None => program_dir()?,
        };
        let root = std::fs::canonicalize(&candidate)
            .map_err(|source| InfrastructureError::RootInaccessible { path: candidate.clone(), source })?;
        if !root.is_dir() {
            return Err(InfrastructureError::RootNotDirectory { path: root }.into());
        }
        tracing::debug!(root = %root.display(), "resolved scan root");
        Ok(root)
    }

    fn enter(&self, root: &Path) -> Result<()> {
        std::env::set_current_dir(root)
            .map_err(|source| InfrastructureError::RootInaccessible { path: root.to_path_buf(), source })?;
        Ok(())
    }
}

fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|err| InfrastructureError::RootUnresolved { reason: err.to_string() })?;
    let dir = exe.parent().ok_or_else(|| InfrastructureError::RootUnresolved {
        reason: format!("{} has no parent directory", exe.display()),
    })?;
    Ok(dir.to_path_buf())
}
