use std::path::{Component, Path, PathBuf};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Renders `path` the way `find .` prints it: relative to `root` and prefixed with `./`.
///
/// Paths outside `root` are returned unchanged.
pub fn display_relative(root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rel) => {
            let mut out = PathBuf::from(".");
            out.extend(rel.components().filter(|c| !matches!(c, Component::CurDir)));
            out
        }
        Err(_) => path.to_path_buf(),
    }
}
