use std::{ffi::OsStr, path::Path};

use globset::{GlobBuilder, GlobMatcher};
use pdf_sizes_shared_kernel::{DomainError, DomainResult};

/// Pattern used when none is given.
pub const DEFAULT_PATTERN: &str = "*.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
}

impl From<bool> for CaseSensitivity {
    /// `true` means "ignore case".
    fn from(ignore_case: bool) -> Self {
        if ignore_case { Self::Insensitive } else { Self::Sensitive }
    }
}

/// Glob matched against a bare file name, in the manner of `find -name`.
#[derive(Debug, Clone)]
pub struct NamePattern {
    original: String,
    case: CaseSensitivity,
    matcher: GlobMatcher,
}

impl NamePattern {
    pub fn new(pattern: &str, case: CaseSensitivity) -> DomainResult<Self> {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(matches!(case, CaseSensitivity::Insensitive))
            .literal_separator(true)
            .build()
            .map_err(|err| DomainError::InvalidPattern {
                pattern: pattern.to_string(),
                details: err.kind().to_string(),
                source: Some(Box::new(err)),
            })?;
        Ok(Self {
            original: pattern.to_string(),
            case,
            matcher: glob.compile_matcher(),
        })
    }

    pub fn pdf() -> Self {
        // The default pattern is a literal that always compiles.
        Self::new(DEFAULT_PATTERN, CaseSensitivity::Sensitive)
            .unwrap_or_else(|_| unreachable!("default pattern is valid"))
    }

    pub fn matches_name(&self, name: &OsStr) -> bool {
        self.matcher.is_match(Path::new(name))
    }

    pub fn pattern(&self) -> &str {
        &self.original
    }

    pub fn case(&self) -> CaseSensitivity {
        self.case
    }
}

impl Default for NamePattern {
    fn default() -> Self {
        Self::pdf()
    }
}
