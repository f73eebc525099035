// src/config.rs
use std::path::PathBuf;

use pdf_sizes_domain::{CaseSensitivity, NamePattern, SizeSort, SortOrder};
use pdf_sizes_ports::filesystem::ScanPlan;
use pdf_sizes_shared_kernel::DomainResult;

use crate::cli::Args;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `ls -l` style lines.
    #[default]
    Long,
    Tsv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeStyle {
    #[default]
    Human,
    Bytes,
}

/// Validated run configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub root: Option<PathBuf>,
    pub pattern: NamePattern,
    pub sort: SizeSort,
    pub format: OutputFormat,
    pub size_style: SizeStyle,
}

impl Config {
    pub fn scan_plan(&self, root: PathBuf) -> ScanPlan {
        ScanPlan {
            root,
            pattern: self.pattern.pattern().to_string(),
            ignore_case: matches!(self.pattern.case(), CaseSensitivity::Insensitive),
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = pdf_sizes_shared_kernel::DomainError;

    fn try_from(args: Args) -> DomainResult<Self> {
        let pattern = NamePattern::new(&args.pattern, CaseSensitivity::from(args.ignore_case))?;
        Ok(Self {
            root: args.root,
            pattern,
            sort: SizeSort::new(SortOrder::from(args.reverse)),
            format: args.format.into(),
            size_style: if args.bytes { SizeStyle::Bytes } else { SizeStyle::Human },
        })
    }
}
