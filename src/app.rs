// src/app.rs
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use chrono::Local;
use pdf_sizes_infra::{ProgramDirResolver, WalkFileEnumerator};
use pdf_sizes_ports::root::RootResolver;
use pdf_sizes_shared_kernel::PresentationError;
use pdf_sizes_usecase::ListPdfSizes;

use crate::{config::Config, output};

/// How a run that produced output ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Complete,
    /// Some entries could not be read and were left out.
    Partial,
}

pub fn run(config: &Config) -> Result<RunStatus> {
    let resolver = ProgramDirResolver::new();
    let root = resolver.resolve(config.root.as_deref()).context("cannot resolve scan root")?;
    resolver.enter(&root).context("cannot enter scan root")?;
    tracing::info!(root = %root.display(), pattern = config.pattern.pattern(), "scanning");

    let enumerator = WalkFileEnumerator::new();
    let listing = ListPdfSizes::new(&enumerator, config.sort)
        .run(&config.scan_plan(root))
        .context("scan failed")?;

    let mut out = BufWriter::new(io::stdout().lock());
    let written = output::emit(&listing, config, &Local::now(), &mut out)
        .and_then(|()| out.flush().map_err(PresentationError::Write));
    match written {
        Err(PresentationError::Write(err)) if err.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed early");
        }
        other => other.context("cannot write listing")?,
    }

    output::report_skipped(&listing, &mut io::stderr().lock()).context("cannot report skipped entries")?;

    Ok(if listing.is_complete() { RunStatus::Complete } else { RunStatus::Partial })
}
