// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "pdf_sizes",
    version = crate::VERSION,
    about = "List PDF files under the program's directory, smallest first",
    long_about = "Recursively finds regular files named *.pdf below the directory that \
                  contains this program (or --root), and prints them in `ls -lh` style \
                  sorted by exact byte size. Unreadable entries are reported on stderr \
                  and make the exit status 1; fatal errors exit with 2."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Directory to scan instead of the program's own directory
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// File name glob to match
    #[arg(long, default_value = pdf_sizes_domain::pattern::DEFAULT_PATTERN)]
    pub pattern: String,

    /// Match the pattern case-insensitively (`.PDF` counts as `.pdf`)
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Largest first
    #[arg(short, long)]
    pub reverse: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "long")]
    pub format: CliOutputFormat,

    /// Print exact byte counts instead of human-readable sizes in the long format
    #[arg(short, long)]
    pub bytes: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_need_no_arguments() {
        let args = Args::try_parse_from(["pdf_sizes"]).unwrap();
        assert_eq!(args.root, None);
        assert_eq!(args.pattern, "*.pdf");
        assert!(!args.ignore_case);
        assert!(!args.reverse);
        assert!(matches!(args.format, CliOutputFormat::Long));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn flags_parse() {
        let args = Args::try_parse_from([
            "pdf_sizes", "--root", "/srv", "-i", "-r", "--format", "json", "-b", "-vv",
        ])
        .unwrap();
        assert_eq!(args.root, Some(PathBuf::from("/srv")));
        assert!(args.ignore_case && args.reverse && args.bytes);
        assert!(matches!(args.format, CliOutputFormat::Json));
        assert_eq!(args.verbose, 2);
    }
}
