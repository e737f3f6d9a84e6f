//! CLI module - Command-line interface definitions and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::backends::scan::{run_scan, ScanConfig};
use crate::backends::walk::WalkMode;
use crate::core::file_reader::ReadPolicy;
use crate::core::paths::normalize_suffix;
use crate::core::render::{OutputFormat, RenderConfig};

/// featscan - inventory feature-flag references across a source tree.
#[derive(Parser, Debug)]
#[command(name = "featscan")]
#[command(
    author,
    version,
    about,
    long_about = r#"featscan walks ROOT, reads every file whose extension is allowed
(default: rb), and collects the flags referenced as

    License.feature_available?(:flag_name)

The unique flag names are sorted and written to OUTPUT, one per line.
OUTPUT is overwritten on every run. Progress is logged to stderr.

Examples:
    featscan ./app features.txt
    featscan . features.txt --suffix rb --suffix rake
    featscan . features.json --format json --pretty
"#
)]
pub struct Cli {
    /// Directory (or single file) to scan.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// File to write the sorted feature list to.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Allowed file extension (repeatable).
    #[arg(
        short,
        long = "suffix",
        value_name = "EXT",
        default_value = "rb",
        long_help = "File extension to scan, compared case-sensitively against the text after\n\
the last '.' of each file name. A leading dot is ignored.\n\n\
Repeat the flag to allow several extensions. Defaults to rb."
    )]
    pub suffixes: Vec<String>,

    /// Honor .gitignore and .ignore files while walking.
    #[arg(
        long,
        long_help = "Skip entries excluded by .gitignore, .ignore and git exclude files.\n\n\
By default every entry under ROOT is visited, ignored ones included."
    )]
    pub gitignore: bool,

    /// Warn and skip files that cannot be read as UTF-8 text.
    #[arg(
        long,
        long_help = "By default a file that cannot be opened or is not valid UTF-8 aborts the\n\
whole run and OUTPUT is left untouched. With this flag such files are logged as\n\
warnings and skipped instead."
    )]
    pub skip_unreadable: bool,

    /// Output format (lines/json).
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines, value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Quiet mode (errors only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (per-file diagnostics).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the scan configuration from parsed flags
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            suffixes: self.suffixes.iter().map(|s| normalize_suffix(s)).collect(),
            walk_mode: if self.gitignore {
                WalkMode::GitIgnore
            } else {
                WalkMode::Plain
            },
            read_policy: if self.skip_unreadable {
                ReadPolicy::Skip
            } else {
                ReadPolicy::Abort
            },
            render: RenderConfig::with_pretty(self.format, self.pretty),
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.scan_config();
    run_scan(&cli.root, &cli.output, &config)?;
    Ok(())
}
