// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{DEFAULT_INPUT, DEFAULT_SAMPLE_ROWS, ENV_INPUT, ENV_LOG, ENV_OUT};
use crate::config::options::{AppOptions, ExportFormat};
use crate::progress::{ConsoleProgress, Progress, Tag};
use crate::runner;

/// Convert a plaintext NBA roster dump into a CSV/TSV table.
#[derive(Parser, Debug)]
#[command(name = "nba_scrape", version, about)]
pub struct Args {
    /// Roster dump to read
    #[arg(short, long, env = ENV_INPUT, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output file, or a directory (trailing separator) to write the default file into
    #[arg(short, long, env = ENV_OUT)]
    pub out: Option<String>,

    /// Output delimiter
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Omit the header row
    #[arg(long)]
    pub no_headers: bool,

    /// Rows to show in the sample preview (0 = none)
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_ROWS)]
    pub sample: usize,

    /// Only print warnings, errors and the final result
    #[arg(short, long)]
    pub quiet: bool,

    /// Append tracing diagnostics to this file
    #[arg(long, env = ENV_LOG)]
    pub log: Option<PathBuf>,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions {
            input: self.input.clone(),
            sample_rows: self.sample,
            verbose: !self.quiet,
            ..AppOptions::default()
        };
        opts.export.format = self.format;
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        }
        opts
    }
}

/// Parse the process arguments, run once, return the exit code.
pub fn run() -> color_eyre::Result<i32> {
    run_with_args(Args::parse())
}

pub fn run_with_args(args: Args) -> color_eyre::Result<i32> {
    crate::log::init(args.log.as_deref())?;

    let opts = args.to_options();
    let mut console = ConsoleProgress::new(opts.verbose);

    match runner::run(&opts, Some(&mut console)) {
        Ok(summary) => Ok(summary.exit_code()),
        Err(e) => {
            console.report(Tag::Fatal, &format!("Fatal error: {e}"));
            console.rule();
            Ok(1)
        }
    }
}
