// src/runner.rs
use std::path::PathBuf;

use tracing::{debug, info_span};

use crate::{
    config::options::AppOptions,
    csv::preview_table,
    data::COLUMNS,
    error::Result,
    file::{export_players, load_input},
    progress::{NullProgress, Progress, Tag},
    specs::players::{clean_lines, extract_players},
};

/// Pipeline position, carried on tracing spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Load,
    Clean,
    Extract,
    Export,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Load => "load",
            Stage::Clean => "clean",
            Stage::Extract => "extract",
            Stage::Export => "export",
        }
    }
}

/// How a run ended when no error was raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Exported(PathBuf),
    /// Nothing matched; no file was written.
    AbortedEmpty,
}

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub records: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn exit_code(&self) -> i32 {
        match self.outcome {
            RunOutcome::Exported(_) => 0,
            RunOutcome::AbortedEmpty => 1,
        }
    }
}

/// Top-level runner: load → clean → extract → export, once.
/// `progress` can be None (silent) or Some(&mut impl Progress).
pub fn run(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    match progress {
        Some(p) => run_with(opts, p),
        None => run_with(opts, &mut NullProgress),
    }
}

fn run_with(opts: &AppOptions, p: &mut dyn Progress) -> Result<RunSummary> {
    p.report(Tag::Start, "NBA Player Scraper Starting...");
    p.rule();

    // Load
    let text = {
        let _span = info_span!("stage", name = Stage::Load.name()).entered();
        match load_input(&opts.input) {
            Ok(t) => t,
            Err(e) => {
                p.report(Tag::Error, &e.to_string());
                return Err(e);
            }
        }
    };
    p.report(Tag::Ok, &format!("Successfully loaded {}", opts.input.display()));
    p.report(Tag::Detail, &format!("File size: {} characters", text.chars().count()));

    // Clean
    let lines = {
        let _span = info_span!("stage", name = Stage::Clean.name()).entered();
        clean_lines(&text)
    };
    p.report(Tag::Ok, "Text cleaned successfully");
    p.report(Tag::Detail, &format!("Total lines to process: {}", lines.len()));

    // Extract
    let extraction = {
        let _span = info_span!("stage", name = Stage::Extract.name()).entered();
        extract_players(&lines)
    };
    for s in &extraction.skipped {
        p.report(
            Tag::Warn,
            &format!("Could not parse line at index {} ({}): {} {:?}", s.index, s.player_name, s.reason, s.row),
        );
    }
    p.report(Tag::Ok, "Pattern matching completed");
    p.report(Tag::Detail, &format!("Found {} player records", extraction.records.len()));

    let records = extraction.records;
    let skipped = extraction.skipped.len();

    if records.is_empty() {
        p.report(Tag::Warning, "No players found. Check the input file format.");
        debug!(skipped, "run aborted: nothing extracted");
        return Ok(RunSummary { outcome: RunOutcome::AbortedEmpty, records: 0, skipped });
    }

    p.report(Tag::Ok, &format!("Validated {} player records", records.len()));
    p.report(Tag::Ok, &format!("Table created with shape: ({}, {})", records.len(), COLUMNS.len()));

    // Export
    let path = {
        let _span = info_span!("stage", name = Stage::Export.name()).entered();
        match export_players(&records, &opts.export, Some(&mut *p)) {
            Ok(path) => path,
            Err(e) => {
                p.report(Tag::Error, &e.to_string());
                return Err(e);
            }
        }
    };
    p.report(
        Tag::Ok,
        &format!("{} saved successfully: {}", opts.export.format.label(), path.display()),
    );
    p.report(Tag::Detail, &format!("Total players exported: {}", records.len()));

    // Sample
    if opts.sample_rows > 0 {
        let shown = opts.sample_rows.min(records.len());
        p.report(Tag::Sample, &format!("First {shown} rows:"));
        p.rule();
        p.block(&preview_table(&records, shown));
        p.rule();
    }

    p.report(Tag::Success, "Process completed successfully!");
    p.rule();

    Ok(RunSummary { outcome: RunOutcome::Exported(path), records: records.len(), skipped })
}
