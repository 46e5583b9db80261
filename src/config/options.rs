// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::file::looks_like_dir_hint;

/// Everything one conversion run needs. Built once by the caller and passed
/// by reference into `runner::run`; nothing reads configuration from globals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub input: PathBuf,
    pub export: ExportOptions,
    /// Rows shown in the `[SAMPLE DATA]` preview.
    pub sample_rows: usize,
    /// Print `[OK]` progress lines and per-row `[WARN]` lines.
    pub verbose: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            export: ExportOptions::default(),
            sample_rows: DEFAULT_SAMPLE_ROWS,
            verbose: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
    pub fn label(&self) -> &'static str {
        match self { ExportFormat::Csv => "CSV", ExportFormat::Tsv => "TSV" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// Final file path. A user-supplied extension wins; otherwise the format picks it.
    pub fn out_path(&self) -> PathBuf {
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        match &self.out_path.ext {
            Some(ext) => name.push(ext),
            None => name.push(self.format.ext()),
        }
        self.out_path.dir.join(name)
    }

    /// Parse user text into dir + stem (+ optional extension).
    /// A trailing separator or an existing directory means "write the default file in here".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = OutputPath::default();
            return;
        }

        let p = Path::new(s);
        if looks_like_dir_hint(p) || p.is_dir() {
            self.out_path = OutputPath {
                dir: p.to_path_buf(),
                file_stem: OsString::from(DEFAULT_FILE),
                ext: None,
            };
            return;
        }

        self.out_path = OutputPath {
            dir: p.parent().map(Path::to_path_buf).unwrap_or_default(),
            file_stem: p
                .file_stem()
                .map(|s| s.to_os_string())
                .unwrap_or_else(|| OsString::from(DEFAULT_FILE)),
            ext: p.extension().map(|e| e.to_os_string()),
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
