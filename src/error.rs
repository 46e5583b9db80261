// src/error.rs
//! Fatal error taxonomy for a conversion run.
//!
//! Malformed data rows never show up here; they are recovered by the
//! extractor as `SkipReason`s. Everything in this enum aborts the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Input dump does not exist.
    #[error("File '{}' not found", path.display())]
    InputNotFound { path: PathBuf },

    /// Input exists but could not be read.
    #[error("Error reading file '{}': {source}", path.display())]
    Read { path: PathBuf, #[source] source: io::Error },

    /// Input is not valid UTF-8 text.
    #[error("Error reading file '{}': not valid UTF-8 text", path.display())]
    Decode { path: PathBuf },

    /// An output parent path exists but is a regular file.
    #[error("Path exists but is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Creating, writing or flushing the export failed.
    #[error("Error saving '{}': {source}", path.display())]
    Write { path: PathBuf, #[source] source: io::Error },

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
