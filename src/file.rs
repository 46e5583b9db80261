// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter},
    path::{Path, PathBuf},
};

use tracing::{debug, error};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::{read_players, write_players};
use crate::data::PlayerRecord;
use crate::error::{Error, Result};
use crate::progress::{Progress, Tag};

/* ---------------- Loader ---------------- */

/// Read the whole dump as UTF-8 text.
pub fn load_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| {
        error!(path = %path.display(), %source, "input read failed");
        if source.kind() == io::ErrorKind::NotFound {
            Error::InputNotFound { path: path.to_path_buf() }
        } else {
            Error::Read { path: path.to_path_buf(), source }
        }
    })?;

    let text = String::from_utf8(bytes).map_err(|_| Error::Decode { path: path.to_path_buf() })?;
    debug!(path = %path.display(), chars = text.chars().count(), "input loaded");
    Ok(text)
}

/* ---------------- Exporter ---------------- */

/// Write the roster table to `export.out_path()`, creating parent dirs.
/// Returns the final path written to.
pub fn export_players(
    records: &[PlayerRecord],
    export: &ExportOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<PathBuf> {
    let path = export.out_path();

    if records.is_empty() {
        if let Some(p) = progress {
            p.report(Tag::Warning, "No players to export; writing an empty table");
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path).map_err(|source| Error::Write { path: path.clone(), source })?;
    write_players(
        BufWriter::new(file),
        records,
        export.format.delim(),
        export.include_headers,
    )
    .map_err(|e| write_err(&path, e))?;

    debug!(path = %path.display(), rows = records.len(), "export written");
    Ok(path)
}

/// Read an export produced by `export_players` back into records.
pub fn read_export(path: &Path, format: ExportFormat, has_headers: bool) -> Result<Vec<PlayerRecord>> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            Error::InputNotFound { path: path.to_path_buf() }
        } else {
            Error::Read { path: path.to_path_buf(), source }
        }
    })?;
    Ok(read_players(BufReader::new(file), format.delim(), has_headers)?)
}

fn write_err(path: &Path, e: ::csv::Error) -> Error {
    if !e.is_io_error() {
        return Error::Csv(e);
    }
    match e.into_kind() {
        ::csv::ErrorKind::Io(source) => Error::Write { path: path.to_path_buf(), source },
        _ => Error::Write { path: path.to_path_buf(), source: io::Error::other("write failed") },
    }
}

/* ---------------- Paths ---------------- */

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory { path: dir.to_path_buf() });
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| Error::Write { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
