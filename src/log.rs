// src/log.rs
//! Diagnostic log setup for the binary.
//!
//! The tagged console lines come from `progress::ConsoleProgress`; this is the
//! `tracing` side. With a log file everything this crate emits at `debug` and
//! above lands in the file with an uptime stamp. Without one, only errors reach
//! stderr unless `RUST_LOG` says otherwise.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

const FILE_FILTER: &str = "nba_scrape=debug";
const STDERR_FILTER: &str = "error";

pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let installed = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(FILE_FILTER));
            fmt()
                .with_env_filter(filter)
                .with_timer(fmt::time::uptime())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(STDERR_FILTER));
            fmt()
                .with_env_filter(filter)
                .with_timer(fmt::time::uptime())
                .with_writer(io::stderr)
                .try_init()
        }
    };

    // Only the first subscriber wins; later calls (several tests in one process) keep it.
    if let Err(e) = installed {
        debug!(error = %e, "tracing subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_first_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("nested").join("run.log");

        init(None).unwrap();
        init(Some(&log)).unwrap();
        assert!(log.exists());
    }
}
