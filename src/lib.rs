// src/lib.rs
//! Plaintext NBA roster dump → CSV/TSV table.
//!
//! Pipeline: `file::load_input` → `specs::players::clean_lines` →
//! `specs::players::extract_players` → `file::export_players`, sequenced by
//! `runner::run`.

pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod progress;
pub mod runner;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use data::PlayerRecord;
pub use error::{Error, Result};
