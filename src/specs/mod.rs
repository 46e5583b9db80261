// src/specs/mod.rs
//! # Input “specs” module
//!
//! Each module here knows how to read one kind of source dump: *where the ground truth
//! lives in the text* and *how to pull it out robustly*.
//!
//! ## What lives here
//! - **Pure text parsing** over an in-memory line sequence. No file I/O.
//! - **Marker and delimiter choice** (e.g. a `Headshot` marker line followed by
//!   the first tab-bearing line).
//! - **Per-row results**: a row either becomes a record or a typed skip reason;
//!   nothing is thrown, the caller aggregates.
//!
//! ## What does **not** live here
//! - Loading the input or writing the export (`file`).
//! - Console output (`progress`); specs only emit `tracing` events.
//!
//! ## Typical call chain
//! ```text
//! runner::run → file::load_input → specs::players::clean_lines
//!                                → specs::players::extract_players
//!             → file::export_players
//! ```
pub mod players;
