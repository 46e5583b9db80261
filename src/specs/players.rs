// src/specs/players.rs
//! Roster dump reader.
//!
//! Expected shape, repeated per player:
//! ```text
//! LeBron James Headshot        <- marker line
//! LeBron                       <- optional name fragments / blanks
//!
//! James
//!
//! LAL	23	F	6-9	250	None	USA
//! ```
//! The data row is the first tab-bearing line after the marker.

use tracing::{debug, warn};

use crate::core::sanitize::{parse_jersey, strip_marker};
use crate::data::PlayerRecord;

/// Substring that marks a player-name line.
pub const MARKER: &str = "Headshot";

/// Fields a data row must carry: team, number, position, height, weight, college, country.
pub const MIN_FIELDS: usize = 7;

/// Why a marker did not turn into a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    TooFewFields { found: usize },
    /// Marker with no tab-bearing line after it. The player is still dropped,
    /// but unlike the old converter, which lost these without a word, it is
    /// reported like any other skip.
    NoDataRow,
    EmptyName,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::TooFewFields { found } => {
                write!(f, "expected {MIN_FIELDS} tab-separated fields, found {found}")
            }
            SkipReason::NoDataRow => f.write_str("no tab-separated data row before end of input"),
            SkipReason::EmptyName => f.write_str("marker line carries no player name"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skipped {
    /// Index into the cleaned line sequence (data row, or the marker when there is none).
    pub index: usize,
    pub player_name: String,
    /// Offending data row, trimmed. Empty for `NoDataRow`.
    pub row: String,
    pub reason: SkipReason,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<PlayerRecord>,
    pub skipped: Vec<Skipped>,
}

/* ---------- cleaner ---------- */

/// Trim the dump, split into lines and drop a leading "Player … Team" header.
pub fn clean_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.trim().split('\n').collect();
    if lines.first().is_some_and(|first| is_header_line(first)) {
        lines.remove(0);
    }
    debug!(lines = lines.len(), "text cleaned");
    lines
}

fn is_header_line(line: &str) -> bool {
    line.contains("Player") && line.contains("Team")
}

/* ---------- extractor ---------- */

/// Single forward pass: every marker is paired with the next tab-bearing line.
/// Lines between them (blanks, name fragments, even other markers) are passed over.
pub fn extract_players(lines: &[&str]) -> Extraction {
    let mut out = Extraction::default();
    let mut i = 0usize;

    while i < lines.len() {
        let line = lines[i].trim();
        if line.is_empty() || !line.contains(MARKER) {
            i += 1;
            continue;
        }

        let name = strip_marker(line, MARKER);
        let Some(j) = find_data_row(lines, i + 1) else {
            warn!(index = i, player = %name, "marker without data row");
            out.skipped.push(Skipped {
                index: i,
                player_name: name,
                row: String::new(),
                reason: SkipReason::NoDataRow,
            });
            break;
        };

        let row = lines[j].trim();
        match parse_data_row(&name, row) {
            Ok(rec) => out.records.push(rec),
            Err(reason) => {
                warn!(index = j, player = %name, %reason, "data row skipped");
                out.skipped.push(Skipped {
                    index: j,
                    player_name: name,
                    row: row.to_string(),
                    reason,
                });
            }
        }
        i = j + 1;
    }

    debug!(records = out.records.len(), skipped = out.skipped.len(), "extraction done");
    out
}

/// Index of the first line at or after `from` that still holds a tab once trimmed.
fn find_data_row(lines: &[&str], from: usize) -> Option<usize> {
    (from..lines.len()).find(|&j| lines[j].trim().contains('\t'))
}

/// Map one tab-separated row onto a record. Fields past the seventh are ignored.
pub fn parse_data_row(player_name: &str, row: &str) -> Result<PlayerRecord, SkipReason> {
    let parts: Vec<&str> = row.split('\t').map(str::trim).collect();
    if parts.len() < MIN_FIELDS {
        return Err(SkipReason::TooFewFields { found: parts.len() });
    }
    if player_name.is_empty() {
        return Err(SkipReason::EmptyName);
    }

    Ok(PlayerRecord {
        player_name: player_name.to_string(),
        team_code: parts[0].to_string(),
        jersey_number: parse_jersey(parts[1]),
        position: parts[2].to_string(),
        height_feet_inches: parts[3].to_string(),
        weight_pounds: parts[4].to_string(),
        college_name: parts[5].to_string(),
        country_name: parts[6].to_string(),
    })
}
