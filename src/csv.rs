// src/csv.rs
use std::io::{Read, Write};

use ::csv::{ReaderBuilder, WriterBuilder};

use crate::data::{PlayerRecord, COLUMNS};

/* ---------------- Writing ---------------- */

/// Serialize records in insertion order. No row index column; a missing
/// jersey number becomes an empty cell.
pub fn write_players<W: Write>(
    w: W,
    records: &[PlayerRecord],
    sep: u8,
    include_headers: bool,
) -> ::csv::Result<()> {
    // Header is written by hand so an empty table still gets one.
    let mut out = WriterBuilder::new()
        .delimiter(sep)
        .has_headers(false)
        .from_writer(w);

    if include_headers {
        out.write_record(COLUMNS)?;
    }
    for r in records {
        out.serialize(r)?;
    }
    out.flush()?;
    Ok(())
}

/// Whole export as a string (same bytes `write_players` puts on disk).
pub fn to_export_string(
    records: &[PlayerRecord],
    sep: u8,
    include_headers: bool,
) -> ::csv::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_players(&mut buf, records, sep, include_headers)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/* ---------------- Parsing ---------------- */

/// Read an export back. Without headers, columns are taken positionally.
pub fn read_players<R: Read>(r: R, sep: u8, has_headers: bool) -> ::csv::Result<Vec<PlayerRecord>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(sep)
        .has_headers(has_headers)
        .from_reader(r);
    rdr.deserialize().collect()
}

/* ---------------- Preview ---------------- */

/// Fixed-width text table of the first `n` records, with a leading row index.
pub fn preview_table(records: &[PlayerRecord], n: usize) -> String {
    let shown = &records[..n.min(records.len())];
    let rows: Vec<[String; 8]> = shown.iter().map(PlayerRecord::cells).collect();

    let idx_w = shown.len().saturating_sub(1).to_string().len();
    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&" ".repeat(idx_w));
    for (col, w) in COLUMNS.iter().zip(&widths) {
        out.push_str("  ");
        out.push_str(&pad(col, *w));
    }
    for (i, row) in rows.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{i:>idx_w$}"));
        for (cell, w) in row.iter().zip(&widths) {
            out.push_str("  ");
            out.push_str(&pad(cell, *w));
        }
    }
    out.lines().map(str::trim_end).collect::<Vec<_>>().join("\n")
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    let mut out = String::with_capacity(width.max(len));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    out
}
