// tests/export_e2e.rs
use std::fs;
use std::path::Path;

use nba_scrape::config::options::{AppOptions, ExportFormat};
use nba_scrape::file::{export_players, read_export};
use nba_scrape::progress::{RecordingProgress, Tag};
use nba_scrape::runner::{self, RunOutcome};
use nba_scrape::specs::players::{clean_lines, extract_players};

const DUMP: &str = "\
Player\tTeam\tNumber\tPos\tHeight\tWeight\tCollege\tCountry
LeBron James Headshot
LeBron

James

LAL\t23\tF\t6-9\t250\tNone\tUSA

Nikola Jokić Headshot
Nikola

Jokić

DEN\t15\tC\t6-11\t284\t\tSerbia

Jrue Holiday Headshot
Jrue

Holiday

BOS\tG-4\tG\t6-4\t205\tUCLA, Los Angeles\tUSA
";

fn setup(dir: &Path, format: ExportFormat, out: &str) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.input = dir.join("players.txt");
    fs::write(&opts.input, DUMP).unwrap();
    opts.export.format = format;
    opts.export.set_path(dir.join(out).to_str().unwrap());
    opts
}

#[test]
fn csv_round_trip_matches_memory() {
    let dir = tempfile::tempdir().unwrap();
    let opts = setup(dir.path(), ExportFormat::Csv, "nested/deeper/roster.csv");

    let summary = runner::run(&opts, None).unwrap();
    let RunOutcome::Exported(path) = summary.outcome else { panic!("expected export") };
    assert!(path.ends_with("nested/deeper/roster.csv"));

    let in_memory = extract_players(&clean_lines(DUMP)).records;
    let back = read_export(&path, ExportFormat::Csv, true).unwrap();
    assert_eq!(back, in_memory);
    assert_eq!(back.len(), 3);
    assert_eq!(back[2].jersey_number, None);
    assert_eq!(back[1].college_name, "");
}

#[test]
fn header_row_and_column_order() {
    let dir = tempfile::tempdir().unwrap();
    let opts = setup(dir.path(), ExportFormat::Csv, "roster.csv");
    runner::run(&opts, None).unwrap();

    let s = fs::read_to_string(opts.export.out_path()).unwrap();
    let mut lines = s.lines();
    assert_eq!(
        lines.next(),
        Some("player_name,team_code,jersey_number,position,height_feet_inches,weight_pounds,college_name,country_name")
    );
    assert_eq!(lines.next(), Some("LeBron James,LAL,23,F,6-9,250,None,USA"));
    assert_eq!(lines.next(), Some("Nikola Jokić,DEN,15,C,6-11,284,,Serbia"));
    assert_eq!(lines.next(), Some("Jrue Holiday,BOS,,G,6-4,205,\"UCLA, Los Angeles\",USA"));
    assert_eq!(lines.next(), None);
}

#[test]
fn tsv_without_headers_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = setup(dir.path(), ExportFormat::Tsv, "out/roster");
    opts.export.include_headers = false;

    let summary = runner::run(&opts, None).unwrap();
    let RunOutcome::Exported(path) = summary.outcome else { panic!("expected export") };
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("tsv"));

    let back = read_export(&path, ExportFormat::Tsv, false).unwrap();
    assert_eq!(back.len(), 3);
    assert_eq!(back[0].player_name, "LeBron James");
}

#[test]
fn exporter_writes_empty_table_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.export.set_path(dir.path().join("empty.csv").to_str().unwrap());
    let mut rec = RecordingProgress::default();

    let path = export_players(&[], &opts.export, Some(&mut rec)).unwrap();
    assert_eq!(rec.tagged(Tag::Warning).count(), 1);
    assert_eq!(fs::read_to_string(path).unwrap().lines().count(), 1);
}

#[test]
fn output_parent_that_is_a_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a dir").unwrap();
    let opts = setup(dir.path(), ExportFormat::Csv, "blocker/roster.csv");

    let err = runner::run(&opts, None).unwrap_err();
    assert!(matches!(err, nba_scrape::Error::NotADirectory { .. }));
}

#[test]
fn whitespace_only_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let opts = setup(dir.path(), ExportFormat::Csv, "roster.csv");
    fs::write(&opts.input, " \n\t \n").unwrap();

    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.outcome, RunOutcome::AbortedEmpty);
    assert_eq!(summary.exit_code(), 1);
    assert!(!opts.export.out_path().exists());
}

#[test]
fn output_path_taken_by_directory_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let opts = setup(dir.path(), ExportFormat::Csv, "roster.csv");
    fs::create_dir_all(opts.export.out_path()).unwrap();
    let mut rec = RecordingProgress::default();

    let err = runner::run(&opts, Some(&mut rec)).unwrap_err();
    assert!(matches!(err, nba_scrape::Error::Write { .. }));
    assert!(err.to_string().starts_with("Error saving"));
    assert_eq!(rec.tagged(Tag::Error).count(), 1);
}
