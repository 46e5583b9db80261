// benches/extract.rs
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use nba_scrape::specs::players::{clean_lines, extract_players};

/// Synthetic dump shaped like a full league export: header, then
/// marker / fragments / blank / data row per player.
fn synth_dump(players: usize) -> String {
    let mut s = String::from("Player\tTeam\tNumber\tPos\tHeight\tWeight\tCollege\tCountry\n");
    for i in 0..players {
        s.push_str(&format!(
            "Player {i} Headshot\nPlayer\n\n{i}\n\nT{:02}\t{}\tG\t6-{}\t{}\tCollege {i}\tUSA\n\n",
            i % 30,
            i % 100,
            i % 12,
            180 + i % 80,
        ));
    }
    s
}

fn bench_extract(c: &mut Criterion) {
    let doc = synth_dump(600);

    c.bench_function("clean_lines_600", |b| {
        b.iter(|| black_box(clean_lines(black_box(&doc))).len())
    });

    let lines = clean_lines(&doc);
    c.bench_function("extract_players_600", |b| {
        b.iter(|| {
            let ex = extract_players(black_box(&lines));
            black_box(ex.records.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
