mod helpers;

use std::fs;

use blackjack_engine::logger::RoundRecord;
use helpers::{run_cli, ONE_ROUND_STANDING};

fn record_rounds(path: &std::path::Path, seeds: &[&str]) {
    for seed in seeds {
        let res = run_cli(
            &[
                "play",
                "--mode",
                "rounds",
                "--rounds",
                "1",
                "--seed",
                seed,
                "--history",
                path.to_str().unwrap(),
            ],
            ONE_ROUND_STANDING,
        );
        assert_eq!(res.exit_code, 0, "{}", res.stderr);
    }
}

#[test]
fn play_history_feeds_stats() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hist").join("rounds.jsonl");
    record_rounds(&path, &["10", "11", "12"]);

    let content = fs::read_to_string(&path).unwrap();
    let records: Vec<RoundRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.ts.is_some()));
    assert_eq!(records[0].seed, Some(10));

    let res = run_cli(&["stats", "--input", path.to_str().unwrap()], "");
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stdout.contains("Rounds: 3"));
    let wagered: i64 = records.iter().map(|r| r.wagered().cents()).sum();
    let expected = format!(
        "Total wagered: {}",
        blackjack_engine::money::Money::from_cents(wagered)
    );
    assert!(res.stdout.contains(&expected), "{}", res.stdout);
}

#[test]
fn stats_reads_compressed_directory() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("a.jsonl");
    record_rounds(&plain, &["20"]);
    let compressed = zstd::bulk::compress(&fs::read(&plain).unwrap(), 3).unwrap();
    fs::write(dir.path().join("b.jsonl.zst"), compressed).unwrap();
    fs::write(dir.path().join("c.jsonl"), "{broken\n").unwrap();

    let res = run_cli(&["stats", "--input", dir.path().to_str().unwrap()], "");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Rounds: 2"));
    assert!(res.stdout.contains("Skipped lines: 1"));
    assert!(res.stderr.contains("c.jsonl:1"));
}
