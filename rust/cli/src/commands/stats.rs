//! Aggregates a round history written by `play --history`.
//!
//! Accepts a single `.jsonl` / `.jsonl.zst` file or a directory of them.
//! Lines that fail to parse are reported on stderr and skipped.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, FixedOffset};

use blackjack_engine::logger::RoundRecord;
use blackjack_engine::money::Money;
use blackjack_engine::round::Outcome;

use crate::error::CliError;
use crate::io_utils::{history_files, read_text_auto};
use crate::parse_json_or_continue;
use crate::ui;

#[derive(Debug, Default, PartialEq, Eq)]
struct HistoryStats {
    rounds: u64,
    hands: u64,
    won: u64,
    lost: u64,
    tied: u64,
    surrendered: u64,
    insured: u64,
    wagered: Money,
    returned: Money,
    skipped: u64,
    first: Option<DateTime<FixedOffset>>,
    last: Option<DateTime<FixedOffset>>,
}

impl HistoryStats {
    fn add(&mut self, record: &RoundRecord) {
        self.rounds += 1;
        self.hands += record.hands.len() as u64;
        for outcome in &record.outcomes {
            match outcome {
                Outcome::Won => self.won += 1,
                Outcome::Lost => self.lost += 1,
                Outcome::Tied => self.tied += 1,
                Outcome::Surrendered => self.surrendered += 1,
            }
        }
        if !record.insurance.is_zero() {
            self.insured += 1;
        }
        self.wagered += record.wagered();
        self.returned += record.winnings;
        if let Some(ts) = record
            .ts
            .as_deref()
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
        {
            self.first = Some(self.first.map_or(ts, |f| f.min(ts)));
            self.last = Some(self.last.map_or(ts, |l| l.max(ts)));
        }
    }
}

pub fn handle_stats_command(
    input: &Path,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let files = history_files(input).map_err(CliError::InvalidInput)?;
    let mut stats = HistoryStats::default();
    for file in &files {
        let content = match read_text_auto(file) {
            Ok(c) => c,
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", file.display(), e))?;
                return Err(CliError::InvalidInput(format!(
                    "cannot read {}",
                    file.display()
                )));
            }
        };
        consume(&content, &file.display().to_string(), &mut stats, err)?;
    }
    write_report(&stats, out)
}

fn consume(
    content: &str,
    name: &str,
    stats: &mut HistoryStats,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let context = format!("{}:{}", name, i + 1);
        let record: RoundRecord = parse_json_or_continue!(line, err, context, stats.skipped);
        stats.add(&record);
    }
    Ok(())
}

fn write_report(stats: &HistoryStats, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Rounds: {}", stats.rounds)?;
    writeln!(out, "Hands: {}", stats.hands)?;
    writeln!(out, "Won: {}", stats.won)?;
    writeln!(out, "Lost: {}", stats.lost)?;
    writeln!(out, "Pushed: {}", stats.tied)?;
    writeln!(out, "Surrendered: {}", stats.surrendered)?;
    writeln!(out, "Insured rounds: {}", stats.insured)?;
    writeln!(out, "Total wagered: {}", stats.wagered)?;
    writeln!(out, "Total returned: {}", stats.returned)?;
    writeln!(out, "Net: {}", stats.returned - stats.wagered)?;
    if let (Some(first), Some(last)) = (stats.first, stats.last) {
        writeln!(out, "Played: {} to {}", first.to_rfc3339(), last.to_rfc3339())?;
    }
    if stats.skipped > 0 {
        writeln!(out, "Skipped lines: {}", stats.skipped)?;
    }
    Ok(())
}
