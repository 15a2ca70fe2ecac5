use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::Hand;
use crate::money::Money;
use crate::round::{Outcome, Round};

/// One player hand as it stood at settlement.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    pub cards: Vec<Card>,
    pub bet: Money,
    pub score: u32,
    #[serde(default)]
    pub surrendered: bool,
}

impl From<&Hand> for HandRecord {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().to_vec(),
            bet: hand.bet(),
            score: hand.score(),
            surrendered: hand.is_surrendered(),
        }
    }
}

/// Complete record of a settled round, serialized as one JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Seed of the shoe the round was dealt from
    pub seed: Option<u64>,
    pub hands: Vec<HandRecord>,
    pub dealer: Vec<Card>,
    pub outcomes: Vec<Outcome>,
    #[serde(default)]
    pub insurance: Money,
    /// Amount credited back at settlement, stakes included
    pub winnings: Money,
    pub bankroll_after: Money,
    /// Timestamp when the round was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_round(
        round_id: String,
        seed: Option<u64>,
        round: &Round,
        bankroll_after: Money,
    ) -> Self {
        Self {
            round_id,
            seed,
            hands: round
                .hands()
                .iter()
                .filter(|h| !h.is_empty())
                .map(HandRecord::from)
                .collect(),
            dealer: round.dealer().cards().to_vec(),
            outcomes: round.outcomes().to_vec(),
            insurance: round.insurance(),
            winnings: round.winnings(),
            bankroll_after,
            ts: None,
        }
    }

    /// Total staked on the round: hand bets plus insurance.
    pub fn wagered(&self) -> Money {
        self.hands.iter().map(|h| h.bet).sum::<Money>() + self.insurance
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    /// Opens `path` for appending, creating parent directories as needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
