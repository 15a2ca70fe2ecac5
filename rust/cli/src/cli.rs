//! Command-line definitions parsed with clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Mode, Overrides};

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    version,
    about = "Single-player Blackjack against the house"
)]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session on stdin
    Play(PlayArgs),
    /// Deal one round from a fresh shoe and show the initial hands
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Summarize a round history file (.jsonl or .jsonl.zst) or directory
    Stats {
        #[arg(long)]
        input: PathBuf,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Stop when the shoe runs low (deck) or after a number of rounds
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    /// Decks in the shoe for deck mode
    #[arg(long)]
    pub decks: Option<u8>,
    /// Rounds to play in rounds mode
    #[arg(long)]
    pub rounds: Option<u32>,
    /// Starting bankroll in whole units
    #[arg(long)]
    pub bankroll: Option<u64>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Append every settled round to this JSONL file
    #[arg(long)]
    pub history: Option<PathBuf>,
}

impl PlayArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            starting_bankroll: self.bankroll,
            mode: self.mode,
            decks: self.decks,
            rounds: self.rounds,
            seed: self.seed,
        }
    }
}
