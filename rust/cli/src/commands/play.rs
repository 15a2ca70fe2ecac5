//! Interactive play session.
//!
//! Resolves the configuration, builds a shoe and runs rounds through the
//! engine with a [`Console`] collaborator until the session ends, the
//! player declines to bet, or input runs out. Settled rounds can be
//! appended to a JSONL history.

use std::io::{BufRead, Write};

use blackjack_engine::errors::SessionError;
use blackjack_engine::logger::RoundLogger;
use blackjack_engine::money::Money;
use blackjack_engine::presenter::Presenter;
use blackjack_engine::session::{Session, SessionConfig, SessionSummary};

use crate::cli::PlayArgs;
use crate::config;
use crate::console::Console;
use crate::error::CliError;
use crate::ui;

pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved = match config::load_with_sources_from(
        &|key: &str| std::env::var(key).ok(),
        &args.overrides(),
    ) {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };
    let cfg = resolved.config;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut session = Session::new(SessionConfig {
        mode: cfg.game_mode(),
        starting_bankroll: Money::from_whole(cfg.starting_bankroll),
        seed,
    })?;
    let mut logger = match args.history {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    writeln!(out, "Welcome to Blackjack! Seed: {}", seed)?;
    run_session(&mut session, logger.as_mut(), out, err, stdin)?;
    Ok(())
}

/// Plays `session` to its end against the terminal. Input running out
/// mid-round is reported as a warning and still ends with the summary.
pub(crate) fn run_session(
    session: &mut Session,
    logger: Option<&mut RoundLogger>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<SessionSummary, CliError> {
    let mut console = Console::new(stdin, out);
    if let Some(logger) = logger {
        console = console.with_history(logger, session.config().seed);
    }
    match session.play(&mut console) {
        Ok(summary) => Ok(summary),
        Err(SessionError::InputClosed) => {
            tracing::warn!(round = session.rounds_played(), "input closed mid-round");
            ui::display_warning(err, "input closed before the round finished")?;
            let summary = session.summary();
            console.session_finished(&summary)?;
            Ok(summary)
        }
        Err(e) => Err(e.into()),
    }
}
