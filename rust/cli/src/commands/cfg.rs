//! `cfg`: prints the resolved configuration as JSON, each value paired with
//! its source (`default`, `file`, `env` or `cli`).
//!
//! ```json
//! {
//!   "starting_bankroll": { "value": 1000, "source": "default" },
//!   "mode": { "value": "deck", "source": "env" },
//!   ...
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_bankroll": {
            "value": config.starting_bankroll,
            "source": sources.starting_bankroll,
        },
        "mode": {
            "value": config.mode,
            "source": sources.mode,
        },
        "decks": {
            "value": config.decks,
            "source": sources.decks,
        },
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
