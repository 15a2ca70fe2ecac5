//! Command handlers, one module per subcommand.
//!
//! Each exposes `handle_COMMAND_command(...) -> Result<(), CliError>` and
//! writes through injected `&mut dyn Write` streams.

mod cfg;
mod deal;
mod play;
mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use stats::handle_stats_command;
