use serde::{Deserialize, Serialize};
use std::fs;

use blackjack_engine::deck::MAX_DECKS;
use blackjack_engine::session::{GameMode, MAX_BANKROLL, MAX_ROUNDS};

/// How a session decides when to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Play until the shoe is nearly exhausted
    Deck,
    /// Play a fixed number of rounds
    Rounds,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_bankroll: u64,
    pub mode: Mode,
    pub decks: u8,
    pub rounds: u32,
    pub seed: Option<u64>,
}

impl Config {
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            Mode::Deck => GameMode::UntilDeckLow { decks: self.decks },
            Mode::Rounds => GameMode::FixedRounds {
                rounds: self.rounds,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_bankroll: ValueSource,
    pub mode: ValueSource,
    pub decks: ValueSource,
    pub rounds: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_bankroll: ValueSource::Default,
            mode: ValueSource::Default,
            decks: ValueSource::Default,
            rounds: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_bankroll: 1_000,
            mode: Mode::Deck,
            decks: 1,
            rounds: 10,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Command-line values that take precedence over file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub starting_bankroll: Option<u64>,
    pub mode: Option<Mode>,
    pub decks: Option<u8>,
    pub rounds: Option<u32>,
    pub seed: Option<u64>,
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_sources_from(&|key: &str| std::env::var(key).ok(), &Overrides::default())
}

/// Resolves configuration from defaults, the TOML file named by
/// `BLACKJACK_CONFIG`, `BLACKJACK_*` variables and finally `overrides`.
/// `lookup` reads environment variables.
pub fn load_with_sources_from(
    lookup: &dyn Fn(&str) -> Option<String>,
    overrides: &Overrides,
) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = lookup("BLACKJACK_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_bankroll {
            cfg.starting_bankroll = v;
            sources.starting_bankroll = ValueSource::File;
        }
        if let Some(v) = f.mode {
            cfg.mode = v;
            sources.mode = ValueSource::File;
        }
        if let Some(v) = f.decks {
            cfg.decks = v;
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(v) = lookup("BLACKJACK_BANKROLL")
        && !v.is_empty()
    {
        cfg.starting_bankroll = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bankroll".into()))?;
        sources.starting_bankroll = ValueSource::Env;
    }
    if let Some(v) = lookup("BLACKJACK_MODE")
        && !v.is_empty()
    {
        cfg.mode = parse_mode(&v).ok_or_else(|| ConfigError::Invalid("Invalid mode".into()))?;
        sources.mode = ValueSource::Env;
    }
    if let Some(v) = lookup("BLACKJACK_DECKS")
        && !v.is_empty()
    {
        cfg.decks = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid decks".into()))?;
        sources.decks = ValueSource::Env;
    }
    if let Some(v) = lookup("BLACKJACK_ROUNDS")
        && !v.is_empty()
    {
        cfg.rounds = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid rounds".into()))?;
        sources.rounds = ValueSource::Env;
    }
    if let Some(v) = lookup("BLACKJACK_SEED")
        && !v.is_empty()
    {
        cfg.seed = Some(
            v.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    if let Some(v) = overrides.starting_bankroll {
        cfg.starting_bankroll = v;
        sources.starting_bankroll = ValueSource::Cli;
    }
    if let Some(v) = overrides.mode {
        cfg.mode = v;
        sources.mode = ValueSource::Cli;
    }
    if let Some(v) = overrides.decks {
        cfg.decks = v;
        sources.decks = ValueSource::Cli;
    }
    if let Some(v) = overrides.rounds {
        cfg.rounds = v;
        sources.rounds = ValueSource::Cli;
    }
    if let Some(v) = overrides.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Cli;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_bankroll: Option<u64>,
    #[serde(default)]
    mode: Option<Mode>,
    #[serde(default)]
    decks: Option<u8>,
    #[serde(default)]
    rounds: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_bankroll == 0 || cfg.starting_bankroll > MAX_BANKROLL {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_bankroll must be between 1 and {}",
            MAX_BANKROLL
        )));
    }
    if cfg.decks == 0 || cfg.decks > MAX_DECKS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: decks must be between 1 and {}",
            MAX_DECKS
        )));
    }
    if cfg.rounds == 0 || cfg.rounds > MAX_ROUNDS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: rounds must be between 1 and {}",
            MAX_ROUNDS
        )));
    }
    Ok(())
}

fn parse_mode(s: &str) -> Option<Mode> {
    match s.to_ascii_lowercase().as_str() {
        "d" | "deck" => Some(Mode::Deck),
        "r" | "rounds" => Some(Mode::Rounds),
        _ => None,
    }
}
