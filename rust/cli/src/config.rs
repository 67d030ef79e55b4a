//! Layered CLI settings.
//!
//! Resolution order, lowest to highest: built-in defaults, the TOML file named
//! by `CALLBREAK_CONFIG`, then `CALLBREAK_SEED`, `CALLBREAK_DIFFICULTY` and
//! `CALLBREAK_BOT_DELAY_MS`. Command-line flags are applied on top by the
//! command handlers. Every value remembers where it came from so `cfg` can
//! report it.

use callbreak_engine::bot::Difficulty;
use serde::{Deserialize, Serialize};
use std::fs;

/// Longest accepted pause before a bot card, in milliseconds.
pub const MAX_BOT_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub difficulty: Difficulty,
    pub bot_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            difficulty: Difficulty::Medium,
            bot_delay_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub difficulty: ValueSource,
    pub bot_delay_ms: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            difficulty: ValueSource::Default,
            bot_delay_ms: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("CALLBREAK_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.difficulty {
            cfg.difficulty = v;
            sources.difficulty = ValueSource::File;
        }
        if let Some(v) = f.bot_delay_ms {
            cfg.bot_delay_ms = v;
            sources.bot_delay_ms = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("CALLBREAK_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(difficulty) = std::env::var("CALLBREAK_DIFFICULTY")
        && !difficulty.is_empty()
    {
        cfg.difficulty = difficulty.parse().map_err(ConfigError::Invalid)?;
        sources.difficulty = ValueSource::Env;
    }
    if let Ok(delay) = std::env::var("CALLBREAK_BOT_DELAY_MS")
        && !delay.is_empty()
    {
        cfg.bot_delay_ms = delay
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid bot delay '{}'", delay)))?;
        sources.bot_delay_ms = ValueSource::Env;
    }

    validate(&cfg)?;
    tracing::debug!(?cfg, ?sources, "configuration resolved");
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    bot_delay_ms: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.bot_delay_ms > MAX_BOT_DELAY_MS {
        return Err(ConfigError::Invalid(format!(
            "bot_delay_ms must be <= {}",
            MAX_BOT_DELAY_MS
        )));
    }
    Ok(())
}
