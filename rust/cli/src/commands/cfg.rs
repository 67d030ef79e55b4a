//! Configuration command handler.
//!
//! Prints every setting with the layer it was taken from.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "difficulty": {
//!     "value": "hard",
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command: pretty JSON of `resolved` on `out`.
pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "difficulty": {
            "value": config.difficulty,
            "source": sources.difficulty,
        },
        "bot_delay_ms": {
            "value": config.bot_delay_ms,
            "source": sources.bot_delay_ms,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigSources, ValueSource};
    use callbreak_engine::bot::Difficulty;

    #[test]
    fn test_cfg_displays_value_and_source_per_key() {
        let resolved = ConfigResolved {
            config: Config {
                seed: Some(42),
                difficulty: Difficulty::Hard,
                bot_delay_ms: 0,
            },
            sources: ConfigSources {
                seed: ValueSource::File,
                difficulty: ValueSource::Env,
                bot_delay_ms: ValueSource::Default,
            },
        };
        let mut out = Vec::new();
        handle_cfg_command(&resolved, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["seed"]["value"], 42);
        assert_eq!(json["seed"]["source"], "file");
        assert_eq!(json["difficulty"]["value"], "hard");
        assert_eq!(json["difficulty"]["source"], "env");
        assert_eq!(json["bot_delay_ms"]["value"], 0);
        assert_eq!(json["bot_delay_ms"]["source"], "default");
        assert!(output.contains("\n  "), "output should be pretty-printed");
    }
}
