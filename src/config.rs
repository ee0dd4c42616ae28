//! Runtime settings read from the environment (and a `.env` file, if any).

use crate::models::Notation;
use std::str::FromStr;

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Format used to print network information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Notation `convert` reads its input in (`IPCALC_NOTATION`).
    pub notation: Notation,
    /// Output format for `info` (`IPCALC_OUTPUT`).
    pub output: OutputFormat,
    /// log4rs config path (`IPCALC_LOG_CONFIG`).
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notation: Notation::Decimal,
            output: OutputFormat::Text,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Read settings from the process environment.
    ///
    /// Returns the settings and one message per rejected value. Nothing is
    /// logged here since the logger is configured from these settings.
    pub fn from_env() -> (Config, Vec<String>) {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults on bad values.
    pub fn from_lookup<F>(lookup: F) -> (Config, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let mut rejected = Vec::new();
        let config = Config {
            notation: parse_or_default(
                "IPCALC_NOTATION",
                lookup("IPCALC_NOTATION"),
                defaults.notation,
                &mut rejected,
            ),
            output: parse_or_default(
                "IPCALC_OUTPUT",
                lookup("IPCALC_OUTPUT"),
                defaults.output,
                &mut rejected,
            ),
            log_config: lookup("IPCALC_LOG_CONFIG")
                .filter(|path| !path.trim().is_empty())
                .unwrap_or(defaults.log_config),
        };
        (config, rejected)
    }
}

fn parse_or_default<T>(
    key: &str,
    value: Option<String>,
    default: T,
    rejected: &mut Vec<String>,
) -> T
where
    T: FromStr<Err = String>,
{
    match value {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            rejected.push(format!("Ignoring {key}={raw}: {e}"));
            default
        }),
    }
}
