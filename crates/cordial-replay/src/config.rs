//! Replay configuration, read from the environment.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use cordial_core::session::ShardInfo;

use crate::error::AppError;

/// Where event records are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Multi-line, human readable.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(AppError::Config(format!(
                "REPLAY_LOG_FORMAT must be json or pretty, got {other:?}"
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Pretty => f.write_str("pretty"),
        }
    }
}

/// Settings for one replay run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where to read records from.
    pub input: Input,
    /// Log output format.
    pub log_format: LogFormat,
    /// Abort on the first line that fails to decode.
    pub strict: bool,
    /// Shard stamped into the replay session.
    pub shard: ShardInfo,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable or `None` if it is unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = match lookup("REPLAY_INPUT") {
            None => Input::Stdin,
            Some(path) if path == "-" => Input::Stdin,
            Some(path) => Input::File(PathBuf::from(path)),
        };
        let log_format = lookup("REPLAY_LOG_FORMAT")
            .map_or(Ok(LogFormat::Json), |value| value.parse())?;
        let strict = lookup("REPLAY_STRICT")
            .map_or(Ok(false), |value| parse_bool("REPLAY_STRICT", &value))?;
        let shard_id = parse_u32(&lookup, "REPLAY_SHARD_ID", 0)?;
        let shard_total = parse_u32(&lookup, "REPLAY_SHARD_TOTAL", 1)?;
        let shard = ShardInfo::new(shard_id, shard_total)
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            input,
            log_format,
            strict,
            shard,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, AppError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(AppError::Config(format!("{key} must be a boolean, got {value:?}"))),
    }
}

fn parse_u32<F>(lookup: &F, key: &str, default: u32) -> Result<u32, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .parse()
            .map_err(|e| AppError::Config(format!("{key} must be a valid u32: {e}")))
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(
            config,
            Config {
                input: Input::Stdin,
                log_format: LogFormat::Json,
                strict: false,
                shard: ShardInfo::SINGLE,
            }
        );
    }

    #[test]
    fn test_reads_every_variable() {
        let config = config_from(&[
            ("REPLAY_INPUT", "/var/log/gateway.jsonl"),
            ("REPLAY_LOG_FORMAT", "Pretty"),
            ("REPLAY_STRICT", "true"),
            ("REPLAY_SHARD_ID", "2"),
            ("REPLAY_SHARD_TOTAL", "4"),
        ])
        .unwrap();

        assert_eq!(config.input, Input::File(PathBuf::from("/var/log/gateway.jsonl")));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.strict);
        assert_eq!(config.shard.to_string(), "[2 / 4]");
    }

    #[test]
    fn test_dash_means_stdin() {
        let config = config_from(&[("REPLAY_INPUT", "-")]).unwrap();

        assert_eq!(config.input, Input::Stdin);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            config_from(&[("REPLAY_LOG_FORMAT", "xml")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("REPLAY_STRICT", "maybe")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("REPLAY_SHARD_ID", "-1")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("REPLAY_SHARD_ID", "3"), ("REPLAY_SHARD_TOTAL", "3")]),
            Err(AppError::Config(_))
        ));
    }
}
