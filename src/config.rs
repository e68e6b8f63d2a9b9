//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TILES_SEED` | 1 | RNG seed for the first board |
//! | `TILES_WIDTH` | 10 | Board columns (1..=32) |
//! | `TILES_HEIGHT` | 10 | Board rows (1..=32) |
//! | `TILES_FALL_MS` | 90 | Duration of one gravity sweep |
//! | `TILES_REMOVE_MS` | 220 | Duration of a match removal |
//! | `TILES_MERGE_MS` | 400 | Turn tally merging into the total |
//! | `TILES_LOG_PATH` | unset | Write logs to this file |
//!
//! Unset or blank variables take the default. A value that is set but does
//! not parse is an error rather than silently ignored.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::core::Timing;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_GRID_DIM};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid {expected}")]
    Malformed {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{var}={value} is out of range ({min}..={max})")]
    OutOfRange {
        var: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub width: u8,
    pub height: u8,
    pub timing: Timing,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            timing: Timing::default(),
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |var: &str| {
            lookup(var)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = parse(&get, "TILES_SEED", "u32")?.unwrap_or(defaults.seed);
        let width = dimension(&get, "TILES_WIDTH")?.unwrap_or(defaults.width);
        let height = dimension(&get, "TILES_HEIGHT")?.unwrap_or(defaults.height);
        let fall_ms =
            parse(&get, "TILES_FALL_MS", "duration in ms")?.unwrap_or(defaults.timing.fall_ms);
        let remove_ms =
            parse(&get, "TILES_REMOVE_MS", "duration in ms")?.unwrap_or(defaults.timing.remove_ms);
        let merge_ms =
            parse(&get, "TILES_MERGE_MS", "duration in ms")?.unwrap_or(defaults.timing.merge_ms);
        let log_path = get("TILES_LOG_PATH").map(PathBuf::from);

        Ok(Self {
            seed,
            width,
            height,
            timing: Timing {
                fall_ms,
                remove_ms,
                merge_ms,
                ..defaults.timing
            },
            log_path,
        })
    }
}

fn parse<T: FromStr>(
    get: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    match get(var) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Malformed {
                var,
                value,
                expected,
            }),
    }
}

fn dimension(
    get: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
) -> Result<Option<u8>, ConfigError> {
    let Some(n) = parse::<u32>(get, var, "board size")? else {
        return Ok(None);
    };
    if !(1..=MAX_GRID_DIM as u32).contains(&n) {
        return Err(ConfigError::OutOfRange {
            var,
            value: n,
            min: 1,
            max: MAX_GRID_DIM as u32,
        });
    }
    Ok(Some(n as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |var| {
            pairs
                .iter()
                .find(|(k, _)| *k == var)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn unset_means_default() {
        let cfg = GameConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn values_are_read_and_trimmed() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("TILES_SEED", " 42 "),
            ("TILES_WIDTH", "8"),
            ("TILES_HEIGHT", "12"),
            ("TILES_FALL_MS", "0"),
            ("TILES_MERGE_MS", "150"),
            ("TILES_LOG_PATH", "/tmp/tiles.log"),
        ]))
        .unwrap();
        assert_eq!(cfg.seed, 42);
        assert_eq!((cfg.width, cfg.height), (8, 12));
        assert_eq!(cfg.timing.fall_ms, 0);
        assert_eq!(cfg.timing.remove_ms, Timing::default().remove_ms);
        assert_eq!(cfg.timing.merge_ms, 150);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/tiles.log")));
    }

    #[test]
    fn blank_values_fall_back() {
        let cfg = GameConfig::from_lookup(lookup(&[("TILES_SEED", "   "), ("TILES_LOG_PATH", "")])).unwrap();
        assert_eq!(cfg.seed, 1);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = GameConfig::from_lookup(lookup(&[("TILES_SEED", "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { var: "TILES_SEED", .. }));

        let err = GameConfig::from_lookup(lookup(&[("TILES_WIDTH", "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::OutOfRange {
                var: "TILES_WIDTH",
                value: 0,
                min: 1,
                max: 32
            }
        );
        assert_eq!(err.to_string(), "TILES_WIDTH=0 is out of range (1..=32)");

        assert!(GameConfig::from_lookup(lookup(&[("TILES_REMOVE_MS", "-5")])).is_err());
    }
}
