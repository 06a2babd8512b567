//! Run configuration for the terminal binary, read from the environment.

use std::env;

use log::LevelFilter;

use crate::types::FRAME_MS;

/// Settings that shape one run of the game.
///
/// Game rules live in [`crate::types::Rules`]; this only covers the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Seed for shape selection. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Target frame length in milliseconds.
    pub frame_ms: u32,
    /// Log file. `None` disables logging (the terminal is in raw mode).
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: FRAME_MS,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl RunConfig {
    /// Read `BLOCKFALL_SEED`, `BLOCKFALL_FRAME_MS`, `BLOCKFALL_LOG_PATH` and
    /// `BLOCKFALL_LOG_LEVEL`. Missing or malformed values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let frame_ms = lookup("BLOCKFALL_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|ms: &u32| *ms > 0)
            .unwrap_or(defaults.frame_ms);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            seed,
            frame_ms,
            log_path,
            log_level,
        }
    }
}
