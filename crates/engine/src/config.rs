//! Runtime configuration read from environment variables.
//!
//! - `BLOCKFALL_SEED`: u64 seed for a reproducible piece sequence
//! - `BLOCKFALL_FRAME_MS`: control loop frame length (default 16)
//! - `BLOCKFALL_LOG_PATH`: write logs to this file (unset or empty disables logging)
//! - `BLOCKFALL_LOG_LEVEL`: error, warn, info, debug or trace (default info)
//!
//! Values that fail to parse fall back to their defaults.

use log::LevelFilter;

use crate::core::RandomPieces;

/// Default frame length (~60 FPS)
pub const DEFAULT_FRAME_MS: u32 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u64>,
    pub frame_ms: u32,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: DEFAULT_FRAME_MS,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by `from_env` and tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let frame_ms = lookup("BLOCKFALL_FRAME_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|ms| ms.max(1))
            .unwrap_or(defaults.frame_ms);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| s.trim().parse::<LevelFilter>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            seed,
            frame_ms,
            log_path,
            log_level,
        }
    }

    /// Piece source for this configuration: seeded if a seed is set
    pub fn piece_source(&self) -> RandomPieces {
        match self.seed {
            Some(seed) => RandomPieces::new(seed),
            None => RandomPieces::from_entropy(),
        }
    }
}
