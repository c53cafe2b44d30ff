//! Engine options.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::zobrist::DEFAULT_SEED;

/// Default thinking time per decision
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(2);

/// Hard ceiling on iterative deepening
pub const MAX_DEPTH: u32 = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    UnknownOption { name: String },
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineOptions {
    /// Wall-clock budget for one decision
    pub deadline: Duration,
    /// Seed for the fingerprint key table
    pub seed: u64,
    /// Deepest iteration the driver will start
    pub max_depth: u32,
    /// When false, cache probes always miss
    pub use_cache: bool,
    /// Keep cache entries from one decision to the next
    pub persist_cache: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            deadline: DEFAULT_DEADLINE,
            seed: DEFAULT_SEED,
            max_depth: MAX_DEPTH,
            use_cache: true,
            persist_cache: false,
        }
    }
}

impl EngineOptions {
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth.clamp(1, MAX_DEPTH);
        self
    }

    #[must_use]
    pub fn with_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    #[must_use]
    pub fn with_persistent_cache(mut self, persist_cache: bool) -> Self {
        self.persist_cache = persist_cache;
        self
    }

    /// Set an option by name. Names are case-insensitive; `deadline` is in
    /// seconds and may be fractional.
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let invalid = || OptionError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "deadline" => {
                let secs = value.parse::<f64>().map_err(|_| invalid())?;
                self.deadline = Duration::try_from_secs_f64(secs).map_err(|_| invalid())?;
            }
            "seed" => {
                self.seed = value.parse::<u64>().map_err(|_| invalid())?;
            }
            "max depth" | "maxdepth" | "max_depth" => {
                let depth = value.parse::<u32>().map_err(|_| invalid())?;
                if depth == 0 {
                    return Err(invalid());
                }
                self.max_depth = depth.min(MAX_DEPTH);
            }
            "use cache" | "usecache" | "use_cache" => {
                self.use_cache = parse_bool(value).ok_or_else(invalid)?;
            }
            "persist cache" | "persistcache" | "persist_cache" => {
                self.persist_cache = parse_bool(value).ok_or_else(invalid)?;
            }
            _ => {
                return Err(OptionError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}
