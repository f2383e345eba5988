//! Fan-out configuration, read from the `[fanout]` section of a TOML file.

use crate::error::{FanoutError, FanoutResult};
use serde::{Deserialize, Serialize};

/// Tunables for [`Fanout`](crate::Fanout).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanoutConfig {
    /// Upper bound on participants per fork.
    #[serde(default = "default_max_participants")]
    pub max_participants: usize,
    /// Whether large forks may copy on the rayon pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Participant count at which a fork goes parallel.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_max_participants() -> usize {
    64
}

fn default_parallel() -> bool {
    true
}

fn default_parallel_threshold() -> usize {
    4
}

impl Default for FanoutConfig {
    fn default() -> Self {
        Self {
            max_participants: default_max_participants(),
            parallel: default_parallel(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl FanoutConfig {
    /// Parses a TOML document. A missing `[fanout]` section yields defaults.
    pub fn from_toml_str(contents: &str) -> FanoutResult<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| FanoutError::Config(e.to_string()))?;
        file.fanout.validate()?;
        Ok(file.fanout)
    }

    /// Checks that the limits are usable.
    pub fn validate(&self) -> FanoutResult<()> {
        if self.max_participants == 0 {
            return Err(FanoutError::Config(
                "max_participants must be at least 1".to_string(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(FanoutError::Config(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns true when a fork of `count` participants should run in parallel.
    pub fn goes_parallel(&self, count: usize) -> bool {
        self.parallel && count >= self.parallel_threshold
    }
}

/// Raw TOML structure of a fan-out config file.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    fanout: FanoutConfig,
}
