use crate::config::FanoutConfig;
use crate::error::{FanoutError, FanoutResult};
use bidfork_openrtb::{BidRequest, DeepCopy};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One participant's private copy of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Name the snapshot was forked for.
    pub participant: String,
    /// That participant's copy, owned outright.
    pub request: BidRequest,
}

/// Forks a bid request into independent per-participant snapshots.
pub struct Fanout {
    config: FanoutConfig,
    config_path: Option<PathBuf>,
}

impl Default for Fanout {
    fn default() -> Self {
        Self::new(FanoutConfig::default())
    }
}

impl Fanout {
    /// Creates a fan-out with explicit config.
    pub fn new(config: FanoutConfig) -> Self {
        Self {
            config,
            config_path: None,
        }
    }

    /// Loads config from a TOML file.
    /// Falls back to defaults with a warning when the file is missing or invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            info!("No fan-out config found at {:?}, using defaults", path);
            return Self::new(FanoutConfig::default());
        }

        let config = match std::fs::read_to_string(&path) {
            Ok(contents) => match FanoutConfig::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded fan-out config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse fan-out config {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    FanoutConfig::default()
                }
            },
            Err(e) => {
                warn!("Failed to read fan-out config {:?}: {}", path, e);
                FanoutConfig::default()
            }
        };

        Self {
            config,
            config_path: Some(path),
        }
    }

    /// Returns the active config.
    pub fn config(&self) -> &FanoutConfig {
        &self.config
    }

    /// Returns whether a config file was found on disk.
    pub fn has_config_file(&self) -> bool {
        self.config_path.is_some()
    }

    /// Produces one deep copy of `request` per participant, in participant order.
    pub fn fork<S>(&self, request: &BidRequest, participants: &[S]) -> FanoutResult<Vec<Snapshot>>
    where
        S: AsRef<str> + Sync,
    {
        self.fork_with(request, participants, |_, _| {})
    }

    /// Like [`fork`](Self::fork), then runs `customize` on each participant's copy.
    ///
    /// The hook receives the participant name and that participant's snapshot
    /// only. `request` is never modified.
    pub fn fork_with<S, F>(
        &self,
        request: &BidRequest,
        participants: &[S],
        customize: F,
    ) -> FanoutResult<Vec<Snapshot>>
    where
        S: AsRef<str> + Sync,
        F: Fn(&str, &mut BidRequest) + Sync,
    {
        if let Err(e) = self.validate(participants) {
            warn!(request_id = %request.id, "Rejected fan-out: {}", e);
            return Err(e);
        }

        let count = participants.len();
        let parallel = self.config.goes_parallel(count);
        debug!(
            request_id = %request.id,
            participants = count,
            parallel,
            "Forking request"
        );

        let snapshot = |participant: &S| {
            let participant = participant.as_ref();
            let mut copy = request.deep_copy();
            customize(participant, &mut copy);
            Snapshot {
                participant: participant.to_string(),
                request: copy,
            }
        };

        let snapshots: Vec<Snapshot> = if parallel {
            participants.par_iter().map(snapshot).collect()
        } else {
            participants.iter().map(snapshot).collect()
        };
        Ok(snapshots)
    }

    fn validate<S: AsRef<str>>(&self, participants: &[S]) -> FanoutResult<()> {
        if participants.is_empty() {
            return Err(FanoutError::NoParticipants);
        }
        let max = self.config.max_participants;
        if participants.len() > max {
            return Err(FanoutError::TooManyParticipants {
                count: participants.len(),
                max,
            });
        }
        let mut seen = HashSet::with_capacity(participants.len());
        for p in participants {
            if !seen.insert(p.as_ref()) {
                return Err(FanoutError::DuplicateParticipant(p.as_ref().to_string()));
            }
        }
        Ok(())
    }
}
