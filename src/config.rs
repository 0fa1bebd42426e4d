use serde::{Deserialize, Serialize};

use crate::chess::influence::InfluenceRules;

/// Group size at which an entangled system is unstable and collapses on itself.
pub const DEFAULT_COLLAPSE_THRESHOLD: usize = 8;

/// Move-engine configuration (pure Rust; a host may load it through serde).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// An entanglement group reaching this many elements is measured instead of transformed.
    pub collapse_threshold: usize,

    /// Area-of-influence variant switches.
    pub influence: InfluenceRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            collapse_threshold: DEFAULT_COLLAPSE_THRESHOLD,
            influence: InfluenceRules::default(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collapse_threshold(mut self, threshold: usize) -> Self {
        self.collapse_threshold = threshold;
        self
    }

    pub fn with_queen_same_color_only(mut self, enabled: bool) -> Self {
        self.influence.queen_same_color_only = enabled;
        self
    }
}

/// Per-room configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub engine: EngineConfig,

    /// Seed for the room's measurement RNG; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
