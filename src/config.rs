//! Clustering parameters.
//!
//! Uses Figment to merge serialized defaults + an optional TOML file +
//! `DOC_CLUSTER_*` environment variables.
use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Prefix of environment overrides, e.g. `DOC_CLUSTER_NUM_CLUSTERS=8`.
pub const ENV_PREFIX: &str = "DOC_CLUSTER_";

pub const DEFAULT_NUM_CLUSTERS: usize = 5;
pub const DEFAULT_MAX_DOCUMENTS: usize = 300;
pub const DEFAULT_MAX_VOCAB_SIZE: usize = 1000;
pub const DEFAULT_MIN_TERM_FREQ: u64 = 3;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// k
    pub num_clusters: usize,
    /// corpus cap; documents past it are not part of the run
    pub max_documents: usize,
    pub max_vocab_size: usize,
    /// minimum corpus-wide occurrences of a vocabulary term
    pub min_term_freq: u64,
    /// k-means iteration cap
    pub max_iterations: usize,
    /// `None` draws a fresh seed per run
    pub seed: Option<u64>,
    pub compute_silhouette: bool,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            num_clusters: DEFAULT_NUM_CLUSTERS,
            max_documents: DEFAULT_MAX_DOCUMENTS,
            max_vocab_size: DEFAULT_MAX_VOCAB_SIZE,
            min_term_freq: DEFAULT_MIN_TERM_FREQ,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
            compute_silhouette: true,
        }
    }
}

impl ClusteringConfig {
    /// Provider chain: defaults, then `path` (if any), then environment.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load and validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_figment(Self::figment(path))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("num_clusters", self.num_clusters),
            ("max_documents", self.max_documents),
            ("max_vocab_size", self.max_vocab_size),
            ("max_iterations", self.max_iterations),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(Error::InvalidParameter {
                    name,
                    message: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn with_num_clusters(mut self, num_clusters: usize) -> Self {
        self.num_clusters = num_clusters;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_min_term_freq(mut self, min_term_freq: u64) -> Self {
        self.min_term_freq = min_term_freq;
        self
    }

    pub fn with_max_documents(mut self, max_documents: usize) -> Self {
        self.max_documents = max_documents;
        self
    }

    pub fn with_max_vocab_size(mut self, max_vocab_size: usize) -> Self {
        self.max_vocab_size = max_vocab_size;
        self
    }
}
