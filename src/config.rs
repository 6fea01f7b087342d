//! Run configuration
//!
//! Every field has a default so a YAML file only needs to name what differs.

use crate::error::{CollabError, CollabResult};
use crate::ingest::{DEFAULT_BATCH_SIZE, DEFAULT_TRAIN_FRACTION};
use crate::recommend::Weights;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default ceiling on training rows fed to the graph builder
pub const DEFAULT_MAX_ROWS: usize = 200_000;

/// Default number of recommendations returned
pub const DEFAULT_TOP_K: usize = 25;

/// Column names in the dataset header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// `;`-delimited author list (required)
    pub authors: String,
    /// Publication date or year
    pub year: String,
    /// Journal or venue name
    pub venue: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            authors: "authors".to_string(),
            year: "mdate".to_string(),
            venue: "journal".to_string(),
        }
    }
}

/// Memory and latency bounds for ingestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Rows per batch
    pub batch_size: usize,
    /// Stop after the batch that brings the retained-row count to this value
    pub max_rows: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Everything needed for one recommendation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub dataset: PathBuf,
    pub columns: ColumnConfig,
    pub ingest: IngestConfig,
    /// Explicit split year as typed by the user; derived when `None`
    pub split_year: Option<String>,
    /// Share of dated records on the training side when deriving the split
    pub train_fraction: f64,
    /// Author to recommend for (fuzzy matched)
    pub target: String,
    pub top_k: usize,
    /// Score every author instead of only friends-of-friends
    pub include_far_neighbors: bool,
    pub weights: Weights,
    /// `;`-separated venue names
    pub journal_filter: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::new(),
            columns: ColumnConfig::default(),
            ingest: IngestConfig::default(),
            split_year: None,
            train_fraction: DEFAULT_TRAIN_FRACTION,
            target: String::new(),
            top_k: DEFAULT_TOP_K,
            include_far_neighbors: false,
            weights: Weights::default(),
            journal_filter: None,
        }
    }
}

impl RunConfig {
    pub fn new(dataset: impl Into<PathBuf>, target: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            target: target.into(),
            ..Self::default()
        }
    }

    /// Load a run description from a YAML file
    pub fn from_yaml_file(path: &Path) -> CollabResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> CollabResult<Self> {
        let mut config: RunConfig = serde_yaml::from_str(text)?;
        // weights in a file are user input: reject bad components, then bring back to sum 1
        config.weights.validate()?;
        config.weights = config.weights.renormalized();
        Ok(config)
    }

    /// Check bounds that serde cannot express
    pub fn validate(&self) -> CollabResult<()> {
        if self.ingest.batch_size == 0 {
            return Err(CollabError::Config("batch_size must be positive".to_string()));
        }
        if self.ingest.max_rows == 0 {
            return Err(CollabError::Config("max_rows must be positive".to_string()));
        }
        if self.top_k == 0 {
            return Err(CollabError::Config("top_k must be positive".to_string()));
        }
        if self.columns.authors.trim().is_empty() {
            return Err(CollabError::Config("authors column name is empty".to_string()));
        }
        if !(self.train_fraction.is_finite() && self.train_fraction > 0.0 && self.train_fraction <= 1.0) {
            return Err(CollabError::InvalidTrainFraction(self.train_fraction));
        }
        self.weights.validate()
    }
}
