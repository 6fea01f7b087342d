//! Error types for the recommendation pipeline
//!
//! Dirty field values never surface here; they are absorbed by the record
//! parser. Only structural and configuration problems become errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a dataset or running a recommendation
#[derive(Error, Debug)]
pub enum CollabError {
    /// Dataset file does not exist
    #[error("Dataset not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    /// A required column is absent from the dataset header
    #[error("Missing required column '{column}' in dataset header")]
    MissingColumn { column: String },

    /// Split year text is not an integer
    #[error("Split year must be an integer, got '{0}'")]
    InvalidSplitYear(String),

    /// Train fraction outside (0, 1]
    #[error("Train fraction must be in (0, 1], got {0}")]
    InvalidTrainFraction(f64),

    /// Weight components are negative or not finite
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// No co-authorship edges were built from the dataset
    #[error("Empty graph: no co-authorship edges found, check the dataset and column names")]
    EmptyGraph,

    /// Invalid run configuration
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CollabResult<T> = Result<T, CollabError>;
