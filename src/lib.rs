//! Collab Finder
//!
//! Recommends new academic collaborators for an author from a co-authorship
//! graph built out of a bibliographic CSV dataset.
//!
//! # Pipeline
//!
//! 1. **Ingestion** ([`ingest`]): tolerant year/venue/author parsing and
//!    bounded batch reading; the temporal splitter picks the year that puts a
//!    given share of records on the training side.
//! 2. **Graph** ([`graph`]): training rows are folded into a symmetric weighted
//!    co-authorship adjacency plus per-author venue sets.
//! 3. **Metrics** ([`algo`]): candidate sets, common neighbors, Adamic–Adar
//!    and venue Jaccard, from the `collab-finder-algorithms` crate.
//! 4. **Recommendation** ([`recommend`]): min-max normalization, weighted
//!    fusion, deterministic ranking and explanation text.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use collab_finder::{run, RunConfig, Weights};
//!
//! let mut config = RunConfig::new("dataset/dblp_2021_2023.csv", "Ernesto Damiani");
//! config.top_k = 10;
//! config.weights = Weights::default().with_adamic_adar(0.6);
//!
//! let report = run(&config)?;
//! println!("{} nodes, {} edges", report.statistics.node_count, report.statistics.edge_count);
//! for rec in &report.recommendations {
//!     println!("{:.4} {} - {}", rec.score, rec.candidate, rec.explanation);
//! }
//! # Ok::<(), collab_finder::CollabError>(())
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod pipeline;
pub mod recommend;

// Re-export main types for convenience
pub use algo::{Adjacency, JournalOverlap, PairMetrics, VenueMap};

pub use config::{ColumnConfig, IngestConfig, RunConfig};

pub use error::{CollabError, CollabResult};

pub use graph::{build_graph_and_journals, CoauthorGraph, GraphStatistics};

pub use ingest::{clean_venue, parse_year, pick_split_year, split_authors};

pub use pipeline::{parse_split_year, prepare_graph, recommend_for, run, RunReport};

pub use recommend::{
    recommend, resolve_target, write_csv, JournalFilter, RecommendParams, Recommendation,
    RecommendationRow, TargetMatch, Weights,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
