//! Co-authorship graph
//!
//! Authors are nodes identified by their trimmed name; an edge joins two
//! authors that share at least one publication, weighted by the number of
//! shared publications.

pub mod builder;
pub mod coauthor;

pub use builder::{build_graph_and_journals, build_graph_from};
pub use coauthor::{CoauthorGraph, GraphStatistics};
