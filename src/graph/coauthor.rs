//! Immutable co-authorship graph produced by one ingestion run

use crate::algo::{Adjacency, VenueMap};
use indexmap::IndexSet;
use serde::Serialize;
use std::collections::BTreeSet;

/// Summary counts reported after a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStatistics {
    /// Authors seen on retained rows
    pub node_count: usize,
    /// Undirected co-authorship edges
    pub edge_count: usize,
    /// Authors with at least one co-author
    pub connected_count: usize,
    /// Retained training rows
    pub rows_used: usize,
}

/// Co-authorship graph with per-author venue sets.
///
/// Built once by [`super::build_graph_and_journals`] and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct CoauthorGraph {
    pub(crate) adjacency: Adjacency,
    pub(crate) nodes: IndexSet<String>,
    pub(crate) venues: VenueMap,
    pub(crate) rows_used: usize,
}

impl CoauthorGraph {
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Every author seen, including authors without co-authors
    pub fn nodes(&self) -> &IndexSet<String> {
        &self.nodes
    }

    pub fn venues(&self) -> &VenueMap {
        &self.venues
    }

    /// Venues of a single author
    pub fn venues_of(&self, author: &str) -> Option<&BTreeSet<String>> {
        self.venues.get(author)
    }

    pub fn rows_used(&self) -> usize {
        self.rows_used
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|row| row.len()).sum::<usize>() / 2
    }

    /// Shared publications between two authors (0 when not connected)
    pub fn edge_weight(&self, u: &str, v: &str) -> u32 {
        self.adjacency
            .get(u)
            .and_then(|row| row.get(v))
            .copied()
            .unwrap_or(0)
    }

    /// True when no co-authorship edge was built
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn statistics(&self) -> GraphStatistics {
        GraphStatistics {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            connected_count: self.adjacency.len(),
            rows_used: self.rows_used,
        }
    }

    /// Decompose into `(adjacency, nodes, venues, rows_used)`
    pub fn into_parts(self) -> (Adjacency, IndexSet<String>, VenueMap, usize) {
        (self.adjacency, self.nodes, self.venues, self.rows_used)
    }
}
