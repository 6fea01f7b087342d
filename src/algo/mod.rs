//! Link-prediction metrics
//!
//! The algorithms live in the `collab-finder-algorithms` crate and operate on
//! plain adjacency maps. This module re-exports them and bundles the three
//! signals computed for every (target, candidate) pair.

pub use collab_finder_algorithms::{
    adamic_adar, candidate_set, common_neighbors, common_neighbors_count, degree,
    highest_degree_node, journal_overlap, neighbors, normalize, Adjacency, JournalOverlap,
    VenueMap,
};

/// Raw similarity signals between a target and one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct PairMetrics {
    pub common_neighbors: usize,
    pub adamic_adar: f64,
    pub overlap: JournalOverlap,
}

/// Compute common-neighbor count, Adamic–Adar and venue overlap for `(u, v)`
pub fn pair_metrics(adj: &Adjacency, venues: &VenueMap, u: &str, v: &str) -> PairMetrics {
    PairMetrics {
        common_neighbors: common_neighbors_count(adj, u, v),
        adamic_adar: adamic_adar(adj, u, v),
        overlap: journal_overlap(venues, u, v),
    }
}
