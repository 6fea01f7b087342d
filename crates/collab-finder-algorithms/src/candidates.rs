//! Candidate enumeration for link prediction
//!
//! Produces the pool of nodes that get scored against a target.

use super::common::Adjacency;
use std::collections::BTreeSet;

/// Candidate set for `target`.
///
/// With `include_far_neighbors` every node except the target is a candidate.
/// Otherwise only friends-of-friends that are not already direct neighbors
/// qualify, so existing collaborators are never recommended again.
///
/// The result is ordered by name, which fixes the enumeration order used when
/// scoring.
pub fn candidate_set(adj: &Adjacency, target: &str, include_far_neighbors: bool) -> BTreeSet<String> {
    if include_far_neighbors {
        return adj
            .keys()
            .filter(|name| name.as_str() != target)
            .cloned()
            .collect();
    }

    let Some(direct) = adj.get(target) else {
        return BTreeSet::new();
    };

    let mut two_hop = BTreeSet::new();
    for friend in direct.keys() {
        if let Some(row) = adj.get(friend) {
            for name in row.keys() {
                if name != target && !direct.contains_key(name) {
                    two_hop.insert(name.clone());
                }
            }
        }
    }
    two_hop
}
