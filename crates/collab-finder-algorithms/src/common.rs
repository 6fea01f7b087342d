//! Shared types for co-authorship graph algorithms
//!
//! Provides the read-only adjacency structure that every metric operates on.

use indexmap::IndexMap;
use std::collections::{BTreeSet, HashMap};

/// Undirected weighted adjacency: author -> (co-author -> shared publications).
///
/// Rows are kept in first-seen order so lookups that return "the first match"
/// are stable across runs. Every edge is stored in both endpoint rows with the
/// same weight, and a row never contains its own key.
pub type Adjacency = IndexMap<String, IndexMap<String, u32>>;

/// Author -> set of distinct venues the author has published in.
pub type VenueMap = HashMap<String, BTreeSet<String>>;

/// Number of distinct neighbors of a node (0 for unknown nodes)
pub fn degree(adj: &Adjacency, node: &str) -> usize {
    adj.get(node).map_or(0, |row| row.len())
}

/// Iterate the neighbor names of a node
pub fn neighbors<'a>(adj: &'a Adjacency, node: &str) -> impl Iterator<Item = &'a String> + 'a {
    adj.get(node).into_iter().flat_map(|row| row.keys())
}

/// Node with the most distinct neighbors.
///
/// On ties the node inserted first wins. Returns `None` for an empty graph.
pub fn highest_degree_node(adj: &Adjacency) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    for (name, row) in adj {
        match best {
            Some((_, d)) if row.len() <= d => {}
            _ => best = Some((name.as_str(), row.len())),
        }
    }
    best.map(|(name, _)| name)
}

/// Helper to create an Adjacency from an undirected edge list (test support).
///
/// Repeated pairs accumulate weight; self-pairs are ignored.
pub fn from_edges(edges: &[(&str, &str)]) -> Adjacency {
    let mut adj = Adjacency::new();
    for &(u, v) in edges {
        if u == v {
            continue;
        }
        *adj.entry(u.to_string()).or_default().entry(v.to_string()).or_insert(0) += 1;
        *adj.entry(v.to_string()).or_default().entry(u.to_string()).or_insert(0) += 1;
    }
    adj
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_is_symmetric() {
        let adj = from_edges(&[("a", "b"), ("b", "c"), ("a", "b"), ("c", "c")]);

        assert_eq!(adj["a"]["b"], 2);
        assert_eq!(adj["b"]["a"], 2);
        assert_eq!(adj["b"]["c"], 1);
        assert!(!adj.contains_key("c") || !adj["c"].contains_key("c"));
        for (u, row) in &adj {
            for (v, w) in row {
                assert_eq!(adj[v][u], *w);
            }
        }
    }

    #[test]
    fn test_degree_and_neighbors() {
        let adj = from_edges(&[("a", "b"), ("a", "c"), ("a", "b")]);

        assert_eq!(degree(&adj, "a"), 2);
        assert_eq!(degree(&adj, "b"), 1);
        assert_eq!(degree(&adj, "missing"), 0);

        let names: Vec<&String> = neighbors(&adj, "a").collect();
        assert_eq!(names, vec!["b", "c"]);
        assert_eq!(neighbors(&adj, "missing").count(), 0);
    }

    #[test]
    fn test_highest_degree_node_prefers_first_on_tie() {
        // hub has 3 neighbors, x and y tie at 1 afterwards
        let adj = from_edges(&[("x", "hub"), ("hub", "y"), ("hub", "z")]);
        assert_eq!(highest_degree_node(&adj), Some("hub"));

        let tie = from_edges(&[("p", "q")]);
        assert_eq!(highest_degree_node(&tie), Some("p"));

        assert_eq!(highest_degree_node(&Adjacency::new()), None);
    }
}
