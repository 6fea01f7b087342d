//! Neighborhood-based link prediction scores
//!
//! Common neighbors and the Adamic–Adar index. Edge weights are ignored; only
//! the presence of a neighbor counts.

use super::common::{degree, Adjacency};

fn shared<'a>(adj: &'a Adjacency, u: &str, v: &str) -> Vec<&'a String> {
    let (Some(row_u), Some(row_v)) = (adj.get(u), adj.get(v)) else {
        return Vec::new();
    };
    // Walk the smaller row and probe the larger one
    let (small, large) = if row_u.len() <= row_v.len() { (row_u, row_v) } else { (row_v, row_u) };
    small.keys().filter(|z| large.contains_key(*z)).collect()
}

/// Size of the intersection of the neighbor sets of `u` and `v`
pub fn common_neighbors_count(adj: &Adjacency, u: &str, v: &str) -> usize {
    shared(adj, u, v).len()
}

/// Shared neighbors of `u` and `v`, best connected first.
///
/// Sorted by degree descending, then by name so equal-degree neighbors list
/// in a stable order.
pub fn common_neighbors(adj: &Adjacency, u: &str, v: &str) -> Vec<String> {
    let mut names: Vec<(usize, &String)> = shared(adj, u, v)
        .into_iter()
        .map(|z| (degree(adj, z), z))
        .collect();
    names.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    names.into_iter().map(|(_, z)| z.clone()).collect()
}

/// Adamic–Adar index
///
/// Sum of `1 / ln(degree(z))` over common neighbors `z`. Neighbors of degree 1
/// add nothing since `ln(1) = 0`.
pub fn adamic_adar(adj: &Adjacency, u: &str, v: &str) -> f64 {
    shared(adj, u, v)
        .into_iter()
        .map(|z| degree(adj, z))
        .filter(|&d| d > 1)
        .map(|d| 1.0 / (d as f64).ln())
        .sum()
}
