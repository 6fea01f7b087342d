//! Target author resolution
//!
//! Maps a user-typed name onto a node of the graph, tolerating case
//! differences, partial names and typos.

use crate::algo::{highest_degree_node, Adjacency};
use serde::Serialize;
use std::fmt;

/// How a requested name was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetMatch {
    Exact,
    CaseInsensitive,
    Substring,
    /// Nothing matched; the best connected author was chosen
    HighestDegree,
}

impl fmt::Display for TargetMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TargetMatch::Exact => "exact",
            TargetMatch::CaseInsensitive => "case-insensitive",
            TargetMatch::Substring => "substring",
            TargetMatch::HighestDegree => "highest-degree fallback",
        };
        write!(f, "{}", s)
    }
}

/// Resolve `preferred` to a node name and report how it matched.
///
/// Tries, in order: exact name, case-insensitive name, first node (in
/// insertion order) containing `preferred` case-insensitively, then the
/// highest-degree node. Only an empty graph yields `None`.
pub fn resolve_target_with_match(adj: &Adjacency, preferred: &str) -> Option<(String, TargetMatch)> {
    if adj.contains_key(preferred) {
        return Some((preferred.to_string(), TargetMatch::Exact));
    }

    let lowered = preferred.to_lowercase();
    if let Some(name) = adj.keys().find(|n| n.to_lowercase() == lowered) {
        return Some((name.clone(), TargetMatch::CaseInsensitive));
    }
    if let Some(name) = adj.keys().find(|n| n.to_lowercase().contains(&lowered)) {
        return Some((name.clone(), TargetMatch::Substring));
    }

    highest_degree_node(adj).map(|name| (name.to_string(), TargetMatch::HighestDegree))
}

/// Resolve `preferred` to a node name; see [`resolve_target_with_match`]
pub fn resolve_target(adj: &Adjacency, preferred: &str) -> Option<String> {
    resolve_target_with_match(adj, preferred).map(|(name, _)| name)
}
