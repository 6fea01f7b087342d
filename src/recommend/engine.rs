//! Candidate scoring and ranking
//!
//! Every candidate gets three raw signals against the target. Signals are
//! min-max normalized across the surviving candidates and fused with the
//! caller's weights into one score.

use super::filter::JournalFilter;
use super::weights::Weights;
use crate::algo::{candidate_set, common_neighbors, normalize, pair_metrics, Adjacency, VenueMap};
use crate::config::DEFAULT_TOP_K;
use crate::ingest::is_blank_venue;
use serde::Serialize;
use tracing::debug;

/// Shared venues and neighbors listed per recommendation
pub const MAX_LISTED: usize = 5;

/// Ranking parameters for one call to [`recommend`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendParams {
    pub top_k: usize,
    /// Score every other author, not only friends-of-friends
    pub include_far_neighbors: bool,
    pub weights: Weights,
    pub journal_filter: Option<JournalFilter>,
}

impl Default for RecommendParams {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            include_far_neighbors: false,
            weights: Weights::default(),
            journal_filter: None,
        }
    }
}

/// One ranked candidate collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub candidate: String,
    /// Weighted sum of the normalized signals
    pub score: f64,
    pub adamic_adar: f64,
    pub common_neighbor_count: usize,
    pub journal_jaccard: f64,
    /// Shared venues, sorted, at most [`MAX_LISTED`]
    pub common_journals: Vec<String>,
    /// Shared co-authors, best connected first, at most [`MAX_LISTED`]
    pub common_neighbors: Vec<String>,
    pub explanation: String,
}

/// Candidate that passed the venue checks, before normalization
struct Scored {
    candidate: String,
    common_neighbors: usize,
    adamic_adar: f64,
    jaccard: f64,
    journals: Vec<String>,
    neighbors: Vec<String>,
}

/// Human-readable reason for a recommendation
pub fn format_explanation(common_journals: &[String], jaccard: f64, common_neighbors: &[String]) -> String {
    let journals = if common_journals.is_empty() {
        "no common journal".to_string()
    } else {
        common_journals.join("; ")
    };
    let neighbors = if common_neighbors.is_empty() {
        "no common neighbor".to_string()
    } else {
        common_neighbors.join("; ")
    };
    format!(
        "Common journals: {} (J={:.2}); Common neighbors: {}",
        journals, jaccard, neighbors
    )
}

/// Rank candidate collaborators for `target`.
///
/// Candidates that share no venue with the target are dropped, so every
/// result can cite at least one concrete venue. The journal filter is tested
/// against the full list of shared venues; lists are cut to [`MAX_LISTED`]
/// only for display. Ties in score are broken by candidate name.
pub fn recommend(
    adj: &Adjacency,
    venues: &VenueMap,
    target: &str,
    params: &RecommendParams,
) -> Vec<Recommendation> {
    let candidates = candidate_set(adj, target, params.include_far_neighbors);
    let pool = candidates.len();

    let mut survivors: Vec<Scored> = Vec::new();
    for candidate in candidates {
        let metrics = pair_metrics(adj, venues, target, &candidate);

        let mut journals: Vec<String> = metrics
            .overlap
            .intersection
            .iter()
            .filter(|j| !is_blank_venue(j))
            .cloned()
            .collect();
        if journals.is_empty() {
            continue;
        }
        if let Some(filter) = &params.journal_filter {
            if !filter.matches_any(&journals) {
                continue;
            }
        }
        journals.truncate(MAX_LISTED);

        let mut neighbors = common_neighbors(adj, target, &candidate);
        neighbors.truncate(MAX_LISTED);

        survivors.push(Scored {
            candidate,
            common_neighbors: metrics.common_neighbors,
            adamic_adar: metrics.adamic_adar,
            jaccard: metrics.overlap.jaccard,
            journals,
            neighbors,
        });
    }

    debug!(
        "Target '{}': {} candidates, {} share a venue",
        target,
        pool,
        survivors.len()
    );
    if survivors.is_empty() {
        return Vec::new();
    }

    let cn = normalize(&survivors.iter().map(|s| s.common_neighbors as f64).collect::<Vec<_>>());
    let aa = normalize(&survivors.iter().map(|s| s.adamic_adar).collect::<Vec<_>>());
    let jj = normalize(&survivors.iter().map(|s| s.jaccard).collect::<Vec<_>>());

    let mut ranked: Vec<Recommendation> = survivors
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            let explanation = format_explanation(&s.journals, s.jaccard, &s.neighbors);
            Recommendation {
                score: params.weights.combine(jj[i], aa[i], cn[i]),
                candidate: s.candidate,
                adamic_adar: s.adamic_adar,
                common_neighbor_count: s.common_neighbors,
                journal_jaccard: s.jaccard,
                common_journals: s.journals,
                common_neighbors: s.neighbors,
                explanation,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.candidate.cmp(&b.candidate))
    });
    ranked.truncate(params.top_k);
    ranked
}
