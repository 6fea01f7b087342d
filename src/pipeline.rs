//! End-to-end recommendation run
//!
//! Validates the configuration, chooses the split year, builds the graph and
//! ranks candidates for the resolved target. Structural problems (missing
//! dataset, missing authors column, empty graph) surface as errors here.

use crate::config::RunConfig;
use crate::error::{CollabError, CollabResult};
use crate::graph::{build_graph_and_journals, CoauthorGraph, GraphStatistics};
use crate::ingest::{pick_split_year, read_headers};
use crate::recommend::{
    recommend, resolve_target_with_match, JournalFilter, RecommendParams, Recommendation, TargetMatch,
};
use serde::Serialize;
use tracing::{info, warn};

/// Outcome of [`run`]
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Year boundary used to build the graph, `None` when no cutoff applied
    pub split_year: Option<i32>,
    pub statistics: GraphStatistics,
    /// Author the recommendations are for
    pub target: String,
    pub target_match: TargetMatch,
    pub recommendations: Vec<Recommendation>,
}

/// Parse a user-typed split year; blank text means "derive it"
pub fn parse_split_year(text: &str) -> CollabResult<Option<i32>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<i32>()
        .map(Some)
        .map_err(|_| CollabError::InvalidSplitYear(text.to_string()))
}

/// Resolve the split year and build the training graph.
///
/// Fails when the dataset or its authors column is missing, or when no
/// co-authorship edge could be built.
pub fn prepare_graph(config: &RunConfig) -> CollabResult<(Option<i32>, CoauthorGraph)> {
    config.validate()?;

    let headers = read_headers(&config.dataset)?;
    if !headers.iter().any(|h| h.trim() == config.columns.authors) {
        return Err(CollabError::MissingColumn {
            column: config.columns.authors.clone(),
        });
    }

    let explicit = match &config.split_year {
        Some(text) => parse_split_year(text)?,
        None => None,
    };
    let split_year = match explicit {
        Some(year) => Some(year),
        None => pick_split_year(
            &config.dataset,
            &config.columns.year,
            config.train_fraction,
            config.ingest.batch_size,
        )?,
    };
    if split_year.is_none() {
        warn!("No split year available, building the graph from every record");
    }

    let graph = build_graph_and_journals(&config.dataset, &config.columns, split_year, &config.ingest)?;
    if graph.is_empty() {
        return Err(CollabError::EmptyGraph);
    }
    Ok((split_year, graph))
}

/// Rank collaborators for an already built graph
pub fn recommend_for(graph: &CoauthorGraph, config: &RunConfig) -> CollabResult<(String, TargetMatch, Vec<Recommendation>)> {
    let (target, how) =
        resolve_target_with_match(graph.adjacency(), &config.target).ok_or(CollabError::EmptyGraph)?;
    if how != TargetMatch::Exact {
        info!("Resolved target '{}' to '{}' ({})", config.target, target, how);
    }

    let params = RecommendParams {
        top_k: config.top_k,
        include_far_neighbors: config.include_far_neighbors,
        weights: config.weights.renormalized(),
        journal_filter: config.journal_filter.as_deref().and_then(JournalFilter::parse),
    };
    let recommendations = recommend(graph.adjacency(), graph.venues(), &target, &params);
    info!("{} recommendations for '{}'", recommendations.len(), target);

    Ok((target, how, recommendations))
}

/// Run the whole pipeline for one configuration
pub fn run(config: &RunConfig) -> CollabResult<RunReport> {
    let (split_year, graph) = prepare_graph(config)?;
    let (target, target_match, recommendations) = recommend_for(&graph, config)?;

    Ok(RunReport {
        split_year,
        statistics: graph.statistics(),
        target,
        target_match,
        recommendations,
    })
}
