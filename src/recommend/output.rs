//! Flat rows for presentation and export

use super::engine::Recommendation;
use crate::error::CollabResult;
use serde::Serialize;
use std::io::Write;

/// Display separator for venue and neighbor lists
pub const LIST_SEPARATOR: &str = "; ";

/// One recommendation with list fields joined into display strings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRow {
    #[serde(rename = "Candidate")]
    pub candidate: String,
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Adamic-Adar")]
    pub adamic_adar: f64,
    #[serde(rename = "Common Neighbors")]
    pub common_neighbor_count: usize,
    #[serde(rename = "Journal Jaccard")]
    pub journal_jaccard: f64,
    #[serde(rename = "Common Journals")]
    pub common_journals: String,
    #[serde(rename = "Common Neighbors (names)")]
    pub common_neighbors: String,
    #[serde(rename = "Explanation")]
    pub explanation: String,
}

impl From<&Recommendation> for RecommendationRow {
    fn from(rec: &Recommendation) -> Self {
        Self {
            candidate: rec.candidate.clone(),
            score: rec.score,
            adamic_adar: rec.adamic_adar,
            common_neighbor_count: rec.common_neighbor_count,
            journal_jaccard: rec.journal_jaccard,
            common_journals: rec.common_journals.join(LIST_SEPARATOR),
            common_neighbors: rec.common_neighbors.join(LIST_SEPARATOR),
            explanation: rec.explanation.clone(),
        }
    }
}

pub fn to_rows(recs: &[Recommendation]) -> Vec<RecommendationRow> {
    recs.iter().map(RecommendationRow::from).collect()
}

/// Write recommendations as headered CSV
pub fn write_csv<W: Write>(writer: W, recs: &[Recommendation]) -> CollabResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for rec in recs {
        csv.serialize(RecommendationRow::from(rec))?;
    }
    csv.flush()?;
    Ok(())
}
