//! Streaming co-authorship graph construction
//!
//! Each batch is folded into an accumulator; the accumulator is frozen into an
//! immutable [`CoauthorGraph`] once the dataset or the row ceiling is
//! exhausted.

use super::coauthor::CoauthorGraph;
use crate::algo::{Adjacency, VenueMap};
use crate::config::{ColumnConfig, IngestConfig};
use crate::error::CollabResult;
use crate::ingest::{clean_venue, parse_year, split_authors, BatchReader};
use csv::StringRecord;
use indexmap::IndexSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Header positions of the configured columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnLayout {
    authors: Option<usize>,
    year: Option<usize>,
    venue: Option<usize>,
}

impl ColumnLayout {
    fn resolve<R: Read>(reader: &BatchReader<R>, columns: &ColumnConfig) -> Self {
        Self {
            authors: reader.column_index(&columns.authors),
            year: reader.column_index(&columns.year),
            venue: reader.column_index(&columns.venue),
        }
    }
}

#[derive(Debug, Default)]
struct GraphAccumulator {
    adjacency: Adjacency,
    nodes: IndexSet<String>,
    venues: VenueMap,
    rows_used: usize,
}

impl GraphAccumulator {
    /// Fold one batch in, applying the temporal cutoff first
    fn absorb_batch(
        mut self,
        rows: &[StringRecord],
        authors_idx: usize,
        layout: &ColumnLayout,
        split_year: Option<i32>,
    ) -> Self {
        let cutoff = split_year.zip(layout.year);
        let mut retained = 0;

        for row in rows {
            if let Some((split, year_idx)) = cutoff {
                match parse_year(row.get(year_idx)) {
                    Some(year) if year <= split => {}
                    _ => continue,
                }
            }
            retained += 1;

            let authors = split_authors(row.get(authors_idx));
            let venue = layout.venue.map(|idx| clean_venue(row.get(idx))).unwrap_or_default();
            self.add_record(&authors, &venue);
        }

        self.rows_used += retained;
        debug!(
            "Batch of {} rows, {} retained, {} authors so far",
            rows.len(),
            retained,
            self.nodes.len()
        );
        self
    }

    fn add_record(&mut self, authors: &[String], venue: &str) {
        for author in authors {
            self.nodes.insert(author.clone());
        }

        if authors.len() >= 2 {
            for (i, u) in authors.iter().enumerate() {
                for v in &authors[i + 1..] {
                    self.add_edge(u, v);
                }
            }
        }

        if !venue.is_empty() {
            for author in authors {
                self.venues
                    .entry(author.clone())
                    .or_default()
                    .insert(venue.to_string());
            }
        }
    }

    fn add_edge(&mut self, u: &str, v: &str) {
        // split_authors de-duplicates, so u != v here
        *self
            .adjacency
            .entry(u.to_string())
            .or_default()
            .entry(v.to_string())
            .or_insert(0) += 1;
        *self
            .adjacency
            .entry(v.to_string())
            .or_default()
            .entry(u.to_string())
            .or_insert(0) += 1;
    }

    fn finish(self) -> CoauthorGraph {
        CoauthorGraph {
            adjacency: self.adjacency,
            nodes: self.nodes,
            venues: self.venues,
            rows_used: self.rows_used,
        }
    }
}

/// Build the co-authorship graph and author venue sets from a dataset file.
///
/// Only rows dated at or before `split_year` are used when a split year is
/// given and the year column exists. Reading stops after the batch that
/// brings the retained-row count to `ingest.max_rows`.
///
/// A dataset without the authors column yields an empty graph; callers
/// decide whether that is fatal.
pub fn build_graph_and_journals(
    path: &Path,
    columns: &ColumnConfig,
    split_year: Option<i32>,
    ingest: &IngestConfig,
) -> CollabResult<CoauthorGraph> {
    let reader = BatchReader::open(path, ingest.batch_size)?;
    build_graph_from(reader, columns, split_year, ingest.max_rows)
}

/// Same as [`build_graph_and_journals`] over an already opened reader
pub fn build_graph_from<R: Read>(
    reader: BatchReader<R>,
    columns: &ColumnConfig,
    split_year: Option<i32>,
    max_rows: usize,
) -> CollabResult<CoauthorGraph> {
    let layout = ColumnLayout::resolve(&reader, columns);

    let Some(authors_idx) = layout.authors else {
        warn!("Authors column '{}' not found, skipping every batch", columns.authors);
        return Ok(CoauthorGraph::default());
    };
    if split_year.is_some() && layout.year.is_none() {
        warn!("Year column '{}' not found, temporal cutoff not applied", columns.year);
    }
    if layout.venue.is_none() {
        warn!("Venue column '{}' not found, venue sets will be empty", columns.venue);
    }

    let mut acc = GraphAccumulator::default();
    for batch in reader {
        acc = acc.absorb_batch(&batch?, authors_idx, &layout, split_year);
        if acc.rows_used >= max_rows {
            info!("Row ceiling {} reached after {} rows", max_rows, acc.rows_used);
            break;
        }
    }

    let graph = acc.finish();
    info!(
        "Built co-authorship graph: {} authors, {} edges, {} rows used",
        graph.node_count(),
        graph.edge_count(),
        graph.rows_used()
    );
    Ok(graph)
}
