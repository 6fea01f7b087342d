//! Temporal train/test split
//!
//! Picks the year boundary below which a requested share of the records fall.
//! Only the year column is inspected and the dataset is read batch by batch.

use super::batch::BatchReader;
use super::record::parse_year;
use crate::error::{CollabError, CollabResult};
use csv::StringRecord;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Default share of records placed on the training side
pub const DEFAULT_TRAIN_FRACTION: f64 = 0.8;

/// Per-year record counts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearHistogram {
    counts: BTreeMap<i32, u64>,
}

impl YearHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally the resolvable years of one batch
    pub fn add_batch(&mut self, rows: &[StringRecord], year_idx: usize) {
        for row in rows {
            if let Some(year) = parse_year(row.get(year_idx)) {
                *self.counts.entry(year).or_insert(0) += 1;
            }
        }
    }

    pub fn add(&mut self, year: i32) {
        *self.counts.entry(year).or_insert(0) += 1;
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// First year (ascending) at which the running count reaches
    /// `total * train_fraction`. Falls back to the latest year.
    pub fn split_year(&self, train_fraction: f64) -> Option<i32> {
        let target = self.total() as f64 * train_fraction;
        let mut running = 0u64;
        for (&year, &count) in &self.counts {
            running += count;
            if running as f64 >= target {
                return Some(year);
            }
        }
        self.counts.keys().next_back().copied()
    }
}

fn check_fraction(train_fraction: f64) -> CollabResult<()> {
    if train_fraction.is_finite() && train_fraction > 0.0 && train_fraction <= 1.0 {
        Ok(())
    } else {
        Err(CollabError::InvalidTrainFraction(train_fraction))
    }
}

/// Choose a split year from a dataset file.
///
/// Returns `Ok(None)` when no record has a usable year; the caller then has
/// to supply an explicit split year.
pub fn pick_split_year(
    path: &Path,
    year_col: &str,
    train_fraction: f64,
    batch_size: usize,
) -> CollabResult<Option<i32>> {
    check_fraction(train_fraction)?;
    let reader = BatchReader::open(path, batch_size)?;
    pick_split_year_from(reader, year_col, train_fraction)
}

/// Same as [`pick_split_year`] over an already opened reader
pub fn pick_split_year_from<R: Read>(
    mut reader: BatchReader<R>,
    year_col: &str,
    train_fraction: f64,
) -> CollabResult<Option<i32>> {
    check_fraction(train_fraction)?;

    let Some(year_idx) = reader.column_index(year_col) else {
        warn!("Year column '{}' not found, cannot derive a split year", year_col);
        return Ok(None);
    };

    let mut histogram = YearHistogram::new();
    for batch in reader.by_ref() {
        histogram.add_batch(&batch?, year_idx);
    }
    debug!(
        "Scanned {} batches, {} records with a year",
        reader.batches_read(),
        histogram.total()
    );

    let year = histogram.split_year(train_fraction);
    match year {
        Some(y) => info!("Split year {} covers {:.0}% of dated records", y, train_fraction * 100.0),
        None => warn!("No record has a resolvable year in column '{}'", year_col),
    }
    Ok(year)
}
