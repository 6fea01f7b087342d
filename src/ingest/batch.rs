//! Bounded batch reader over a headered CSV dataset
//!
//! Yields rows in fixed-size batches so peak memory stays proportional to the
//! batch size rather than the dataset size.

use crate::error::{CollabError, CollabResult};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Default number of rows per batch
pub const DEFAULT_BATCH_SIZE: usize = 20_000;

/// Streaming reader producing `Vec<StringRecord>` batches
pub struct BatchReader<R: Read> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    batch_size: usize,
    batches_read: usize,
    finished: bool,
}

impl BatchReader<File> {
    /// Open a dataset file.
    ///
    /// A missing file is reported as [`CollabError::DatasetNotFound`].
    pub fn open(path: &Path, batch_size: usize) -> CollabResult<Self> {
        if !path.exists() {
            return Err(CollabError::DatasetNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        debug!("Opened dataset {} (batch size {})", path.display(), batch_size);
        Self::from_reader(file, batch_size)
    }
}

impl<R: Read> BatchReader<R> {
    /// Wrap any reader; the first line is the header
    pub fn from_reader(reader: R, batch_size: usize) -> CollabResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            batch_size: batch_size.max(1),
            batches_read: 0,
            finished: false,
        })
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Position of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    pub fn batches_read(&self) -> usize {
        self.batches_read
    }

    fn read_batch(&mut self) -> CollabResult<Vec<StringRecord>> {
        let mut rows = Vec::with_capacity(self.batch_size.min(4096));
        let mut record = StringRecord::new();
        while rows.len() < self.batch_size {
            if !self.reader.read_record(&mut record)? {
                self.finished = true;
                break;
            }
            rows.push(record.clone());
        }
        Ok(rows)
    }
}

impl<R: Read> Iterator for BatchReader<R> {
    type Item = CollabResult<Vec<StringRecord>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_batch() {
            Ok(rows) if rows.is_empty() => None,
            Ok(rows) => {
                self.batches_read += 1;
                Some(Ok(rows))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Read only the header line of a dataset
pub fn read_headers(path: &Path) -> CollabResult<StringRecord> {
    Ok(BatchReader::open(path, 1)?.headers().clone())
}
