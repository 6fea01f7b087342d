//! Dataset ingestion
//!
//! Record-level parsing, bounded batch reading and the temporal split.

pub mod batch;
pub mod record;
pub mod split;

pub use batch::{read_headers, BatchReader, DEFAULT_BATCH_SIZE};
pub use record::{clean_venue, is_blank_venue, parse_year, split_authors, BLANK_VENUES};
pub use split::{pick_split_year, pick_split_year_from, YearHistogram, DEFAULT_TRAIN_FRACTION};
