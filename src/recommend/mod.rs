//! Collaborator recommendation
//!
//! Resolves the target author, scores candidates and renders the ranked list.

pub mod engine;
pub mod filter;
pub mod output;
pub mod target;
pub mod weights;

pub use engine::{format_explanation, recommend, RecommendParams, Recommendation, MAX_LISTED};
pub use filter::JournalFilter;
pub use output::{to_rows, write_csv, RecommendationRow};
pub use target::{resolve_target, resolve_target_with_match, TargetMatch};
pub use weights::Weights;
