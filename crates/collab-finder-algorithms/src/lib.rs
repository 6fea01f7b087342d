pub mod common;
pub mod candidates;
pub mod link_prediction;
pub mod overlap;
pub mod normalize;

pub use common::{degree, highest_degree_node, neighbors, Adjacency, VenueMap};
pub use candidates::candidate_set;
pub use link_prediction::{adamic_adar, common_neighbors, common_neighbors_count};
pub use overlap::{journal_overlap, JournalOverlap};
pub use normalize::normalize;
