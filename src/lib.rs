// cliquescope: frequency, temporal relevance, and similarity analysis
// over clique collections.
//
// This is the library root. The three analysis modules (frequency,
// temporal, similarity) are independent and stateless; pipeline chains
// them, and dataset/output/status serve the command-line binary.

pub mod config;
pub mod dataset;
pub mod frequency;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod status;
pub mod temporal;

pub use dataset::index::TemporalIndex;
pub use dataset::models::{Clique, Entity, NodeId, TimeSlice};
