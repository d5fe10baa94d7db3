//! Text reports: pairwise alignments and cluster listings

pub mod clusters;
pub mod pairwise;

pub use clusters::{write_clusters, MemberStyle};
pub use pairwise::write_alignment;
