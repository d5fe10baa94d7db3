//! EST clustering: similarity cache, genome operators and cluster graphs

pub mod cache;
pub mod estimate;
pub mod exhaustive;
pub mod graph;
pub mod session;

pub use cache::SimilarityCache;
pub use exhaustive::{cluster_all_pairs, ExhaustiveClustering};
pub use graph::ClusterGraph;
pub use session::ClusterSession;
