//! `cluster`: GA search for the best clustering

pub mod args;
pub mod run;

pub use args::ClusterArgs;
pub use run::run;
