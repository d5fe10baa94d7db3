//! `allpairs`: exhaustive clustering over every pair of sequences

pub mod args;
pub mod run;

pub use args::AllPairsArgs;
pub use run::run;
