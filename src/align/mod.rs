//! Local alignment of nucleotide sequences with affine gap penalties

pub mod dynamic;
pub mod matrix;
pub mod params;
pub mod result;
pub mod traceback;

pub use params::ScoringParams;
pub use result::{align, align_with_traceback, Alignment};
pub use traceback::TracedPath;
