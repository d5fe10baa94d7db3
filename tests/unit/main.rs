//! Unit test infrastructure for gaest
//!
//! Tests are organized by module:
//! - `sequence/` - alphabet and FASTA handling
//! - `align/` - local alignment, traceback and rendering
//! - `cluster/` - similarity cache, estimator, graph and fitness
//! - `ga/` - parameter file and GA driver
//! - `args` - command-line parsing

mod args;
mod helpers;
