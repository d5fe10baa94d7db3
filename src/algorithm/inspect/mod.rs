//! `print` and `align`: look at single sequences and pairwise alignments

pub mod args;
pub mod run;

pub use args::{AlignArgs, PrintArgs};
pub use run::{run_align, run_print};
