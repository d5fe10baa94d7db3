use clap::Args;
use std::path::PathBuf;

use crate::algorithm::common::ScoringArgs;
use crate::report::pairwise::DEFAULT_LINE_LENGTH;
use crate::sequence::fasta::DEFAULT_WRAP;

#[derive(Args, Debug)]
pub struct PrintArgs {
    /// FASTA input (stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// 0-based sequence index; all sequences when omitted
    #[arg(long)]
    pub index: Option<usize>,
    /// Layout: raw, fasta or nice
    #[arg(short, long, default_value = "nice")]
    pub mode: String,
    /// Residues per line (0 prints names only)
    #[arg(short, long, default_value_t = DEFAULT_WRAP)]
    pub wrap: usize,
}

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// FASTA input (stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// 0-based index of the top sequence
    #[arg(long, default_value_t = 0)]
    pub top: usize,
    /// 0-based index of the bottom sequence
    #[arg(long, default_value_t = 1)]
    pub bottom: usize,
    /// Alignment columns per block (0 prints the header only)
    #[arg(short, long, default_value_t = DEFAULT_LINE_LENGTH)]
    pub wrap: usize,
    #[command(flatten)]
    pub scoring: ScoringArgs,
}
