use clap::Args;
use std::path::PathBuf;

use crate::algorithm::common::ScoringArgs;

#[derive(Args, Debug)]
pub struct AllPairsArgs {
    /// FASTA input (stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Cluster listing (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// List member names only instead of full sequences
    #[arg(short, long, default_value_t = false)]
    pub names: bool,
    #[arg(long, default_value_t = 0)]
    pub num_threads: usize,
    /// Overwrite an existing output file
    #[arg(long, default_value_t = false)]
    pub force: bool,
    #[command(flatten)]
    pub scoring: ScoringArgs,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}
