use clap::Args;
use std::path::PathBuf;

use crate::algorithm::common::ScoringArgs;
use crate::common::DEFAULT_TRACE_FILE;
use crate::config::{DEFAULT_HASH_LOAD, DEFAULT_MAX_TABLE_SIZE};
use crate::ga::params::DEFAULT_PARAM_FILE;

#[derive(Args, Debug)]
pub struct ClusterArgs {
    /// FASTA input (stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Cluster listing (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// GA parameter file
    #[arg(short, long, default_value = DEFAULT_PARAM_FILE)]
    pub params: PathBuf,
    /// Target load factor of the similarity cache rows
    #[arg(short, long, default_value_t = DEFAULT_HASH_LOAD)]
    pub load: f64,
    /// Maximum pre-allocated entries per cache row
    #[arg(short, long, default_value_t = DEFAULT_MAX_TABLE_SIZE)]
    pub size: usize,
    /// Write per-generation GA statistics to this file
    #[arg(long)]
    pub stats: Option<PathBuf>,
    /// List member names only instead of full sequences
    #[arg(short, long, default_value_t = false)]
    pub names: bool,
    /// Write a run trace (default file name when no value is given)
    #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_TRACE_FILE)]
    pub trace: Option<PathBuf>,
    /// How gene links become edges: undirected or forward
    #[arg(long, default_value = "undirected")]
    pub edge_policy: String,
    /// Seed for a reproducible run (overrides the parameter file)
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, default_value_t = 0)]
    pub num_threads: usize,
    /// Overwrite existing output, trace and statistics files
    #[arg(long, default_value_t = false)]
    pub force: bool,
    #[command(flatten)]
    pub scoring: ScoringArgs,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}
