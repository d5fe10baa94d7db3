use clap::Args;

use crate::align::params::{
    ScoringParams, DEFAULT_GAP_EXTEND_PENALTY, DEFAULT_GAP_OPEN_PENALTY, DEFAULT_MATCH_REWARD,
    DEFAULT_MISMATCH_PENALTY, DEFAULT_SIGNIFICANCE_THRESHOLD,
};

/// Alignment scoring options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ScoringArgs {
    /// Reward for a perfect match (scaled by match strength)
    #[arg(long = "match", default_value_t = DEFAULT_MATCH_REWARD)]
    pub match_reward: f64,
    #[arg(long, default_value_t = DEFAULT_MISMATCH_PENALTY, allow_negative_numbers = true)]
    pub mismatch: f64,
    #[arg(long, default_value_t = DEFAULT_GAP_OPEN_PENALTY, allow_negative_numbers = true)]
    pub gap_open: f64,
    #[arg(long, default_value_t = DEFAULT_GAP_EXTEND_PENALTY, allow_negative_numbers = true)]
    pub gap_extend: f64,
    /// Approximate number of matching columns a significant alignment needs
    #[arg(long, default_value_t = DEFAULT_SIGNIFICANCE_THRESHOLD)]
    pub significance: u32,
}

impl ScoringArgs {
    pub fn to_params(&self) -> ScoringParams {
        ScoringParams {
            match_reward: self.match_reward,
            mismatch_penalty: self.mismatch,
            gap_open_penalty: self.gap_open,
            gap_extend_penalty: self.gap_extend,
            significance_threshold: self.significance,
        }
    }
}
