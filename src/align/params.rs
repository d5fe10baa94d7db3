//! Scoring parameters for the local aligner

use crate::error::{Error, Result};

pub const DEFAULT_MATCH_REWARD: f64 = 1.0;
pub const DEFAULT_MISMATCH_PENALTY: f64 = -2.0;
pub const DEFAULT_GAP_OPEN_PENALTY: f64 = -6.0;
pub const DEFAULT_GAP_EXTEND_PENALTY: f64 = -0.2;
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: u32 = 40;

/// Affine-gap scoring for nucleotide local alignment.
///
/// Penalties are stored as negative numbers and added to the running score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringParams {
    pub match_reward: f64,
    pub mismatch_penalty: f64,
    pub gap_open_penalty: f64,
    pub gap_extend_penalty: f64,
    /// Roughly the number of matching columns a significant alignment needs.
    pub significance_threshold: u32,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            match_reward: DEFAULT_MATCH_REWARD,
            mismatch_penalty: DEFAULT_MISMATCH_PENALTY,
            gap_open_penalty: DEFAULT_GAP_OPEN_PENALTY,
            gap_extend_penalty: DEFAULT_GAP_EXTEND_PENALTY,
            significance_threshold: DEFAULT_SIGNIFICANCE_THRESHOLD,
        }
    }
}

impl ScoringParams {
    /// Minimum score of a significant alignment:
    /// `threshold * (match + 0.05 * mismatch)`.
    #[inline]
    pub fn significance_score(&self) -> f64 {
        self.significance_threshold as f64 * (self.match_reward + 0.05 * self.mismatch_penalty)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.match_reward > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "match reward must be positive, got {}",
                self.match_reward
            )));
        }
        for (name, value) in [
            ("mismatch penalty", self.mismatch_penalty),
            ("gap open penalty", self.gap_open_penalty),
            ("gap extend penalty", self.gap_extend_penalty),
        ] {
            if !(value <= 0.0) {
                return Err(Error::InvalidParameter(format!(
                    "{} must be zero or negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
