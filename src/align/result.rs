use super::dynamic::{fill_matrix, fill_score_only, FillOutcome};
use super::matrix::DpMatrix;
use super::params::ScoringParams;
use super::traceback::{trace, TracedPath};
use crate::error::{Error, Result};
use crate::sequence::Sequence;

/// Local alignment of two borrowed sequences.
///
/// Lifecycle: created (possibly without sequences), aligned, optionally
/// traced. Changing the sequences or the parameters returns it to the
/// unaligned state.
pub struct Alignment<'s> {
    sequences: Option<(&'s Sequence, &'s Sequence)>,
    params: ScoringParams,
    retain_matrix: bool,
    stop_early: bool,
    outcome: Option<FillOutcome>,
    matrix: Option<DpMatrix>,
    path: Option<TracedPath>,
}

impl<'s> Alignment<'s> {
    /// An alignment with no sequences assigned yet.
    pub fn new(params: ScoringParams) -> Self {
        Self {
            sequences: None,
            params,
            retain_matrix: false,
            stop_early: false,
            outcome: None,
            matrix: None,
            path: None,
        }
    }

    pub fn with_sequences(top: &'s Sequence, bottom: &'s Sequence, params: ScoringParams) -> Self {
        let mut alignment = Self::new(params);
        alignment.sequences = Some((top, bottom));
        alignment
    }

    /// Assigns both sequences and aligns them.
    pub fn input(&mut self, top: &'s Sequence, bottom: &'s Sequence, stop_early: bool) -> f64 {
        self.sequences = Some((top, bottom));
        self.reset();
        self.run(top, bottom, stop_early)
    }

    /// Keep the DP matrix after aligning so tracing does not refill it.
    pub fn retain_matrix(&mut self, retain: bool) {
        self.retain_matrix = retain;
        if !retain {
            self.matrix = None;
        }
    }

    pub fn set_params(&mut self, params: ScoringParams) {
        self.params = params;
        self.reset();
    }

    /// Aligns the assigned sequences and returns the best local score.
    pub fn align(&mut self, stop_early: bool) -> Result<f64> {
        let (top, bottom) = self.sequences.ok_or(Error::MissingSequences)?;
        self.reset();
        Ok(self.run(top, bottom, stop_early))
    }

    fn reset(&mut self) {
        self.outcome = None;
        self.matrix = None;
        self.path = None;
    }

    fn run(&mut self, top: &Sequence, bottom: &Sequence, stop_early: bool) -> f64 {
        self.stop_early = stop_early;
        let outcome = if self.retain_matrix {
            let (matrix, outcome) =
                fill_matrix(top.residues(), bottom.residues(), &self.params, stop_early);
            self.matrix = Some(matrix);
            outcome
        } else {
            fill_score_only(top.residues(), bottom.residues(), &self.params, stop_early)
        };
        self.outcome = Some(outcome);
        outcome.score
    }

    /// Top and bottom sequences, if assigned.
    pub fn sequences(&self) -> Option<(&'s Sequence, &'s Sequence)> {
        self.sequences
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    pub fn is_aligned(&self) -> bool {
        self.outcome.is_some()
    }

    /// Best local score; 0 before aligning.
    pub fn score(&self) -> f64 {
        self.outcome.map_or(0.0, |o| o.score)
    }

    pub fn stopped_early(&self) -> bool {
        self.outcome.is_some_and(|o| o.stopped_early)
    }

    /// End cell of the best local alignment (0-based top, bottom).
    pub fn end(&self) -> Option<(usize, usize)> {
        self.outcome.map(|o| (o.x_end, o.y_end))
    }

    pub fn significant(&self) -> bool {
        self.is_aligned() && self.score() >= self.params.significance_score()
    }

    pub fn path(&self) -> Option<&TracedPath> {
        self.path.as_ref()
    }

    /// Traces the best alignment, aligning first if needed.
    ///
    /// When the matrix was not retained the fill is repeated with the same
    /// early-stop setting, which reproduces the same end cell.
    pub fn trace_path(&mut self) -> Result<&TracedPath> {
        if self.path.is_none() {
            let (top, bottom) = self.sequences.ok_or(Error::MissingSequences)?;
            if self.matrix.is_none() {
                // Unaligned alignments are filled without early stop.
                let stop_early = self.outcome.is_some() && self.stop_early;
                let (matrix, outcome) =
                    fill_matrix(top.residues(), bottom.residues(), &self.params, stop_early);
                self.stop_early = stop_early;
                self.matrix = Some(matrix);
                self.outcome = Some(outcome);
            }
            let outcome = self.outcome.ok_or(Error::MissingSequences)?;
            let matrix = self.matrix.as_ref().ok_or(Error::MissingSequences)?;
            let path = trace(
                matrix,
                top.residues(),
                bottom.residues(),
                outcome.x_end,
                outcome.y_end,
                outcome.score,
            )?;
            self.path = Some(path);
            if !self.retain_matrix {
                self.matrix = None;
            }
        }
        self.path.as_ref().ok_or(Error::MissingSequences)
    }
}

/// Aligns two sequences, keeping only the score and end cell.
pub fn align<'s>(
    top: &'s Sequence,
    bottom: &'s Sequence,
    params: ScoringParams,
    stop_early: bool,
) -> Alignment<'s> {
    let mut alignment = Alignment::new(params);
    alignment.input(top, bottom, stop_early);
    alignment
}

/// Aligns two sequences without early stop and traces the result.
pub fn align_with_traceback<'s>(
    top: &'s Sequence,
    bottom: &'s Sequence,
    params: ScoringParams,
) -> Result<Alignment<'s>> {
    let mut alignment = Alignment::new(params);
    alignment.retain_matrix(true);
    alignment.input(top, bottom, false);
    alignment.trace_path()?;
    Ok(alignment)
}
