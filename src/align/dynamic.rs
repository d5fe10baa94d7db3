//! Local alignment fill (Gotoh-style affine gaps over match strengths)
//!
//! Cell `(i, j)` pairs top residue `i` with bottom residue `j`.
//!
//! Border cells (`i == 0` or `j == 0`) are seeded with `strength * match`
//! when the residues have any strength, otherwise 0, and carry a NULL pointer.
//! Interior cells take the maximum of:
//! - null: 0
//! - left: `score(i-1, j)` + extend if that cell came from the left, else open
//! - up:   `score(i, j-1)` + extend if that cell came from above, else open
//! - diag: `score(i-1, j-1)` + `strength * match`, or mismatch when strength is 0
//!
//! Ties keep the first candidate in the order null, left, up, diag.
//!
//! Cells are visited column by column (`j` outer, `i` inner), borders
//! included. The reported end cell is the first cell in that order whose
//! score strictly exceeds every earlier cell.
//!
//! Border cells count toward the best score, unlike an interior-only scan:
//! `G` against `CCG` scores 1 from the border match, and identical
//! sequences of length L score exactly L.

use super::matrix::{DpMatrix, Pointer};
use super::params::ScoringParams;
use crate::sequence::nucleotide::{match_strength, Nucleotide};

/// Best cell found by a fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillOutcome {
    pub score: f64,
    pub x_end: usize,
    pub y_end: usize,
    /// The fill returned as soon as the best score became significant.
    pub stopped_early: bool,
}

struct BestCell {
    score: f64,
    x: usize,
    y: usize,
}

impl BestCell {
    fn new() -> Self {
        Self {
            score: 0.0,
            x: 0,
            y: 0,
        }
    }

    #[inline]
    fn offer(&mut self, score: f64, i: usize, j: usize) -> bool {
        if score > self.score {
            self.score = score;
            self.x = i;
            self.y = j;
            true
        } else {
            false
        }
    }

    fn outcome(&self, stopped_early: bool) -> FillOutcome {
        FillOutcome {
            score: self.score,
            x_end: self.x,
            y_end: self.y,
            stopped_early,
        }
    }
}

#[inline]
fn border_score(params: &ScoringParams, strength: f64) -> f64 {
    if strength > 0.0 {
        strength * params.match_reward
    } else {
        0.0
    }
}

/// Recurrence for one interior cell.
#[inline]
fn interior_cell(
    params: &ScoringParams,
    strength: f64,
    diag: f64,
    left: (f64, Pointer),
    up: (f64, Pointer),
) -> (f64, Pointer) {
    let mut best = 0.0;
    let mut pointer = Pointer::Null;

    let left_score = left.0
        + if left.1 == Pointer::Left {
            params.gap_extend_penalty
        } else {
            params.gap_open_penalty
        };
    if left_score > best {
        best = left_score;
        pointer = Pointer::Left;
    }

    let up_score = up.0
        + if up.1 == Pointer::Up {
            params.gap_extend_penalty
        } else {
            params.gap_open_penalty
        };
    if up_score > best {
        best = up_score;
        pointer = Pointer::Up;
    }

    let diag_score = diag
        + if strength > 0.0 {
            strength * params.match_reward
        } else {
            params.mismatch_penalty
        };
    if diag_score > best {
        best = diag_score;
        pointer = Pointer::Diag;
    }

    (best, pointer)
}

/// Fills the whole matrix and keeps it for traceback.
///
/// With `stop_early`, returns as soon as the best score reaches the
/// significance score; cells after that point stay zero/NULL.
pub fn fill_matrix(
    top: &[Nucleotide],
    bottom: &[Nucleotide],
    params: &ScoringParams,
    stop_early: bool,
) -> (DpMatrix, FillOutcome) {
    let rows = top.len();
    let cols = bottom.len();
    let mut matrix = DpMatrix::new(rows, cols);
    let mut best = BestCell::new();
    let cutoff = params.significance_score();

    for j in 0..cols {
        for i in 0..rows {
            let strength = match_strength(top[i], bottom[j]);
            let (score, pointer) = if i == 0 || j == 0 {
                (border_score(params, strength), Pointer::Null)
            } else {
                // Interior cells only read cells that are already filled.
                let left = (matrix.score(i - 1, j), decode(&matrix, i - 1, j));
                let up = (matrix.score(i, j - 1), decode(&matrix, i, j - 1));
                interior_cell(params, strength, matrix.score(i - 1, j - 1), left, up)
            };
            matrix.set(i, j, score, pointer);

            if best.offer(score, i, j) && stop_early && best.score >= cutoff {
                return (matrix, best.outcome(true));
            }
        }
    }

    (matrix, best.outcome(false))
}

#[inline]
fn decode(matrix: &DpMatrix, i: usize, j: usize) -> Pointer {
    // Cells written by this fill always hold a valid pointer.
    matrix.pointer(i, j).unwrap_or(Pointer::Null)
}

/// Same recurrence as [`fill_matrix`] keeping only two columns.
///
/// Produces the same score, end cell and early-stop point; used when no
/// traceback is needed.
pub fn fill_score_only(
    top: &[Nucleotide],
    bottom: &[Nucleotide],
    params: &ScoringParams,
    stop_early: bool,
) -> FillOutcome {
    let rows = top.len();
    let mut prev: Vec<(f64, Pointer)> = vec![(0.0, Pointer::Null); rows];
    let mut cur: Vec<(f64, Pointer)> = vec![(0.0, Pointer::Null); rows];
    let mut best = BestCell::new();
    let cutoff = params.significance_score();

    for (j, &b) in bottom.iter().enumerate() {
        for i in 0..rows {
            let strength = match_strength(top[i], b);
            let cell = if i == 0 || j == 0 {
                (border_score(params, strength), Pointer::Null)
            } else {
                interior_cell(params, strength, prev[i - 1].0, cur[i - 1], prev[i])
            };
            cur[i] = cell;

            if best.offer(cell.0, i, j) && stop_early && best.score >= cutoff {
                return best.outcome(true);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    best.outcome(false)
}
