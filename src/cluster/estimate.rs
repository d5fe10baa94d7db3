//! Expected number of pairwise alignments in a GA run
//!
//! Every gene evaluation touches one ordered pair out of `n * (n - 1)`.
//! After `t` evaluations the expected number of distinct ordered pairs seen is
//!
//! ```text
//! done(0) = 0
//! done(t) = done(t-1) + 2 - 2 * done(t-1) / (n * (n - 1))
//! ```
//!
//! where the `2` accounts for both orders of a newly seen unordered pair.
//! The GA touches about `n*P` genes at initialization and `n*P*G*p` during
//! mutation, rounded up.

/// Gene evaluations over a run, `floor(n*P + n*P*G*p) + 1`.
pub fn gene_evaluations(
    n: usize,
    population_size: usize,
    generations: usize,
    p_mutation: f64,
) -> u64 {
    let n = n as f64;
    let p = population_size as f64;
    let g = generations as f64;
    (n * p + n * p * g * p_mutation).max(0.0).floor() as u64 + 1
}

/// Expected distinct ordered pairs looked up during a run.
pub fn expected_alignments(
    n: usize,
    population_size: usize,
    generations: usize,
    p_mutation: f64,
) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let pairs = (n * (n - 1)) as f64;
    let mut done = 0.0;
    for _ in 0..gene_evaluations(n, population_size, generations, p_mutation) {
        done += 2.0 - 2.0 * done / pairs;
    }
    done
}

/// Expected dynamic-programming runs; each unordered pair is aligned once.
pub fn expected_dp_calls(expected_alignments: f64) -> f64 {
    expected_alignments / 2.0
}

/// Per-row capacity of the similarity cache:
/// `min(expected / n / load, n, max_size)`.
pub fn table_size(expected_alignments: f64, n: usize, load: f64, max_size: usize) -> usize {
    if n == 0 || !(load > 0.0) {
        return 0;
    }
    let size = (expected_alignments / n as f64 / load).max(0.0) as usize;
    size.min(n).min(max_size)
}
