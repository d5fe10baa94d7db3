//! Generational genetic algorithm over integer-array genomes
//!
//! The driver only sees genomes and scores; problem knowledge lives behind
//! [`GenomeOperators`].

pub mod params;
pub mod simple;
pub mod stats;

use rand::rngs::StdRng;

use crate::error::Result;

pub use params::GaParams;
pub use simple::{Individual, SimpleGa};
pub use stats::{GaStatistics, GenerationStats};

/// One gene per position; the meaning of a gene value is up to the operators.
pub type Genome = Vec<usize>;

/// Problem-specific genome operations.
///
/// `evaluate` is called from several threads at once.
pub trait GenomeOperators: Sync {
    /// Every genome handed to `evaluate` has exactly this many genes.
    fn genome_len(&self) -> usize;

    fn initialize(&self, rng: &mut StdRng) -> Result<Genome>;

    /// Mutates in place and returns the number of genes changed.
    fn mutate(&self, genome: &mut Genome, rate: f64, rng: &mut StdRng) -> Result<usize>;

    /// Higher is better; must be non-negative for roulette selection.
    fn evaluate(&self, genome: &[usize]) -> Result<f64>;
}
