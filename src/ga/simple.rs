//! Simple generational GA
//!
//! Each generation replaces the whole population:
//! 1. pick two parents by roulette wheel on raw scores
//! 2. one-point crossover with probability `p_crossover`, else copy
//! 3. mutate each child with `p_mutation`
//! 4. score all children in parallel
//! 5. with elitism, the previous best replaces the new worst if it scores higher
//!
//! Random choices come from a single `StdRng` in a fixed order, so a seeded
//! run is reproducible regardless of the thread count.
//!
//! The best individual seen in any generation is kept apart from the
//! population and is what [`SimpleGa::evolve`] returns.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::params::GaParams;
use super::stats::{GaStatistics, GenerationStats};
use super::{Genome, GenomeOperators};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub genome: Genome,
    pub fitness: f64,
}

pub struct SimpleGa<'o, O: GenomeOperators> {
    ops: &'o O,
    params: GaParams,
    rng: StdRng,
    population: Vec<Individual>,
    generation: usize,
    stats: GaStatistics,
    best_ever: Option<Individual>,
}

impl<'o, O: GenomeOperators> SimpleGa<'o, O> {
    pub fn new(ops: &'o O, params: GaParams) -> Result<Self> {
        params.validate()?;
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            ops,
            params,
            rng,
            population: Vec::new(),
            generation: 0,
            stats: GaStatistics::default(),
            best_ever: None,
        })
    }

    pub fn params(&self) -> &GaParams {
        &self.params
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    pub fn statistics(&self) -> &GaStatistics {
        &self.stats
    }

    pub fn done(&self) -> bool {
        !self.population.is_empty() && self.generation >= self.params.generations
    }

    /// Highest-scoring individual of the current population; the first one
    /// wins ties.
    pub fn best(&self) -> Option<&Individual> {
        self.population
            .iter()
            .reduce(|best, ind| if ind.fitness > best.fitness { ind } else { best })
    }

    /// Best individual over every generation so far; the earliest wins ties.
    pub fn best_ever(&self) -> Option<&Individual> {
        self.best_ever.as_ref()
    }

    fn track_best(&mut self) {
        let improved = match (self.best(), self.best_ever.as_ref()) {
            (Some(current), Some(kept)) => current.fitness > kept.fitness,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if improved {
            self.best_ever = self.best().cloned();
        }
    }

    fn evaluate_all(&self, genomes: Vec<Genome>) -> Result<Vec<Individual>> {
        let ops = self.ops;
        let len = ops.genome_len();
        if let Some(bad) = genomes.iter().find(|g| g.len() != len) {
            return Err(Error::InvalidParameter(format!(
                "genome has {} genes, expected {}",
                bad.len(),
                len
            )));
        }
        genomes
            .into_par_iter()
            .map(|genome| {
                let fitness = ops.evaluate(&genome)?;
                Ok(Individual { genome, fitness })
            })
            .collect()
    }

    fn record(&mut self, evaluations: usize) {
        let scores: Vec<f64> = self.population.iter().map(|ind| ind.fitness).collect();
        self.stats
            .record(GenerationStats::from_scores(self.generation, &scores), evaluations);
    }

    /// Creates and scores generation 0.
    pub fn initialize(&mut self) -> Result<()> {
        let mut genomes = Vec::with_capacity(self.params.population_size);
        for _ in 0..self.params.population_size {
            genomes.push(self.ops.initialize(&mut self.rng)?);
        }
        self.population = self.evaluate_all(genomes)?;
        self.generation = 0;
        self.stats = GaStatistics::default();
        self.best_ever = None;
        self.track_best();
        self.record(self.population.len());
        Ok(())
    }

    /// Produces and scores the next generation.
    pub fn step(&mut self) -> Result<()> {
        if self.population.is_empty() {
            return Err(Error::InvalidParameter(
                "population is not initialized".to_string(),
            ));
        }

        let size = self.population.len();
        let wheel = RouletteWheel::new(self.population.iter().map(|ind| ind.fitness));
        let mut children: Vec<Genome> = Vec::with_capacity(size);

        while children.len() < size {
            let mom = &self.population[wheel.select(&mut self.rng)].genome;
            let dad = &self.population[wheel.select(&mut self.rng)].genome;
            let (mut first, mut second) = if self.rng.gen_bool(self.params.p_crossover) {
                one_point_crossover(mom, dad, &mut self.rng)
            } else {
                (mom.clone(), dad.clone())
            };

            self.ops.mutate(&mut first, self.params.p_mutation, &mut self.rng)?;
            children.push(first);
            if children.len() < size {
                self.ops.mutate(&mut second, self.params.p_mutation, &mut self.rng)?;
                children.push(second);
            }
        }

        let mut next = self.evaluate_all(children)?;

        if self.params.elitism {
            if let (Some(elite), Some(worst)) = (self.best(), worst_index(&next)) {
                if elite.fitness > next[worst].fitness {
                    next[worst] = elite.clone();
                }
            }
        }

        self.population = next;
        self.generation += 1;
        self.track_best();
        self.record(size);
        Ok(())
    }

    /// Runs until the configured number of generations, calling
    /// `on_generation` after generation 0 and after every step.
    pub fn evolve<F>(&mut self, mut on_generation: F) -> Result<Option<&Individual>>
    where
        F: FnMut(&GenerationStats),
    {
        self.initialize()?;
        if let Some(stats) = self.stats.last() {
            on_generation(stats);
        }
        while !self.done() {
            self.step()?;
            if let Some(stats) = self.stats.last() {
                on_generation(stats);
            }
        }
        Ok(self.best_ever())
    }
}

fn worst_index(population: &[Individual]) -> Option<usize> {
    population
        .iter()
        .enumerate()
        .reduce(|worst, cur| if cur.1.fitness < worst.1.fitness { cur } else { worst })
        .map(|(idx, _)| idx)
}

/// Fitness-proportional selection. Falls back to uniform choice when the
/// total score is zero or not finite.
struct RouletteWheel {
    cumulative: Vec<f64>,
}

impl RouletteWheel {
    fn new<I: Iterator<Item = f64>>(scores: I) -> Self {
        let mut total = 0.0;
        let cumulative = scores
            .map(|s| {
                total += s.max(0.0);
                total
            })
            .collect();
        Self { cumulative }
    }

    fn select(&self, rng: &mut StdRng) -> usize {
        let len = self.cumulative.len();
        let total = self.cumulative.last().copied().unwrap_or(0.0);
        if !(total > 0.0) || !total.is_finite() {
            return rng.gen_range(0..len);
        }
        let target = rng.gen::<f64>() * total;
        self.cumulative
            .partition_point(|&c| c <= target)
            .min(len - 1)
    }
}

/// Children swap tails after a random cut point in `1..len`.
fn one_point_crossover(mom: &[usize], dad: &[usize], rng: &mut StdRng) -> (Genome, Genome) {
    let len = mom.len().min(dad.len());
    if len < 2 {
        return (mom.to_vec(), dad.to_vec());
    }
    let cut = rng.gen_range(1..len);
    let mut first = mom[..cut].to_vec();
    first.extend_from_slice(&dad[cut..]);
    let mut second = dad[..cut].to_vec();
    second.extend_from_slice(&mom[cut..]);
    (first, second)
}
