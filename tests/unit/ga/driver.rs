//! Unit tests for ga/simple.rs

use gaest::align::ScoringParams;
use gaest::cluster::{cluster_all_pairs, ClusterSession};
use gaest::config::EdgePolicy;
use gaest::ga::{GaParams, Genome, GenomeOperators, SimpleGa};
use gaest::Result;
use rand::rngs::StdRng;
use rand::Rng;

use crate::helpers::homopolymers;

/// Counts ones in a bit-string genome.
struct OneMax {
    len: usize,
}

impl GenomeOperators for OneMax {
    fn genome_len(&self) -> usize {
        self.len
    }

    fn initialize(&self, rng: &mut StdRng) -> Result<Genome> {
        Ok((0..self.len).map(|_| rng.gen_range(0..2)).collect())
    }

    fn mutate(&self, genome: &mut Genome, rate: f64, rng: &mut StdRng) -> Result<usize> {
        let mut flips = 0;
        for gene in genome.iter_mut() {
            if rng.gen_bool(rate) {
                *gene = 1 - *gene;
                flips += 1;
            }
        }
        Ok(flips)
    }

    fn evaluate(&self, genome: &[usize]) -> Result<f64> {
        Ok(genome.iter().sum::<usize>() as f64)
    }
}

fn params(population_size: usize, generations: usize, seed: u64) -> GaParams {
    GaParams {
        population_size,
        generations,
        p_mutation: 0.05,
        seed: Some(seed),
        ..GaParams::default()
    }
}

#[test]
fn test_callback_sees_every_generation() {
    let ops = OneMax { len: 16 };
    let mut ga = SimpleGa::new(&ops, params(10, 12, 1)).unwrap();
    let mut seen = Vec::new();
    let best = ga.evolve(|stats| seen.push(stats.generation)).unwrap().cloned();

    assert_eq!(seen, (0..=12).collect::<Vec<_>>());
    assert_eq!(ga.generation(), 12);
    assert!(ga.done());
    assert_eq!(ga.population().len(), 10);
    assert_eq!(ga.statistics().evaluations(), 10 * 13);
    let best = best.unwrap();
    assert_eq!(best.genome.len(), 16);
    assert_eq!(Some(best.fitness), ga.statistics().last().map(|s| s.best));
}

#[test]
fn test_elitism_never_loses_the_best() {
    let ops = OneMax { len: 32 };
    let mut ga = SimpleGa::new(&ops, params(8, 60, 9)).unwrap();
    ga.evolve(|_| {}).unwrap();

    let bests: Vec<f64> = ga.statistics().history().iter().map(|s| s.best).collect();
    assert_eq!(bests.len(), 61);
    assert!(bests.windows(2).all(|w| w[1] >= w[0]), "{:?}", bests);
    for s in ga.statistics().history() {
        assert!(s.worst <= s.mean && s.mean <= s.best);
    }
}

#[test]
fn test_best_survives_without_elitism() {
    let ops = OneMax { len: 32 };
    let params = GaParams {
        elitism: false,
        p_mutation: 0.3,
        ..params(6, 40, 17)
    };
    let mut ga = SimpleGa::new(&ops, params).unwrap();
    let best = ga.evolve(|_| {}).unwrap().cloned().unwrap();

    let history = ga.statistics().history();
    let peak = ga.statistics().best_ever().unwrap();
    assert_eq!(best.fitness, peak);
    assert_eq!(best.fitness, ops.evaluate(&best.genome).unwrap());
    assert!(history.iter().all(|s| s.best <= best.fitness));
    assert_eq!(ga.best_ever(), Some(&best));
}

/// Produces genomes one gene short.
struct ShortGenomes;

impl GenomeOperators for ShortGenomes {
    fn genome_len(&self) -> usize {
        4
    }

    fn initialize(&self, _rng: &mut StdRng) -> Result<Genome> {
        Ok(vec![0; 3])
    }

    fn mutate(&self, _genome: &mut Genome, _rate: f64, _rng: &mut StdRng) -> Result<usize> {
        Ok(0)
    }

    fn evaluate(&self, _genome: &[usize]) -> Result<f64> {
        Ok(0.0)
    }
}

#[test]
fn test_wrong_genome_length_rejected() {
    let mut ga = SimpleGa::new(&ShortGenomes, params(4, 1, 0)).unwrap();
    assert!(ga.initialize().is_err());
}

#[test]
fn test_seeded_runs_repeat() {
    let ops = OneMax { len: 24 };
    let run = |seed| {
        let mut ga = SimpleGa::new(&ops, params(12, 20, seed)).unwrap();
        let best = ga.evolve(|_| {}).unwrap().cloned();
        (best, ga.statistics().history().to_vec())
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn test_step_needs_population() {
    let ops = OneMax { len: 4 };
    let mut ga = SimpleGa::new(&ops, params(4, 1, 0)).unwrap();
    assert!(ga.step().is_err());
    ga.initialize().unwrap();
    ga.step().unwrap();
    assert_eq!(ga.generation(), 1);
}

#[test]
fn test_invalid_params_rejected() {
    let ops = OneMax { len: 4 };
    let bad = GaParams {
        p_crossover: 2.0,
        ..GaParams::default()
    };
    assert!(SimpleGa::new(&ops, bad).is_err());
}

#[test]
fn test_clustering_run_is_reproducible() {
    let seqs = homopolymers(&['A', 'C', 'A', 'G', 'C', 'A', 'T', 'A'], 60);
    let exhaustive = cluster_all_pairs(&seqs, ScoringParams::default(), || {});

    let run = || {
        let session = ClusterSession::new(&seqs, ScoringParams::default(), 8, EdgePolicy::Undirected);
        let mut ga = SimpleGa::new(&session, params(20, 30, 2024)).unwrap();
        let best = ga.evolve(|_| {}).unwrap().cloned().unwrap();
        let clusters = session.clusters(&best.genome).unwrap();
        (best, clusters)
    };

    let (first, clusters) = run();
    let (second, _) = run();
    assert_eq!(first, second);
    assert!(first.fitness <= exhaustive.fitness());
    assert_eq!(first.genome.len(), seqs.len());
    for cluster in &clusters {
        let letter = seqs[cluster[0]].residues()[0];
        assert!(cluster.iter().all(|&i| seqs[i].residues()[0] == letter));
    }
}
