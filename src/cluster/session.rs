//! Genome operators for EST clustering
//!
//! Gene `i` names one other sequence `genome[i]`. The link becomes a graph
//! edge when the two sequences align significantly, and the genome scores
//! `sum((size - 1)^2)` over the resulting components, so large clusters of
//! mutually similar sequences are rewarded.

use rand::rngs::StdRng;
use rand::Rng;

use super::cache::SimilarityCache;
use super::graph::ClusterGraph;
use crate::align::ScoringParams;
use crate::config::EdgePolicy;
use crate::error::{Error, Result};
use crate::ga::{Genome, GenomeOperators};
use crate::sequence::Sequence;

/// Clustering state for one run: sequences, similarity cache and edge policy.
pub struct ClusterSession<'a> {
    cache: SimilarityCache<'a>,
    policy: EdgePolicy,
}

impl<'a> ClusterSession<'a> {
    pub fn new(
        sequences: &'a [Sequence],
        params: ScoringParams,
        row_capacity: usize,
        policy: EdgePolicy,
    ) -> Self {
        Self {
            cache: SimilarityCache::new(sequences, params, row_capacity),
            policy,
        }
    }

    pub fn sequences(&self) -> &'a [Sequence] {
        self.cache.sequences()
    }

    pub fn cache(&self) -> &SimilarityCache<'a> {
        &self.cache
    }

    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    fn len(&self) -> usize {
        self.cache.sequences().len()
    }

    /// Uniform choice among all indices except `i`. Needs at least two sequences.
    fn random_partner(&self, i: usize, rng: &mut StdRng) -> usize {
        let j = rng.gen_range(0..self.len() - 1);
        if j >= i {
            j + 1
        } else {
            j
        }
    }

    /// Graph of the significant links in `genome`.
    pub fn graph(&self, genome: &[usize]) -> Result<ClusterGraph> {
        let n = self.len();
        if genome.len() != n {
            return Err(Error::InvalidParameter(format!(
                "genome has {} genes for {} sequences",
                genome.len(),
                n
            )));
        }
        let mut graph = ClusterGraph::new(n);
        for (i, &j) in genome.iter().enumerate() {
            if self.cache.check_significant(i, j)? {
                graph.add_link(i, j, self.policy);
            }
        }
        Ok(graph)
    }

    /// Clusters (components with more than one member) implied by `genome`.
    pub fn clusters(&self, genome: &[usize]) -> Result<Vec<Vec<usize>>> {
        Ok(self.graph(genome)?.clusters())
    }

    fn mutate_one(&self, genome: &mut Genome, rng: &mut StdRng) -> Result<()> {
        let i = rng.gen_range(0..self.len());
        let j = self.random_partner(i, rng);
        self.cache.check_significant(i, j)?;
        genome[i] = j;
        Ok(())
    }
}

impl GenomeOperators for ClusterSession<'_> {
    fn genome_len(&self) -> usize {
        self.len()
    }

    /// Each gene gets a random partner; the pair is aligned right away so the
    /// cache is warm before evaluation.
    fn initialize(&self, rng: &mut StdRng) -> Result<Genome> {
        let n = self.len();
        if n < 2 {
            return Err(Error::TooFewSequences(n));
        }
        let mut genome = Vec::with_capacity(n);
        for i in 0..n {
            let j = self.random_partner(i, rng);
            self.cache.check_significant(i, j)?;
            genome.push(j);
        }
        Ok(genome)
    }

    /// `floor(rate * n)` random reassignments; when that is zero, a single
    /// reassignment with probability `rate * n`.
    fn mutate(&self, genome: &mut Genome, rate: f64, rng: &mut StdRng) -> Result<usize> {
        let n = self.len();
        if n < 2 {
            return Err(Error::TooFewSequences(n));
        }
        if !(0.0..=1.0).contains(&rate) {
            return Err(Error::InvalidParameter(format!(
                "mutation rate must be within [0, 1], got {}",
                rate
            )));
        }
        if genome.len() != n {
            return Err(Error::InvalidParameter(format!(
                "genome has {} genes for {} sequences",
                genome.len(),
                n
            )));
        }

        let expected = rate * n as f64;
        let count = expected.floor() as usize;
        if count == 0 {
            if rng.gen_bool(expected.min(1.0)) {
                self.mutate_one(genome, rng)?;
                return Ok(1);
            }
            return Ok(0);
        }
        for _ in 0..count {
            self.mutate_one(genome, rng)?;
        }
        Ok(count)
    }

    fn evaluate(&self, genome: &[usize]) -> Result<f64> {
        Ok(self.graph(genome)?.fitness())
    }
}
