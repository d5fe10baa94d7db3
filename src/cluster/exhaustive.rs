//! All-pairs clustering
//!
//! Aligns every unordered pair once and links the significant ones. Slow for
//! large inputs but exact; useful as a reference for the GA search.

use rayon::prelude::*;

use super::graph::ClusterGraph;
use crate::align::{align, ScoringParams};
use crate::config::EdgePolicy;
use crate::sequence::Sequence;

pub struct ExhaustiveClustering {
    pub graph: ClusterGraph,
    pub alignments: usize,
}

impl ExhaustiveClustering {
    pub fn fitness(&self) -> f64 {
        self.graph.fitness()
    }

    pub fn clusters(&self) -> Vec<Vec<usize>> {
        self.graph.clusters()
    }
}

/// Aligns all `n * (n - 1) / 2` pairs in parallel.
///
/// `on_row` is called once per finished top sequence.
pub fn cluster_all_pairs<F>(sequences: &[Sequence], params: ScoringParams, on_row: F) -> ExhaustiveClustering
where
    F: Fn() + Sync,
{
    let n = sequences.len();
    let links: Vec<Vec<usize>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let partners = ((i + 1)..n)
                .filter(|&j| align(&sequences[i], &sequences[j], params, true).significant())
                .collect();
            on_row();
            partners
        })
        .collect();

    let mut graph = ClusterGraph::new(n);
    for (i, partners) in links.iter().enumerate() {
        for &j in partners {
            graph.add_link(i, j, EdgePolicy::Undirected);
        }
    }

    ExhaustiveClustering {
        graph,
        alignments: n * n.saturating_sub(1) / 2,
    }
}
