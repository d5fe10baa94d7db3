//! Cluster graph built from a genome and its connected components

use crate::config::EdgePolicy;

/// Adjacency lists over sequence indices.
#[derive(Debug, Clone, Default)]
pub struct ClusterGraph {
    adjacency: Vec<Vec<usize>>,
}

impl ClusterGraph {
    pub fn new(nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); nodes],
        }
    }

    /// Adds the link `from -> to`; under [`EdgePolicy::Undirected`] the
    /// reverse edge is added as well.
    pub fn add_link(&mut self, from: usize, to: usize, policy: EdgePolicy) {
        self.adjacency[from].push(to);
        if policy == EdgePolicy::Undirected {
            self.adjacency[to].push(from);
        }
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Depth-first walk from `start` over unvisited nodes.
    ///
    /// Marks every reached node in `visited`, calls `visit` in pre-order
    /// (neighbors taken in adjacency-list order) and returns how many nodes
    /// were reached. Returns 0 if `start` was already visited.
    pub fn traverse_cluster<F: FnMut(usize)>(
        &self,
        visited: &mut [bool],
        start: usize,
        mut visit: F,
    ) -> usize {
        let mut count = 0;
        let mut stack = vec![start];

        while let Some(node) = stack.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;
            visit(node);
            count += 1;
            // Reverse push keeps the first neighbor on top.
            for &next in self.adjacency[node].iter().rev() {
                if !visited[next] {
                    stack.push(next);
                }
            }
        }

        count
    }

    /// Every component, singletons included, each started from the lowest
    /// unvisited index.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.len()];
        let mut components = Vec::new();
        for start in 0..self.len() {
            let mut members = Vec::new();
            if self.traverse_cluster(&mut visited, start, |node| members.push(node)) > 0 {
                components.push(members);
            }
        }
        components
    }

    /// Components with more than one member.
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        self.components()
            .into_iter()
            .filter(|members| members.len() > 1)
            .collect()
    }

    /// Sum of `(size - 1)^2` over all components.
    pub fn fitness(&self) -> f64 {
        let mut visited = vec![false; self.len()];
        (0..self.len())
            .map(|start| self.traverse_cluster(&mut visited, start, |_| {}))
            .filter(|&size| size > 0)
            .map(|size| ((size - 1) * (size - 1)) as f64)
            .sum()
    }
}
