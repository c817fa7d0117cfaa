//! Graph-Algorithmen über die gerenderte Element-Menge.
//!
//! Nodes werden über ihren Index (0..n) angesprochen, Edges als
//! `(source, target)`-Indexpaare.

use std::collections::HashSet;

/// Gedämpfte Wichtigkeit pro Node (gerichtet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRank {
    /// Maximale Iterationen
    pub iterations: usize,
    /// Dämpfungsfaktor
    pub damping: f64,
    /// Abbruch, sobald sich die Summe der Änderungen darunter bewegt
    pub tolerance: f64,
}

impl PageRank {
    /// PageRank mit Standard-Toleranz.
    pub fn new(iterations: usize, damping: f64) -> Self {
        Self {
            iterations,
            damping: damping.clamp(0.0, 1.0),
            tolerance: 1e-6,
        }
    }

    /// Berechnet die Scores. Summe der Scores ist 1 (bei n > 0).
    ///
    /// Die Masse von Nodes ohne ausgehende Edges wird gleichmäßig verteilt.
    pub fn run(&self, node_count: usize, edges: &[(usize, usize)]) -> Vec<f64> {
        if node_count == 0 {
            return Vec::new();
        }
        let n = node_count as f64;
        let mut out_degree = vec![0usize; node_count];
        for &(source, target) in edges {
            if source < node_count && target < node_count {
                out_degree[source] += 1;
            }
        }

        let mut rank = vec![1.0 / n; node_count];
        let mut next = vec![0.0; node_count];

        for _ in 0..self.iterations {
            let dangling: f64 = rank
                .iter()
                .zip(&out_degree)
                .filter(|(_, &out)| out == 0)
                .map(|(r, _)| r)
                .sum();
            let base = (1.0 - self.damping) / n + self.damping * dangling / n;
            next.iter_mut().for_each(|v| *v = base);

            for &(source, target) in edges {
                if source < node_count && target < node_count {
                    next[target] += self.damping * rank[source] / out_degree[source] as f64;
                }
            }

            let delta: f64 = rank.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
            std::mem::swap(&mut rank, &mut next);
            if delta < self.tolerance {
                break;
            }
        }
        rank
    }
}

/// Normierter Grad pro Node: verschiedene Nachbarn (ungerichtet, ohne
/// Self-Loops) geteilt durch `n - 1`. Bei `n <= 1` überall 0.
pub fn degree_centrality(node_count: usize, edges: &[(usize, usize)]) -> Vec<f64> {
    if node_count <= 1 {
        return vec![0.0; node_count];
    }
    let mut neighbors: Vec<HashSet<usize>> = vec![HashSet::new(); node_count];
    for &(source, target) in edges {
        if source == target || source >= node_count || target >= node_count {
            continue;
        }
        neighbors[source].insert(target);
        neighbors[target].insert(source);
    }
    let denominator = (node_count - 1) as f64;
    neighbors
        .iter()
        .map(|set| set.len() as f64 / denominator)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pagerank_on_cycle_is_uniform() {
        let scores = PageRank::new(50, 0.85).run(3, &[(0, 1), (1, 2), (2, 0)]);
        for score in &scores {
            assert_relative_eq!(*score, 1.0 / 3.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn pagerank_favors_hub_and_sums_to_one() {
        let scores = PageRank::new(50, 0.85).run(4, &[(1, 0), (2, 0), (3, 0)]);
        assert!(scores[0] > scores[1]);
        assert_relative_eq!(scores[1], scores[2], epsilon = 1e-9);
        assert_relative_eq!(scores.iter().sum::<f64>(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn pagerank_empty_graph() {
        assert!(PageRank::new(50, 0.85).run(0, &[]).is_empty());
    }

    #[test]
    fn degree_counts_distinct_undirected_neighbors() {
        // Doppelte Edge, Gegenrichtung und Self-Loop zählen nicht extra
        let edges = [(0, 1), (0, 1), (1, 0), (0, 2), (2, 2)];
        let scores = degree_centrality(4, &edges);
        assert_relative_eq!(scores[0], 2.0 / 3.0);
        assert_relative_eq!(scores[1], 1.0 / 3.0);
        assert_relative_eq!(scores[2], 1.0 / 3.0);
        assert_relative_eq!(scores[3], 0.0);
    }

    #[test]
    fn degree_single_node_is_zero() {
        assert_eq!(degree_centrality(1, &[(0, 0)]), vec![0.0]);
        assert!(degree_centrality(0, &[]).is_empty());
    }
}
