//! Dijkstra over an ordered frontier set with re-keying.
//!
//! Every vertex sits in the frontier at most once: an improved vertex has its
//! stale `(distance, vertex)` entry removed before the new one is inserted, so
//! extraction never sees outdated keys.

use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::solver::{ShortestPaths, check_source};
use crate::utils::{Distance, INFINITY};

/// Frontier traffic of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelaxationStats {
    /// Entries inserted after an improving relaxation. The source seed is not counted.
    pub insertions: usize,
    /// Extract-min operations.
    pub removals: usize,
    /// Edge updates that improved a distance.
    pub relaxations: usize,
    /// Outdated entries dropped when a queued vertex was re-keyed.
    pub stale_removals: usize,
}

/// Result of [`PrioritySolver::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    pub source: usize,
    pub distances: Vec<Distance>,
    /// Vertex whose edge last improved each distance; `None` for the source
    /// and for unreachable vertices.
    pub predecessors: Vec<Option<usize>>,
    pub stats: RelaxationStats,
}

impl ShortestPathTree {
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distances[vertex] != INFINITY
    }

    /// Vertices from the source to `target`, or `None` if `target` is unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

pub struct PrioritySolver<'g> {
    graph: &'g Graph,
}

impl<'g> PrioritySolver<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// # Panics
    ///
    /// Panics if `source` is not a vertex of the graph.
    pub fn solve(&self, source: usize) -> ShortestPathTree {
        let n = self.graph.vertices;
        check_source(source, n);

        let mut distances = vec![INFINITY; n];
        let mut predecessors = vec![None; n];
        let mut stats = RelaxationStats::default();
        let mut frontier = Frontier::new();

        distances[source] = 0;
        frontier.insert(source, 0);

        while let Some(current) = frontier.pop_min() {
            stats.removals += 1;
            let u = current.vertex;
            let base = distances[u];

            for edge in self.graph.neighbors(u) {
                let v = edge.to;
                let candidate = base + Distance::from(edge.weight);
                if candidate < distances[v] {
                    if distances[v] != INFINITY && frontier.remove(v, distances[v]) {
                        stats.stale_removals += 1;
                    }
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    frontier.insert(v, candidate);
                    stats.insertions += 1;
                    stats.relaxations += 1;
                }
            }
        }

        ShortestPathTree {
            source,
            distances,
            predecessors,
            stats,
        }
    }
}

impl ShortestPaths for PrioritySolver<'_> {
    fn name(&self) -> &'static str {
        "priority"
    }

    fn distances(&self, source: usize) -> Vec<Distance> {
        self.solve(source).distances
    }
}
