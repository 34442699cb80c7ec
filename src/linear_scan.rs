//! O(V^2) Dijkstra without a priority structure.
//!
//! Each round scans every unvisited vertex for the smallest tentative
//! distance. It exists as the timing baseline for [`crate::PrioritySolver`].

use crate::graph::Graph;
use crate::solver::{ShortestPaths, check_source};
use crate::utils::{Distance, INFINITY};

pub struct LinearScanSolver<'g> {
    graph: &'g Graph,
}

impl<'g> LinearScanSolver<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// # Panics
    ///
    /// Panics if `source` is not a vertex of the graph.
    pub fn solve(&self, source: usize) -> Vec<Distance> {
        let n = self.graph.vertices;
        check_source(source, n);

        let mut distances = vec![INFINITY; n];
        let mut visited = vec![false; n];
        distances[source] = 0;

        for _ in 0..n {
            let Some(u) = closest_unvisited(&distances, &visited) else {
                break;
            };
            visited[u] = true;

            let base = distances[u];
            for edge in self.graph.neighbors(u) {
                let candidate = base + Distance::from(edge.weight);
                if candidate < distances[edge.to] {
                    distances[edge.to] = candidate;
                }
            }
        }

        distances
    }
}

/// First unvisited vertex with the smallest finite distance. `None` once every
/// remaining vertex is unreached, since nothing further can be relaxed.
fn closest_unvisited(distances: &[Distance], visited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (v, &distance) in distances.iter().enumerate() {
        if visited[v] || distance == INFINITY {
            continue;
        }
        if best.is_none_or(|b| distance < distances[b]) {
            best = Some(v);
        }
    }
    best
}

impl ShortestPaths for LinearScanSolver<'_> {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn distances(&self, source: usize) -> Vec<Distance> {
        self.solve(source)
    }
}
