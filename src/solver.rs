use crate::utils::Distance;

/// A single-source shortest path algorithm over a borrowed graph.
pub trait ShortestPaths {
    /// Short label used in logs and reports.
    fn name(&self) -> &'static str;

    /// Distances from `source` to every vertex, `INFINITY` where unreachable.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a vertex of the graph.
    fn distances(&self, source: usize) -> Vec<Distance>;
}

pub(crate) fn check_source(source: usize, vertices: usize) {
    assert!(
        source < vertices,
        "source vertex {source} out of range for graph with {vertices} vertices"
    );
}
