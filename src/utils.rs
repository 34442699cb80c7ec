use std::cmp::Ordering;

/// Edge weight. Weights read from a matrix are strictly positive.
pub type Weight = u32;

/// Accumulated path length.
pub type Distance = u64;

/// Sentinel for unreached vertices.
///
/// A finite distance never exceeds `(vertices - 1) * Weight::MAX`, which stays
/// far below this value for any vertex count below 2^32. Weights are only
/// ever added to finite distances.
pub const INFINITY: Distance = Distance::MAX;

/// Frontier entry, ordered by distance first and vertex id second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexDistance {
    pub distance: Distance,
    pub vertex: usize,
}

impl VertexDistance {
    pub fn new(vertex: usize, distance: Distance) -> Self {
        Self { distance, vertex }
    }
}

impl Ord for VertexDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for VertexDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
