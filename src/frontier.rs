use std::collections::BTreeSet;

use crate::utils::{Distance, VertexDistance};

/// Tentative vertices ordered by `(distance, vertex)`.
///
/// Callers keep at most one entry per vertex by removing the old key before
/// inserting an improved one.
#[derive(Debug, Default)]
pub struct Frontier {
    entries: BTreeSet<VertexDistance>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, vertex: usize, distance: Distance) -> bool {
        self.entries.insert(VertexDistance::new(vertex, distance))
    }

    pub fn pop_min(&mut self) -> Option<VertexDistance> {
        self.entries.pop_first()
    }

    /// Removes the entry keyed `(distance, vertex)`. Returns whether it was present.
    pub fn remove(&mut self, vertex: usize, distance: Distance) -> bool {
        self.entries.remove(&VertexDistance::new(vertex, distance))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
