use std::fs::File;
use std::io::Read;
use std::ops::RangeInclusive;
use std::path::Path;

use log::debug;
use rand::Rng;

use crate::error::{Result, SsspError};
use crate::utils::Weight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub weight: Weight,
}

/// Directed weighted graph stored as adjacency lists.
///
/// The vertex count is fixed at construction. Edges are appended in insertion
/// order and never removed; parallel edges are kept.
#[derive(Debug, Clone)]
pub struct Graph {
    pub vertices: usize,
    pub edges: Vec<Vec<Edge>>,
}

/// A graph read from a dense matrix file together with its declared start vertex.
#[derive(Debug, Clone)]
pub struct MatrixInput {
    pub start: usize,
    pub graph: Graph,
}

impl Graph {
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            edges: vec![Vec::new(); vertices],
        }
    }

    /// Appends `from -> to`. No validation happens here: callers filter
    /// non-positive weights, and an out-of-range `from` panics like a slice index.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: Weight) {
        self.edges[from].push(Edge { to, weight });
    }

    pub fn neighbors(&self, vertex: usize) -> &[Edge] {
        &self.edges[vertex]
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices == 0
    }

    /// Every edge as `(from, edge)`, grouped by source vertex in insertion order.
    pub fn iter_edges(&self) -> impl Iterator<Item = (usize, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .flat_map(|(from, out)| out.iter().map(move |edge| (from, edge)))
    }

    /// Complete directed graph: every ordered pair of distinct vertices gets
    /// one edge with a weight drawn uniformly from `weights`.
    pub fn complete<R: Rng>(
        vertices: usize,
        weights: RangeInclusive<Weight>,
        rng: &mut R,
    ) -> Self {
        let mut graph = Self::new(vertices);
        for from in 0..vertices {
            graph.edges[from].reserve(vertices.saturating_sub(1));
            for to in 0..vertices {
                if from != to {
                    graph.add_edge(from, to, rng.random_range(weights.clone()));
                }
            }
        }
        graph
    }

    /// Loads a dense matrix file: start vertex, vertex count, then N x N
    /// row-major weights where anything `<= 0` means "no edge".
    pub fn from_matrix_file<P: AsRef<Path>>(path: P) -> Result<MatrixInput> {
        let path = path.as_ref();
        let unreadable = |source| SsspError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let mut text = String::new();
        File::open(path)
            .map_err(unreadable)?
            .read_to_string(&mut text)
            .map_err(unreadable)?;

        let input = Self::from_matrix_str(&text)?;
        debug!(
            "loaded {}: {} vertices, {} edges, start {}",
            path.display(),
            input.graph.vertices,
            input.graph.edge_count(),
            input.start
        );
        Ok(input)
    }

    /// Parses the dense matrix format from an in-memory string.
    pub fn from_matrix_str(text: &str) -> Result<MatrixInput> {
        let all: Vec<&str> = text.split_whitespace().collect();
        let mut tokens = all.iter().copied();

        let start = next_integer(&mut tokens, "start vertex")?;
        let vertices = next_integer(&mut tokens, "vertex count")?;
        let vertices = usize::try_from(vertices).map_err(|_| {
            SsspError::MalformedInput(format!("vertex count {vertices} is negative"))
        })?;

        // Dimensions are checked against the stream before anything is allocated.
        let entries = all.len() - 2;
        if vertices.checked_mul(vertices) != Some(entries) {
            return Err(SsspError::MalformedInput(format!(
                "declared {vertices}x{vertices} matrix but {entries} entries are present"
            )));
        }

        let start = usize::try_from(start)
            .ok()
            .filter(|&s| s < vertices)
            .ok_or_else(|| {
                SsspError::MalformedInput(format!(
                    "start vertex {start} is outside 0..{vertices}"
                ))
            })?;

        let mut graph = Self::new(vertices);
        for from in 0..vertices {
            for to in 0..vertices {
                let entry = next_integer(&mut tokens, "matrix entry").map_err(|err| match err {
                    SsspError::MalformedInput(msg) => {
                        SsspError::MalformedInput(format!("{msg} at row {from}, column {to}"))
                    }
                    other => other,
                })?;
                if entry > 0 {
                    let weight = Weight::try_from(entry).map_err(|_| {
                        SsspError::MalformedInput(format!(
                            "weight {entry} at row {from}, column {to} does not fit in {} bits",
                            Weight::BITS
                        ))
                    })?;
                    graph.add_edge(from, to, weight);
                }
            }
        }

        Ok(MatrixInput { start, graph })
    }

    /// Rebuilds the dense matrix from the adjacency lists. Absent edges are 0;
    /// of several parallel edges the lightest one is kept.
    pub fn to_dense_matrix(&self) -> Vec<Vec<i64>> {
        let mut matrix = vec![vec![0i64; self.vertices]; self.vertices];
        for (from, edge) in self.iter_edges() {
            let cell = &mut matrix[from][edge.to];
            let weight = i64::from(edge.weight);
            if *cell == 0 || weight < *cell {
                *cell = weight;
            }
        }
        matrix
    }
}

fn next_integer<'a, I>(tokens: &mut I, what: &str) -> Result<i64>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| SsspError::MalformedInput(format!("missing {what}")))?;
    token
        .parse::<i64>()
        .map_err(|_| SsspError::MalformedInput(format!("{what} {token:?} is not an integer")))
}
