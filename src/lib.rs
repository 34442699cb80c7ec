pub mod dijkstra;
pub mod error;
pub mod export;
pub mod frontier;
pub mod graph;
pub mod harness;
pub mod linear_scan;
pub mod solver;
pub mod utils;

pub use dijkstra::{PrioritySolver, RelaxationStats, ShortestPathTree};
pub use error::{Result, SsspError};
pub use export::{Renderer, render_graph, render_tree, write_graph, write_tree};
pub use graph::{Edge, Graph, MatrixInput};
pub use harness::{ComplexityHarness, HarnessConfig, TimingSample, save_report, write_report};
pub use linear_scan::LinearScanSolver;
pub use solver::ShortestPaths;
pub use utils::{Distance, INFINITY, Weight};
