//! Empirical running-time comparison of the two solvers.
//!
//! For each requested size a fresh complete digraph is generated and both
//! solvers are timed from vertex 0.

use std::fs::File;
use std::hint::black_box;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};
use rand::Rng;

use crate::dijkstra::PrioritySolver;
use crate::error::{Result, SsspError};
use crate::graph::Graph;
use crate::linear_scan::LinearScanSolver;
use crate::solver::ShortestPaths;
use crate::utils::Weight;

pub const REPORT_HEADER: &str = "Vertices Simple Logarithmic";

const SOURCE: usize = 0;

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Vertex counts to measure, in order.
    pub sizes: Vec<usize>,
    pub min_weight: Weight,
    pub max_weight: Weight,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 50, 100, 200, 400, 800],
            min_weight: 1,
            max_weight: 10,
        }
    }
}

impl HarnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Weight range for generated edges. Clamped to at least 1 and ordered.
    pub fn with_weights(mut self, min: Weight, max: Weight) -> Self {
        let min = min.max(1);
        self.min_weight = min;
        self.max_weight = max.max(min);
        self
    }
}

/// One measured size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSample {
    pub vertices: usize,
    pub simple_millis: f64,
    pub priority_millis: f64,
}

pub struct ComplexityHarness {
    config: HarnessConfig,
}

impl ComplexityHarness {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn run(&self) -> Vec<TimingSample> {
        self.run_with_rng(&mut rand::rng())
    }

    /// Empty sizes have no source vertex and are skipped.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> Vec<TimingSample> {
        let weights = self.config.min_weight..=self.config.max_weight;
        let mut samples = Vec::with_capacity(self.config.sizes.len());

        for &size in &self.config.sizes {
            if size == 0 {
                warn!("skipping size 0: the graph has no source vertex");
                continue;
            }

            let graph = Graph::complete(size, weights.clone(), rng);
            let simple_millis = time_solver(&LinearScanSolver::new(&graph), SOURCE);
            let priority_millis = time_solver(&PrioritySolver::new(&graph), SOURCE);

            info!(
                "{size} vertices: simple {simple_millis:.3} ms, priority {priority_millis:.3} ms"
            );
            samples.push(TimingSample {
                vertices: size,
                simple_millis,
                priority_millis,
            });
        }

        samples
    }
}

fn time_solver<S: ShortestPaths>(solver: &S, source: usize) -> f64 {
    let start = Instant::now();
    black_box(solver.distances(black_box(source)));
    let millis = start.elapsed().as_secs_f64() * 1000.0;
    debug!("{} solver finished in {millis:.3} ms", solver.name());
    millis
}

pub fn write_report<W: Write>(samples: &[TimingSample], mut writer: W) -> io::Result<()> {
    writeln!(writer, "{REPORT_HEADER}")?;
    for sample in samples {
        writeln!(
            writer,
            "{} {:.3} {:.3}",
            sample.vertices, sample.simple_millis, sample.priority_millis
        )?;
    }
    writer.flush()
}

pub fn save_report<P: AsRef<Path>>(samples: &[TimingSample], path: P) -> Result<()> {
    let path = path.as_ref();
    let unwritable = |source| SsspError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(unwritable)?;
    write_report(samples, BufWriter::new(file)).map_err(unwritable)
}
