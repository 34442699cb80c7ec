//! Graphviz export of graphs and shortest-path trees.
//!
//! The textual output is handed to an external drawing tool through
//! [`Renderer`]; nothing here depends on the raster result.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::{Result, SsspError};
use crate::graph::Graph;

pub const TREE_EDGE_COLOR: &str = "red";
pub const PLAIN_EDGE_COLOR: &str = "black";

/// Every edge with its weight label, no highlighting.
pub fn render_graph(graph: &Graph) -> String {
    let mut out = String::from("digraph G {\n");
    for (from, edge) in graph.iter_edges() {
        out.push_str(&format!(
            "    {} -> {} [label=\"{}\"];\n",
            from, edge.to, edge.weight
        ));
    }
    out.push_str("}\n");
    out
}

/// Every edge with its weight label, coloured as a tree edge exactly when
/// `predecessors[to] == Some(from)`.
///
/// # Panics
///
/// Panics if `predecessors` is shorter than the vertex count.
pub fn render_tree(graph: &Graph, predecessors: &[Option<usize>]) -> String {
    let mut out = String::from("digraph G {\n");
    for (from, edge) in graph.iter_edges() {
        let color = if predecessors[edge.to] == Some(from) {
            TREE_EDGE_COLOR
        } else {
            PLAIN_EDGE_COLOR
        };
        out.push_str(&format!(
            "    {} -> {} [label=\"{}\", color={}];\n",
            from, edge.to, edge.weight, color
        ));
    }
    out.push_str("}\n");
    out
}

pub fn write_graph<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()> {
    write_text(path.as_ref(), &render_graph(graph))
}

pub fn write_tree<P: AsRef<Path>>(
    graph: &Graph,
    predecessors: &[Option<usize>],
    path: P,
) -> Result<()> {
    write_text(path.as_ref(), &render_tree(graph, predecessors))
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    let unwritable = |source| SsspError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(unwritable)?);
    writer.write_all(text.as_bytes()).map_err(unwritable)?;
    writer.flush().map_err(unwritable)?;
    debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Invocation of the external Graphviz-compatible drawing tool.
#[derive(Debug, Clone)]
pub struct Renderer {
    pub command: PathBuf,
    pub format: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            command: PathBuf::from("dot"),
            format: "png".to_string(),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command<P: Into<PathBuf>>(mut self, command: P) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_format<S: Into<String>>(mut self, format: S) -> Self {
        self.format = format.into();
        self
    }

    /// Runs `<command> -T<format> <description> -o <image>` and waits for it.
    pub fn render(&self, description: &Path, image: &Path) -> Result<()> {
        debug!(
            "rendering {} -> {} with {}",
            description.display(),
            image.display(),
            self.command.display()
        );
        let status = Command::new(&self.command)
            .arg(format!("-T{}", self.format))
            .arg(description)
            .arg("-o")
            .arg(image)
            .status()
            .map_err(|e| {
                SsspError::RendererFailed(format!(
                    "could not run {}: {e}",
                    self.command.display()
                ))
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SsspError::RendererFailed(format!(
                "{} exited with {status}",
                self.command.display()
            )))
        }
    }
}
