use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::info;
use sssp_lab::{
    ComplexityHarness, Graph, HarnessConfig, INFINITY, PrioritySolver, Renderer, save_report,
    write_graph, write_tree,
};

/// Dense-matrix shortest paths: Graphviz export and solver timing comparison
#[derive(Parser)]
#[command(name = "sssp-lab")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OutputArgs {
    /// Directory for generated .dot, image and report files
    #[arg(long, global = true, default_value = ".")]
    output_dir: PathBuf,

    /// Graphviz-compatible drawing command
    #[arg(long, global = true, default_value = "dot")]
    renderer: PathBuf,

    /// Image format passed to the renderer as -T<format>
    #[arg(long, global = true, default_value = "png")]
    format: String,

    /// Only write the .dot description, skip the drawing tool
    #[arg(long, global = true)]
    no_render: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the input graph as-is
    Display {
        /// Dense adjacency matrix file
        input: PathBuf,

        /// Output base name (without extension)
        #[arg(short, long, default_value = "output")]
        out: String,
    },

    /// Run Dijkstra from the file's start vertex and export the shortest-path tree
    Shortest {
        /// Dense adjacency matrix file
        input: PathBuf,

        /// Output base name (without extension)
        #[arg(short, long, default_value = "output")]
        out: String,
    },

    /// Time the linear-scan and priority solvers on complete random graphs
    Compare {
        /// Vertex counts to measure (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,

        /// Report file name
        #[arg(short, long, default_value = "complexity.dat")]
        report: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let output = &cli.output;

    match &cli.command {
        Commands::Display { input, out } => {
            let loaded = Graph::from_matrix_file(input)?;
            let dot = output.output_dir.join(format!("{out}.dot"));
            write_graph(&loaded.graph, &dot)?;
            println!("Graph description written to {}", dot.display());
            render(output, &dot, out);
        }
        Commands::Shortest { input, out } => {
            let loaded = Graph::from_matrix_file(input)?;
            let graph = &loaded.graph;
            let tree = PrioritySolver::new(graph).solve(loaded.start);

            let dot = output.output_dir.join(format!("{out}.dot"));
            write_tree(graph, &tree.predecessors, &dot)?;
            println!("Shortest-path tree written to {}", dot.display());
            render(output, &dot, out);

            println!("Vertices: {}", graph.vertices);
            println!("Edges: {}", graph.edge_count());
            println!("Insertions: {}", tree.stats.insertions);
            println!("Removals: {}", tree.stats.removals);
            println!("Relaxations: {}", tree.stats.relaxations);
            println!("Stale removals: {}", tree.stats.stale_removals);
            println!("Shortest distances from vertex {}:", loaded.start);
            for (vertex, &distance) in tree.distances.iter().enumerate() {
                if distance == INFINITY {
                    println!("  {vertex} -> unreachable");
                } else {
                    println!("  {vertex} -> {distance}");
                }
            }
        }
        Commands::Compare { sizes, report } => {
            let mut config = HarnessConfig::new();
            if let Some(sizes) = sizes {
                config = config.with_sizes(sizes.clone());
            }

            info!("measuring sizes {:?}", config.sizes);
            let samples = ComplexityHarness::new(config).run();

            println!(
                "{:<10} {:<15} {:<15}",
                "Vertices", "Simple (ms)", "Priority (ms)"
            );
            println!("{}", "-".repeat(42));
            for sample in &samples {
                println!(
                    "{:<10} {:<15.3} {:<15.3}",
                    sample.vertices, sample.simple_millis, sample.priority_millis
                );
            }

            let path = output.output_dir.join(report);
            save_report(&samples, &path)?;
            println!("Report saved to {}", path.display());
        }
    }

    Ok(())
}

fn render(output: &OutputArgs, dot: &Path, base: &str) {
    if output.no_render {
        return;
    }

    let renderer = Renderer::new()
        .with_command(&output.renderer)
        .with_format(&output.format);
    let image = output
        .output_dir
        .join(format!("{base}.{}", renderer.format));

    match renderer.render(dot, &image) {
        Ok(()) => println!("Image saved to {}", image.display()),
        Err(e) => eprintln!("{e}"),
    }
}
