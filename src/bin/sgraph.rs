//! CLI entry point for the `sgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use simplegraph::cli::commands::{self, WalkOrder, WalkParams};
use simplegraph::{GraphConfig, GraphError};

#[derive(Parser)]
#[command(
    name = "sgraph",
    about = "simplegraph CLI: walk small graphs given as edge specs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Store weight 0 on undirected edges regardless of the spec
    #[arg(long)]
    discard_undirected_weights: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the graph from a vertex
    Walk {
        /// Label of the origin vertex
        #[arg(long)]
        from: String,
        /// Frontier order: "queue" (breadth-first) or "stack"
        #[arg(long, default_value = "queue")]
        order: String,
        /// Maximum number of vertices to print
        #[arg(long, default_value = "32")]
        limit: usize,
        /// Emit each vertex at most once
        #[arg(long)]
        distinct: bool,
        /// Edge specs: a-b (undirected), a>b (directed), optional :weight.
        /// A bare label declares a vertex with no edges.
        #[arg(required = true)]
        edges: Vec<String>,
    },
    /// Show the edges and neighbors of one vertex
    Neighbors {
        /// Vertex label
        vertex: String,
        /// Edge specs
        #[arg(required = true)]
        edges: Vec<String>,
    },
    /// Show vertex and edge counts
    Info {
        /// Edge specs
        #[arg(required = true)]
        edges: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let config = if cli.discard_undirected_weights {
        GraphConfig::unweighted_undirected()
    } else {
        GraphConfig::default()
    };

    let result = match cli.command {
        Commands::Walk {
            from,
            order,
            limit,
            distinct,
            edges,
        } => {
            let params = WalkParams {
                from,
                order: WalkOrder::from_name(&order),
                limit,
                distinct,
            };
            commands::cmd_walk(&edges, &params, config, json)
        }
        Commands::Neighbors { vertex, edges } => {
            commands::cmd_neighbors(&edges, &vertex, config, json)
        }
        Commands::Info { edges } => commands::cmd_info(&edges, config, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidEdgeSpec(_) => 3,
            GraphError::UnknownLabel(_) | GraphError::VertexNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
