//! CLI entry point for the `gpath` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graphpath::cli::commands;
use graphpath::generate::GeneratorConfig;
use graphpath::GraphError;

#[derive(Parser)]
#[command(
    name = "gpath",
    about = "Shortest paths and random demo graphs for graph visualizations"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a shortest path between two nodes of an edge list
    Path {
        /// Path to the JSON edge list
        file: PathBuf,
        /// Source node ID
        source: String,
        /// Target node ID
        target: String,
    },
    /// Generate a random graph as JSON
    Generate {
        /// Minimum node count
        #[arg(long, default_value = "5")]
        min_nodes: usize,
        /// Maximum node count
        #[arg(long, default_value = "20")]
        max_nodes: usize,
        /// Maximum links leaving each node
        #[arg(long, default_value = "3")]
        max_links: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Node, edge and component counts of an edge list
    Info {
        /// Path to the JSON edge list
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Path {
            file,
            source,
            target,
        } => commands::cmd_path(&file, &source, &target, json),
        Commands::Generate {
            min_nodes,
            max_nodes,
            max_links,
            seed,
            pretty,
            output,
        } => {
            let config = GeneratorConfig {
                min_nodes,
                max_nodes,
                max_links,
                seed,
            };
            commands::cmd_generate(&config, pretty, output.as_deref())
        }
        Commands::Info { file } => commands::cmd_info(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::MalformedEdge(_) => 2,
            GraphError::UnknownSource(_) | GraphError::UnknownTarget(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
