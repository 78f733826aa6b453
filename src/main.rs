//! `graphs-alg` - run graph algorithms on graphs given as text.
//!
//! # Commands
//!
//! - `graphs-alg building-tree` - build a DFS spanning tree of the start vertex's component
//!
//! # Examples
//!
//! ```bash
//! # Read a regular matrix from a file and print the tree as an edge set
//! graphs-alg building-tree -f graph.txt --output-format edge-set -v 0
//!
//! # Read an edge set from stdin, ask for the start vertex and write a matrix file
//! graphs-alg building-tree --input-format edge-set -o tree.txt
//! ```

use std::{
    io::{BufRead, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trigraphs::{
    algo::build_spanning_tree,
    io::{FileFormat, GraphRead, GraphWrite},
    prelude::*,
};

/// This program allows you to use some algorithms on graphs (all available algorithms see below).
#[derive(Parser)]
#[command(name = "graphs-alg")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log progress to stderr
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all log output except errors
    #[arg(long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build tree from provided graph
    #[command(
        name = "building-tree",
        long_about = "Build tree from provided graph.\n\nAt this moment there is only one implementation. It is based on DFS."
    )]
    BuildingTree(BuildingTreeArgs),
}

/// Text formats a graph can be read from or written to
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Matrix size followed by the matrix
    RegularMatrix,
    /// Vertices as alphabet characters followed by edges as pairs of them
    EdgeSet,
}

impl From<FormatArg> for FileFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::RegularMatrix => FileFormat::RegularMatrix,
            FormatArg::EdgeSet => FileFormat::EdgeSet,
        }
    }
}

#[derive(Args)]
struct BuildingTreeArgs {
    /// File describing the input graph. If not provided, the program reads stdin
    #[arg(short = 'f', long = "file")]
    input_file: Option<PathBuf>,

    /// Input format of the graph
    #[arg(long, value_enum, default_value_t = FormatArg::RegularMatrix)]
    input_format: FormatArg,

    /// File to write the resulting tree to. If not provided, the result is written to stdout
    #[arg(short = 'o', long = "output")]
    output_file: Option<PathBuf>,

    /// Output format of the tree, see --input-format
    #[arg(long, value_enum, default_value_t = FormatArg::RegularMatrix)]
    output_format: FormatArg,

    /// Index of the vertex the algorithm starts from. If not provided, the program reads it from
    /// stdin after the graph; edge-set input on stdin then has to end with an empty line.
    /// Vertices are given by index also for the edge-set format
    #[arg(short = 'v', long = "vertex", allow_negative_numbers = true)]
    start_vertex: Option<i64>,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Prints `message` to stderr if a user is typing into stdin
fn prompt(message: &str) -> std::io::Result<()> {
    if std::io::stdin().is_terminal() {
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(message.as_bytes())?;
        stderr.flush()?;
    }
    Ok(())
}

fn read_start_vertex<R: BufRead>(mut reader: R) -> Result<i64> {
    prompt("Please enter start vertex index: ").context("Failed to write prompt")?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read start vertex")?;

    match line.trim().parse() {
        Ok(vertex) => Ok(vertex),
        Err(_) => bail!("Invalid start vertex \"{}\"", line.trim()),
    }
}

fn building_tree(args: BuildingTreeArgs) -> Result<()> {
    let input_format = FileFormat::from(args.input_format);
    let output_format = FileFormat::from(args.output_format);
    let mut stdin = std::io::stdin().lock();

    let graph = match &args.input_file {
        Some(path) => Graph::try_from_file(path, input_format)
            .with_context(|| format!("Failed to read graph from {}", path.display()))?,
        None => {
            let hint = match input_format {
                FileFormat::EdgeSet => " (finish with an empty line)",
                FileFormat::RegularMatrix => "",
            };
            prompt(&format!(
                "Please enter the graph in {input_format} format{hint}:\n"
            ))
            .context("Failed to write prompt")?;
            Graph::try_from_reader(&mut stdin, input_format)
                .context("Failed to read graph from stdin")?
        }
    };

    let start = match args.start_vertex {
        Some(vertex) => vertex,
        None => read_start_vertex(&mut stdin)?,
    };
    let start = graph.vertex(start)?;

    info!(
        vertices = graph.vertex_count(),
        edges = graph.number_of_edges(),
        %start,
        "building spanning tree"
    );
    let tree = build_spanning_tree(start, &graph)?;

    match &args.output_file {
        Some(path) => tree
            .try_write_to_file(path, output_format)
            .with_context(|| format!("Failed to write tree to {}", path.display()))?,
        None => tree
            .try_write_to_writer(std::io::stdout().lock(), output_format)
            .context("Failed to write tree to stdout")?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::BuildingTree(args) => building_tree(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
