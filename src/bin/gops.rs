//! CLI entry point for the `gops` command-line tool.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::info;

use graph_ops::cli::{render, repl, Command, Outcome, ReplState, Session};
use graph_ops::{
    EdgeListReader, GraphBuilder, GraphError, GraphInput, GraphResult, OutputFormat,
    SessionConfig,
};

#[derive(Parser)]
#[command(
    name = "gops",
    about = "gops - interactive in-memory graph with traversal and path queries"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long)]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// TOML session config; flags given here take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Build a directed graph
    #[arg(long)]
    directed: bool,

    /// Read a weight with every edge record
    #[arg(long)]
    weighted: bool,

    /// Edge list file (`n m` then `u v [w]` per edge); stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Stop all-paths enumeration after this many paths
    #[arg(long)]
    max_paths: Option<usize>,

    /// Do not read or write the REPL history file
    #[arg(long)]
    no_history: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (the default)
    Repl,
    /// Execute a single command and exit, e.g. `gops run bfs 1`
    Run {
        /// Command and its arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        words: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> GraphResult<SessionConfig> {
    let mut config = SessionConfig::load_or_default(cli.config.as_deref())?;
    config.directed |= cli.directed;
    config.weighted |= cli.weighted;
    if let Some(ref name) = cli.format {
        config.format = OutputFormat::from_name(name)
            .ok_or_else(|| GraphError::Config(format!("unknown output format: {name}")))?;
    }
    if cli.max_paths.is_some() {
        config.max_paths = cli.max_paths;
    }
    if cli.no_history {
        config.history = false;
    }
    Ok(config)
}

fn read_input(cli: &Cli, config: &SessionConfig) -> GraphResult<GraphInput> {
    match cli.input {
        Some(ref path) => EdgeListReader::read_from_file(path, config.weighted),
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                eprintln!("Enter number of nodes and edges, then one edge per line (u v [w]):");
            }
            EdgeListReader::read_from(stdin.lock(), config.weighted)
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli)?;
    let input = read_input(&cli, &config)?;
    info!(
        "building {} {} graph: {} nodes declared, {} edge records",
        if config.directed { "directed" } else { "undirected" },
        if config.weighted { "weighted" } else { "unweighted" },
        input.node_count,
        input.records.len()
    );

    let graph = GraphBuilder::new()
        .directed(config.directed)
        .weighted(config.weighted)
        .edges(input.records)
        .build();
    let session = Session::new(graph, input.node_count).with_max_paths(config.max_paths);

    match cli.command {
        None | Some(Commands::Repl) => {
            repl::run(ReplState::new(session, config.format), config.history)?;
        }
        Some(Commands::Run { words }) => {
            let mut session = session;
            let command = Command::parse(&words.join(" "), config.weighted)?;
            let outcome = session.execute(command)?;
            if !matches!(outcome, Outcome::Exit) {
                println!("{}", render(&outcome, config.format));
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = match e.downcast_ref::<GraphError>() {
            Some(GraphError::Io(_)) => 1,
            Some(GraphError::Parse { .. }) | Some(GraphError::Config(_)) => 2,
            Some(GraphError::InvalidArgument(_)) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
