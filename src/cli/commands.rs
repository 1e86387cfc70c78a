//! Command set, dispatch against the graph, and result rendering.

use serde::Serialize;

use crate::cli::repl_complete::COMMANDS;
use crate::config::OutputFormat;
use crate::engine::{
    AllPathsParams, AllPathsResult, ConversionReport, PathResult, QueryEngine, RemovalReport,
    ShortestPathParams, TraversalOrder, TraversalParams, TraversalResult, WriteEngine,
};
use crate::graph::Graph;
use crate::types::{DegreeReport, Edge, GraphError, GraphResult, NodeId, DEFAULT_WEIGHT};

/// Every operation the driver can ask of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    View,
    AddEdge {
        source: NodeId,
        target: NodeId,
        weight: i64,
    },
    DeleteEdge {
        source: NodeId,
        target: NodeId,
    },
    ConvertToUnweighted,
    ConvertToUndirected,
    Bfs {
        start: NodeId,
    },
    Dfs {
        start: NodeId,
    },
    HasPath {
        source: NodeId,
        target: NodeId,
    },
    AllPaths {
        source: NodeId,
        target: NodeId,
    },
    ShortestPath {
        source: NodeId,
        target: NodeId,
    },
    Degree {
        node: NodeId,
    },
    Stats,
    Help,
    Exit,
}

impl Command {
    /// Parse one input line, e.g. `add 1 2 5` or `/bfs 1`.
    ///
    /// The classic menu numbers are accepted in place of names (`6 1` is
    /// `bfs 1`). A weight on `add` is only read when `weighted` is set.
    pub fn parse(line: &str, weighted: bool) -> GraphResult<Self> {
        let line = line.trim();
        let line = line.strip_prefix('/').unwrap_or(line);
        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or("help");
        let args: Vec<&str> = tokens.collect();

        let cmd = match canonical_name(name) {
            Some("view") => Self::View,
            Some("add") => {
                let (source, target) = two_ids(&args, "add <u> <v> [w]")?;
                let weight = if weighted {
                    match args.get(2) {
                        Some(w) => parse_int(w, "add <u> <v> [w]")?,
                        None => DEFAULT_WEIGHT,
                    }
                } else {
                    DEFAULT_WEIGHT
                };
                Self::AddEdge {
                    source,
                    target,
                    weight,
                }
            }
            Some("delete") => {
                let (source, target) = two_ids(&args, "delete <u> <v>")?;
                Self::DeleteEdge { source, target }
            }
            Some("unweighted") => Self::ConvertToUnweighted,
            Some("undirected") => Self::ConvertToUndirected,
            Some("bfs") => Self::Bfs {
                start: one_id(&args, "bfs <start>")?,
            },
            Some("dfs") => Self::Dfs {
                start: one_id(&args, "dfs <start>")?,
            },
            Some("has-path") => {
                let (source, target) = two_ids(&args, "has-path <u> <v>")?;
                Self::HasPath { source, target }
            }
            Some("all-paths") => {
                let (source, target) = two_ids(&args, "all-paths <u> <v>")?;
                Self::AllPaths { source, target }
            }
            Some("shortest") => {
                let (source, target) = two_ids(&args, "shortest <u> <v>")?;
                Self::ShortestPath { source, target }
            }
            Some("degree") => Self::Degree {
                node: one_id(&args, "degree <node>")?,
            },
            Some("stats") => Self::Stats,
            Some("help") => Self::Help,
            Some("exit") => Self::Exit,
            _ => return Err(GraphError::UnknownCommand(name.to_string())),
        };
        Ok(cmd)
    }
}

fn canonical_name(name: &str) -> Option<&'static str> {
    let canonical = match name.to_lowercase().as_str() {
        "1" | "view" | "show" => "view",
        "2" | "add" | "add-edge" => "add",
        "3" | "delete" | "del" | "delete-edge" => "delete",
        "4" | "unweighted" | "to-unweighted" => "unweighted",
        "5" | "undirected" | "to-undirected" => "undirected",
        "6" | "bfs" => "bfs",
        "7" | "dfs" => "dfs",
        "8" | "has-path" | "reachable" => "has-path",
        "9" | "all-paths" | "paths" => "all-paths",
        "10" | "shortest" | "shortest-path" | "path" => "shortest",
        "11" | "degree" => "degree",
        "stats" | "info" => "stats",
        "help" | "h" | "?" => "help",
        "0" | "exit" | "quit" | "q" => "exit",
        _ => return None,
    };
    Some(canonical)
}

fn parse_int(tok: &str, usage: &str) -> GraphResult<NodeId> {
    tok.parse()
        .map_err(|_| GraphError::Usage(format!("{usage} (not an integer: {tok:?})")))
}

fn one_id(args: &[&str], usage: &str) -> GraphResult<NodeId> {
    match args.first() {
        Some(tok) => parse_int(tok, usage),
        None => Err(GraphError::Usage(usage.to_string())),
    }
}

fn two_ids(args: &[&str], usage: &str) -> GraphResult<(NodeId, NodeId)> {
    match (args.first(), args.get(1)) {
        (Some(a), Some(b)) => Ok((parse_int(a, usage)?, parse_int(b, usage)?)),
        _ => Err(GraphError::Usage(usage.to_string())),
    }
}

/// One row of the adjacency view.
#[derive(Debug, Clone, Serialize)]
pub struct AdjacencyRow {
    pub node: NodeId,
    pub edges: Vec<Edge>,
}

/// The result of executing a [`Command`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Adjacency {
        directed: bool,
        weighted: bool,
        rows: Vec<AdjacencyRow>,
    },
    EdgeAdded {
        source: NodeId,
        target: NodeId,
        weight: i64,
    },
    EdgeDeleted {
        report: RemovalReport,
    },
    Converted {
        mode: &'static str,
        report: ConversionReport,
    },
    Traversal {
        result: TraversalResult,
    },
    Reachability {
        source: NodeId,
        target: NodeId,
        reachable: bool,
    },
    Paths {
        source: NodeId,
        target: NodeId,
        result: AllPathsResult,
    },
    ShortestPath {
        source: NodeId,
        target: NodeId,
        result: PathResult,
    },
    Degree {
        node: NodeId,
        report: DegreeReport,
    },
    Stats {
        directed: bool,
        weighted: bool,
        nodes: usize,
        entries: usize,
        node_bound: usize,
    },
    Help,
    Exit,
}

/// A graph plus the construction-time facts the commands need.
pub struct Session {
    graph: Graph,
    /// Node count declared at construction; bounds all-paths ids.
    node_bound: usize,
    max_paths: Option<usize>,
    query: QueryEngine,
    write: WriteEngine,
}

impl Session {
    pub fn new(graph: Graph, node_bound: usize) -> Self {
        Self {
            graph,
            node_bound,
            max_paths: None,
            query: QueryEngine::new(),
            write: WriteEngine::new(),
        }
    }

    /// Cap the number of paths all-paths queries return.
    pub fn with_max_paths(mut self, max_paths: Option<usize>) -> Self {
        self.max_paths = max_paths;
        self
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Run one command against the graph.
    pub fn execute(&mut self, command: Command) -> GraphResult<Outcome> {
        let outcome = match command {
            Command::View => Outcome::Adjacency {
                directed: self.graph.is_directed(),
                weighted: self.graph.is_weighted(),
                rows: self
                    .graph
                    .iter()
                    .map(|(node, edges)| AdjacencyRow {
                        node,
                        edges: edges.to_vec(),
                    })
                    .collect(),
            },
            Command::AddEdge {
                source,
                target,
                weight,
            } => {
                self.write.add_edge(&mut self.graph, source, target, weight);
                Outcome::EdgeAdded {
                    source,
                    target,
                    weight,
                }
            }
            Command::DeleteEdge { source, target } => Outcome::EdgeDeleted {
                report: self.write.delete_edge(&mut self.graph, source, target),
            },
            Command::ConvertToUnweighted => Outcome::Converted {
                mode: "unweighted",
                report: self.write.to_unweighted(&mut self.graph),
            },
            Command::ConvertToUndirected => Outcome::Converted {
                mode: "undirected",
                report: self.write.to_undirected(&mut self.graph),
            },
            Command::Bfs { start } => Outcome::Traversal {
                result: self.query.traverse(
                    &self.graph,
                    TraversalParams {
                        start_id: start,
                        order: TraversalOrder::BreadthFirst,
                    },
                ),
            },
            Command::Dfs { start } => Outcome::Traversal {
                result: self.query.traverse(
                    &self.graph,
                    TraversalParams {
                        start_id: start,
                        order: TraversalOrder::DepthFirst,
                    },
                ),
            },
            Command::HasPath { source, target } => Outcome::Reachability {
                source,
                target,
                reachable: self.query.has_path(&self.graph, source, target),
            },
            Command::AllPaths { source, target } => Outcome::Paths {
                source,
                target,
                result: self.query.all_paths(
                    &self.graph,
                    AllPathsParams {
                        source_id: source,
                        target_id: target,
                        node_bound: Some(self.node_bound),
                        max_paths: self.max_paths,
                    },
                )?,
            },
            Command::ShortestPath { source, target } => Outcome::ShortestPath {
                source,
                target,
                result: self.query.shortest_path(
                    &self.graph,
                    ShortestPathParams {
                        source_id: source,
                        target_id: target,
                    },
                ),
            },
            Command::Degree { node } => Outcome::Degree {
                node,
                report: self.query.degree(&self.graph, node),
            },
            Command::Stats => Outcome::Stats {
                directed: self.graph.is_directed(),
                weighted: self.graph.is_weighted(),
                nodes: self.graph.node_count(),
                entries: self.graph.edge_count(),
                node_bound: self.node_bound,
            },
            Command::Help => Outcome::Help,
            Command::Exit => Outcome::Exit,
        };
        Ok(outcome)
    }
}

fn join_ids(ids: &[NodeId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render an outcome in the requested format.
pub fn render(outcome: &Outcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(outcome).unwrap_or_default(),
        OutputFormat::Text => render_text(outcome),
    }
}

/// Human-readable rendering.
pub fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Adjacency { rows, .. } => {
            if rows.is_empty() {
                return "(empty graph)".to_string();
            }
            rows.iter()
                .map(|row| {
                    let edges: Vec<String> = row.edges.iter().map(Edge::to_string).collect();
                    format!("{}: {}", row.node, edges.join(" "))
                        .trim_end()
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        Outcome::EdgeAdded {
            source,
            target,
            weight,
        } => format!("Added edge {source} -> {target} (weight {weight})"),
        Outcome::EdgeDeleted { report } => {
            if report.entries_removed == 0 {
                format!("No edge {} -> {}", report.source_id, report.target_id)
            } else {
                format!(
                    "Deleted edge {} -> {} ({} entries)",
                    report.source_id, report.target_id, report.entries_removed
                )
            }
        }
        Outcome::Converted { mode, report } => {
            if report.changed {
                format!(
                    "Converted to {mode} ({} -> {} entries)",
                    report.entries_before, report.entries_after
                )
            } else {
                format!("Graph is already {mode}")
            }
        }
        Outcome::Traversal { result } => {
            format!("{}: {}", result.order.name(), join_ids(&result.visited))
        }
        Outcome::Reachability { reachable, .. } => {
            if *reachable {
                "Path exists.".to_string()
            } else {
                "No path.".to_string()
            }
        }
        Outcome::Paths { result, .. } => {
            if result.paths.is_empty() {
                return "No paths found.".to_string();
            }
            let mut lines: Vec<String> = result.paths.iter().map(|p| join_ids(p)).collect();
            if result.truncated {
                lines.push(format!("(stopped after {} paths)", result.paths.len()));
            }
            lines.join("\n")
        }
        Outcome::ShortestPath { result, .. } => {
            if result.found {
                join_ids(&result.path)
            } else {
                "No path exists.".to_string()
            }
        }
        Outcome::Degree { node, report } => match report {
            DegreeReport::Directed {
                in_degree,
                out_degree,
            } => format!(
                "In-degree of node {node}: {in_degree}\nOut-degree of node {node}: {out_degree}"
            ),
            DegreeReport::Undirected { degree } => format!("Degree of node {node}: {degree}"),
        },
        Outcome::Stats {
            directed,
            weighted,
            nodes,
            entries,
            node_bound,
        } => format!(
            "Directed: {directed}\nWeighted: {weighted}\nNodes: {nodes}\nAdjacency entries: {entries}\nNode bound: {node_bound}"
        ),
        Outcome::Help => COMMANDS
            .iter()
            .map(|(cmd, desc)| format!("  {cmd:<22} {desc}"))
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::Exit => "Goodbye!".to_string(),
    }
}
