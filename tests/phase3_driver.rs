//! Phase 3 tests: construction input, command dispatch, rendering and config.

use std::io::Write;

use tempfile::NamedTempFile;

use graph_ops::cli::commands::{render, render_text, Command, Outcome, Session};
use graph_ops::config::{OutputFormat, SessionConfig};
use graph_ops::format::EdgeListReader;
use graph_ops::graph::GraphBuilder;
use graph_ops::types::{EdgeRecord, GraphError};

// ==================== Helper ====================

fn session_from(input: &str, directed: bool, weighted: bool) -> Session {
    let parsed = EdgeListReader::read_from_str(input, weighted).unwrap();
    let graph = GraphBuilder::new()
        .directed(directed)
        .weighted(weighted)
        .edges(parsed.records)
        .build();
    Session::new(graph, parsed.node_count)
}

fn run_text(session: &mut Session, line: &str) -> String {
    let weighted = session.graph().is_weighted();
    let cmd = Command::parse(line, weighted).unwrap();
    render_text(&session.execute(cmd).unwrap())
}

// ==================== Reader Tests ====================

#[test]
fn test_read_weighted_input() {
    let input = EdgeListReader::read_from_str("4 3\n1 2 5\n2 3 1\n1 3 10\n", true).unwrap();
    assert_eq!(input.node_count, 4);
    assert_eq!(
        input.records,
        vec![
            EdgeRecord::new(1, 2, 5),
            EdgeRecord::new(2, 3, 1),
            EdgeRecord::new(1, 3, 10),
        ]
    );
}

#[test]
fn test_read_unweighted_defaults_weight() {
    let input = EdgeListReader::read_from_str("3 2\n1 2\n2 3\n", false).unwrap();
    assert!(input.records.iter().all(|r| r.weight == 1));
}

#[test]
fn test_read_zero_edges() {
    let input = EdgeListReader::read_from_str("5 0", false).unwrap();
    assert_eq!(input.node_count, 5);
    assert!(input.records.is_empty());
}

#[test]
fn test_read_truncated_input() {
    match EdgeListReader::read_from_str("3 2\n1 2\n", false) {
        Err(GraphError::Parse { message, .. }) => {
            assert!(message.contains("unexpected end of input"));
        }
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_read_negative_count() {
    assert!(matches!(
        EdgeListReader::read_from_str("-1 0", false),
        Err(GraphError::Parse { .. })
    ));
}

#[test]
fn test_read_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "3 2").unwrap();
    writeln!(file, "0 1").unwrap();
    writeln!(file, "1 2").unwrap();

    let input = EdgeListReader::read_from_file(file.path(), false).unwrap();
    assert_eq!(input.records.len(), 2);
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    assert!(matches!(
        EdgeListReader::read_from_file(&path, false),
        Err(GraphError::Io(_))
    ));
}

// ==================== Command Parse Tests ====================

#[test]
fn test_parse_named_commands() {
    assert_eq!(Command::parse("view", false).unwrap(), Command::View);
    assert_eq!(
        Command::parse("/bfs 4", false).unwrap(),
        Command::Bfs { start: 4 }
    );
    assert_eq!(
        Command::parse("has-path 1 2", false).unwrap(),
        Command::HasPath {
            source: 1,
            target: 2
        }
    );
    assert_eq!(Command::parse("quit", false).unwrap(), Command::Exit);
}

#[test]
fn test_parse_menu_numbers() {
    assert_eq!(
        Command::parse("6 1", false).unwrap(),
        Command::Bfs { start: 1 }
    );
    assert_eq!(
        Command::parse("10 1 3", false).unwrap(),
        Command::ShortestPath {
            source: 1,
            target: 3
        }
    );
    assert_eq!(Command::parse("0", false).unwrap(), Command::Exit);
    assert_eq!(
        Command::parse("5", false).unwrap(),
        Command::ConvertToUndirected
    );
}

#[test]
fn test_parse_add_weight_only_when_weighted() {
    assert_eq!(
        Command::parse("add 1 2 9", true).unwrap(),
        Command::AddEdge {
            source: 1,
            target: 2,
            weight: 9
        }
    );
    assert_eq!(
        Command::parse("add 1 2 9", false).unwrap(),
        Command::AddEdge {
            source: 1,
            target: 2,
            weight: 1
        }
    );
    assert_eq!(
        Command::parse("add 1 2", true).unwrap(),
        Command::AddEdge {
            source: 1,
            target: 2,
            weight: 1
        }
    );
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        Command::parse("frobnicate", false),
        Err(GraphError::UnknownCommand(_))
    ));
    assert!(matches!(
        Command::parse("delete 1", false),
        Err(GraphError::Usage(_))
    ));
    assert!(matches!(
        Command::parse("degree x", false),
        Err(GraphError::Usage(_))
    ));
}

// ==================== Session Tests ====================

#[test]
fn test_session_weighted_scenario() {
    let mut session = session_from("4 3\n1 2 5\n2 3 1\n1 3 10\n", true, true);

    assert_eq!(run_text(&mut session, "shortest 1 3"), "1 3");
    assert_eq!(
        run_text(&mut session, "degree 1"),
        "In-degree of node 1: 0\nOut-degree of node 1: 2"
    );
    assert_eq!(run_text(&mut session, "all-paths 1 3"), "1 2 3\n1 3");
    assert_eq!(run_text(&mut session, "has-path 3 1"), "No path.");
}

#[test]
fn test_session_view_format() {
    let mut session = session_from("4 3\n1 2 5\n2 3 1\n1 3 10\n", true, true);
    assert_eq!(
        run_text(&mut session, "view"),
        "1: (2, 5) (3, 10)\n2: (3, 1)\n3:"
    );
}

#[test]
fn test_session_triangle() {
    let mut session = session_from("3 3\n1 2\n2 3\n1 3\n", false, false);
    assert_eq!(run_text(&mut session, "bfs 1"), "BFS: 1 2 3");
    assert_eq!(run_text(&mut session, "dfs 1"), "DFS: 1 2 3");
    assert_eq!(run_text(&mut session, "degree 2"), "Degree of node 2: 2");
}

#[test]
fn test_session_mutations() {
    let mut session = session_from("4 1\n1 2 5\n", true, true);

    assert_eq!(
        run_text(&mut session, "add 2 3 4"),
        "Added edge 2 -> 3 (weight 4)"
    );
    assert_eq!(run_text(&mut session, "has-path 1 3"), "Path exists.");
    assert_eq!(
        run_text(&mut session, "delete 1 2"),
        "Deleted edge 1 -> 2 (1 entries)"
    );
    assert_eq!(run_text(&mut session, "delete 1 2"), "No edge 1 -> 2");
    assert_eq!(run_text(&mut session, "shortest 1 3"), "No path exists.");
}

#[test]
fn test_session_conversions() {
    let mut session = session_from("3 2\n1 2 5\n2 3 7\n", true, true);

    assert_eq!(
        run_text(&mut session, "unweighted"),
        "Converted to unweighted (2 -> 2 entries)"
    );
    assert_eq!(run_text(&mut session, "4"), "Graph is already unweighted");
    assert_eq!(
        run_text(&mut session, "undirected"),
        "Converted to undirected (2 -> 4 entries)"
    );
    assert_eq!(run_text(&mut session, "5"), "Graph is already undirected");
    assert_eq!(run_text(&mut session, "view"), "1: (2, 1)\n2: (3, 1) (1, 1)\n3: (2, 1)");
}

#[test]
fn test_session_all_paths_bound() {
    let mut session = session_from("3 1\n1 2\n", false, false);
    let cmd = Command::parse("all-paths 1 3", false).unwrap();
    assert!(matches!(
        session.execute(cmd),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_session_all_paths_cap() {
    let mut session =
        session_from("4 4\n0 1\n0 2\n1 3\n2 3\n", false, false).with_max_paths(Some(1));
    assert_eq!(
        run_text(&mut session, "all-paths 0 3"),
        "0 1 3\n(stopped after 1 paths)"
    );
}

#[test]
fn test_session_stats_and_exit() {
    let mut session = session_from("5 2\n1 2\n3 4\n", false, false);
    let stats = run_text(&mut session, "stats");
    assert!(stats.contains("Nodes: 4"));
    assert!(stats.contains("Adjacency entries: 4"));
    assert!(stats.contains("Node bound: 5"));

    let outcome = session.execute(Command::Exit).unwrap();
    assert!(matches!(outcome, Outcome::Exit));
}

#[test]
fn test_render_json() {
    let mut session = session_from("3 2\n1 2\n2 3\n", true, false);
    let outcome = session.execute(Command::Degree { node: 2 }).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&render(&outcome, OutputFormat::Json)).unwrap();

    assert_eq!(json["kind"], "degree");
    assert_eq!(json["node"], 2);
    assert_eq!(json["report"]["mode"], "directed");
    assert_eq!(json["report"]["in_degree"], 1);
    assert_eq!(json["report"]["out_degree"], 1);
}

#[test]
fn test_render_json_paths() {
    let mut session = session_from("3 2\n1 2\n2 3\n", true, false);
    let outcome = session
        .execute(Command::ShortestPath {
            source: 1,
            target: 3,
        })
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&render(&outcome, OutputFormat::Json)).unwrap();
    assert_eq!(json["result"]["path"], serde_json::json!([1, 2, 3]));
    assert_eq!(json["result"]["hops"], 2);
}

// ==================== Config Tests ====================

#[test]
fn test_config_defaults() {
    let config = SessionConfig::default();
    assert!(!config.directed);
    assert!(!config.weighted);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.max_paths, None);
    assert!(config.history);
}

#[test]
fn test_config_partial_toml() {
    let config = SessionConfig::from_toml("directed = true\nformat = \"json\"\n").unwrap();
    assert!(config.directed);
    assert!(!config.weighted);
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_config_invalid_toml() {
    assert!(matches!(
        SessionConfig::from_toml("directed = \"maybe\""),
        Err(GraphError::Config(_))
    ));
}

#[test]
fn test_config_save_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gops.toml");
    let config = SessionConfig {
        directed: true,
        weighted: true,
        format: OutputFormat::Json,
        max_paths: Some(50),
        history: false,
    };
    config.save(&path).unwrap();
    assert_eq!(SessionConfig::load(&path).unwrap(), config);
    assert_eq!(
        SessionConfig::load_or_default(None).unwrap(),
        SessionConfig::default()
    );
}

#[test]
fn test_output_format_names() {
    assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::from_name("text"), Some(OutputFormat::Text));
    assert_eq!(OutputFormat::from_name("yaml"), None);
}

// ==================== Write Engine Tests ====================

#[test]
fn test_ingest_applies_records_in_order() {
    use graph_ops::engine::WriteEngine;
    use graph_ops::graph::Graph;

    let input = EdgeListReader::read_from_str("3 3\n1 2\n1 3\n1 2\n", false).unwrap();
    let mut graph = Graph::new(true, false);
    let result = WriteEngine::new().ingest(&mut graph, input.records);

    assert_eq!(result.records_applied, 3);
    assert_eq!(result.entry_count, 3);
    assert_eq!(result.node_count, 3);
    let targets: Vec<i64> = graph.neighbors(1).iter().map(|e| e.target).collect();
    assert_eq!(targets, vec![2, 3, 2]);
}
