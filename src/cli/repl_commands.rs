//! Command dispatch for the gops REPL.

use std::io::Write;

use crate::cli::commands::{render, Command, Outcome, Session};
use crate::cli::repl_complete::suggest_command;
use crate::config::OutputFormat;
use crate::types::GraphError;

/// Session state.
pub struct ReplState {
    pub session: Session,
    pub format: OutputFormat,
}

impl ReplState {
    pub fn new(session: Session, format: OutputFormat) -> Self {
        Self { session, format }
    }
}

/// Execute one input line, printing to stdout. Returns `true` if the REPL
/// should exit.
pub fn execute(input: &str, state: &mut ReplState) -> Result<bool, Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_with(input, state, &mut out)
}

/// Execute one input line, writing results to `out`.
///
/// Unknown commands and usage mistakes are reported and do not end the
/// session; query failures are returned to the caller.
pub fn execute_with(
    input: &str,
    state: &mut ReplState,
    out: &mut impl Write,
) -> Result<bool, Box<dyn std::error::Error>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(false);
    }

    let weighted = state.session.graph().is_weighted();
    let command = match Command::parse(input, weighted) {
        Ok(cmd) => cmd,
        Err(GraphError::UnknownCommand(name)) => {
            if let Some(suggestion) = suggest_command(&name) {
                writeln!(out, "  Unknown command '{name}'. Did you mean {suggestion}?")?;
            } else {
                writeln!(out, "  Unknown command '{name}'. Type /help for commands.")?;
            }
            return Ok(false);
        }
        Err(GraphError::Usage(usage)) => {
            writeln!(out, "  Usage: /{usage}")?;
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    let outcome = state.session.execute(command)?;
    if matches!(outcome, Outcome::Exit) {
        return Ok(true);
    }
    writeln!(out, "{}", render(&outcome, state.format))?;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn state() -> ReplState {
        let graph = GraphBuilder::new().edge(1, 2).build();
        ReplState::new(Session::new(graph, 3), OutputFormat::Text)
    }

    fn run(input: &str, state: &mut ReplState) -> (bool, String) {
        let mut buf = Vec::new();
        let exit = execute_with(input, state, &mut buf).unwrap();
        (exit, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn exit_stops_loop() {
        let mut st = state();
        assert!(run("/exit", &mut st).0);
        assert!(run("0", &mut st).0);
    }

    #[test]
    fn typo_gets_suggestion() {
        let mut st = state();
        let (exit, text) = run("bsf 1", &mut st);
        assert!(!exit);
        assert!(text.contains("Did you mean /bfs?"));
    }

    #[test]
    fn missing_args_prints_usage() {
        let mut st = state();
        let (_, text) = run("shortest 1", &mut st);
        assert!(text.contains("Usage: /shortest <u> <v>"));
    }

    #[test]
    fn out_of_bound_all_paths_is_error() {
        let mut st = state();
        let mut buf = Vec::new();
        assert!(execute_with("all-paths 1 7", &mut st, &mut buf).is_err());
    }
}
