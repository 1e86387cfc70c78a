//! Interactive REPL for gops.
//!
//! Type `/help` for available commands, Tab for completion.

use log::debug;
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

use crate::cli::repl_commands::{self, ReplState};
use crate::cli::repl_complete;
use crate::config::history_path;

/// Print the welcome banner.
fn print_banner(state: &ReplState) {
    let graph = state.session.graph();
    eprintln!();
    eprintln!(
        "  \x1b[1mgops v{}\x1b[0m \x1b[90m- {} {} graph, {} nodes\x1b[0m",
        env!("CARGO_PKG_VERSION"),
        if graph.is_directed() { "directed" } else { "undirected" },
        if graph.is_weighted() { "weighted" } else { "unweighted" },
        graph.node_count()
    );
    eprintln!(
        "    Type \x1b[36m/help\x1b[0m for commands, \x1b[90mTab\x1b[0m to complete, \x1b[90m/exit\x1b[0m to quit."
    );
    eprintln!();
}

/// Run the interactive REPL until `/exit` or end of input.
pub fn run(mut state: ReplState, keep_history: bool) -> Result<(), Box<dyn std::error::Error>> {
    print_banner(&state);

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .completion_prompt_limit(20)
        .build();

    let mut rl: Editor<repl_complete::GopsHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(repl_complete::GopsHelper::new()));
    repl_complete::bind_keys(&mut rl);

    let hist_path = history_path();
    if keep_history && hist_path.exists() {
        if let Err(e) = rl.load_history(&hist_path) {
            debug!("could not load history from {}: {e}", hist_path.display());
        }
    }

    let prompt = " \x1b[36mgops>\x1b[0m ";

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match repl_commands::execute(line, &mut state) {
                    Ok(true) => {
                        eprintln!("  Goodbye!");
                        break;
                    }
                    Ok(false) => {}
                    Err(e) => {
                        eprintln!("  Error: {e}");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  \x1b[90m(Ctrl+C)\x1b[0m Type \x1b[1m/exit\x1b[0m to quit.");
            }
            Err(ReadlineError::Eof) => {
                eprintln!("  Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    if keep_history {
        if let Err(e) = rl.save_history(&hist_path) {
            debug!("could not save history to {}: {e}", hist_path.display());
        }
    }

    Ok(())
}
