//! Tab completion for the gops interactive REPL.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Event, EventContext, EventHandler, Helper, KeyEvent, RepeatCount,
};

/// All available REPL commands. The leading `/` is optional when typing.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/view", "Show every adjacency sequence"),
    ("/add", "Add an edge: /add <u> <v> [w]"),
    ("/delete", "Delete all edges u -> v: /delete <u> <v>"),
    ("/unweighted", "Convert to an unweighted graph"),
    ("/undirected", "Convert to an undirected graph"),
    ("/bfs", "Breadth-first traversal: /bfs <start>"),
    ("/dfs", "Depth-first traversal: /dfs <start>"),
    ("/has-path", "Check reachability: /has-path <u> <v>"),
    ("/all-paths", "List every simple path: /all-paths <u> <v>"),
    ("/shortest", "Fewest-hops path: /shortest <u> <v>"),
    ("/degree", "Degree of a node: /degree <node>"),
    ("/stats", "Graph mode and size"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the REPL"),
];

/// gops REPL helper providing tab completion.
pub struct GopsHelper;

impl Default for GopsHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl GopsHelper {
    pub fn new() -> Self {
        Self
    }
}

impl Completer for GopsHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        // Only command names complete; arguments are node ids.
        if input.contains(' ') {
            return Ok((pos, Vec::new()));
        }
        Ok((0, complete_command(input)))
    }
}

/// Completion candidates for a partially typed command name.
pub fn complete_command(input: &str) -> Vec<Pair> {
    let slashed = if input.starts_with('/') {
        input.to_string()
    } else {
        format!("/{input}")
    };
    COMMANDS
        .iter()
        .filter(|(cmd, _)| cmd.starts_with(&slashed))
        .map(|(cmd, desc)| Pair {
            display: format!("{cmd:<14} {desc}"),
            replacement: format!("{cmd} "),
        })
        .collect()
}

impl Hinter for GopsHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        if line.starts_with('/') && !line.contains(' ') {
            for (cmd, _) in COMMANDS {
                if cmd.starts_with(line) && *cmd != line {
                    return Some(cmd[line.len()..].to_string());
                }
            }
        }
        None
    }
}

impl Highlighter for GopsHelper {}
impl Validator for GopsHelper {}
impl Helper for GopsHelper {}

/// Tab accepts hint if present, else triggers completion.
pub struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// Bind custom key sequences.
pub fn bind_keys(rl: &mut rustyline::Editor<GopsHelper, rustyline::history::DefaultHistory>) {
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
    );
}

/// Find the closest matching command name (Levenshtein distance <= 3).
pub fn suggest_command(input: &str) -> Option<&'static str> {
    let input_lower = input.trim_start_matches('/').to_lowercase();
    let mut best: Option<(&'static str, usize)> = None;

    for (cmd, _) in COMMANDS {
        let dist = levenshtein(&input_lower, &cmd[1..]);
        if dist <= 3 && best.map_or(true, |(_, d)| dist < d) {
            best = Some((cmd, dist));
        }
    }

    best.map(|(cmd, _)| cmd)
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_len = b.chars().count();
    if a.is_empty() {
        return b_len;
    }
    if b.is_empty() {
        return a.chars().count();
    }
    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];
    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.chars().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_command() {
        assert_eq!(suggest_command("bsf"), Some("/bfs"));
        assert_eq!(suggest_command("shortst"), Some("/shortest"));
        assert_eq!(suggest_command("zzzzzzzzzz"), None);
    }

    #[test]
    fn completes_without_slash() {
        let names: Vec<String> = complete_command("de")
            .into_iter()
            .map(|p| p.replacement)
            .collect();
        assert_eq!(names, vec!["/delete ".to_string(), "/degree ".to_string()]);
    }
}
