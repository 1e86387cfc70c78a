//! Reader for the construction input: `n m` followed by `m` edge records.
//!
//! Tokens are whitespace-separated integers and may be spread across lines
//! freely. Each record is `u v` for unweighted graphs and `u v w` for
//! weighted ones.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::{EdgeRecord, GraphError, GraphResult, NodeId, DEFAULT_WEIGHT};

/// Parsed construction input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphInput {
    /// Declared node count. Used as the id bound for all-paths queries.
    pub node_count: usize,
    /// Edge records in input order.
    pub records: Vec<EdgeRecord>,
}

/// Reads construction input from a file or any buffered reader.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read from a file path.
    pub fn read_from_file(path: &Path, weighted: bool) -> GraphResult<GraphInput> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file), weighted)
    }

    /// Read from any buffered reader.
    pub fn read_from(reader: impl BufRead, weighted: bool) -> GraphResult<GraphInput> {
        let mut tokens = Tokens::new(reader);

        let node_count = tokens.next_count("node count")?;
        let edge_count = tokens.next_count("edge count")?;

        let mut records = Vec::with_capacity(edge_count.min(1 << 16));
        for i in 0..edge_count {
            let source = tokens.next_int(&format!("source of edge {}", i + 1))?;
            let target = tokens.next_int(&format!("target of edge {}", i + 1))?;
            let weight = if weighted {
                tokens.next_int(&format!("weight of edge {}", i + 1))?
            } else {
                DEFAULT_WEIGHT
            };
            records.push(EdgeRecord::new(source, target, weight));
        }

        Ok(GraphInput {
            node_count,
            records,
        })
    }

    /// Read from an in-memory string.
    pub fn read_from_str(input: &str, weighted: bool) -> GraphResult<GraphInput> {
        Self::read_from(input.as_bytes(), weighted)
    }
}

/// Integer token stream with line tracking for error messages.
struct Tokens<R> {
    reader: R,
    line_no: usize,
    pending: std::vec::IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            pending: Vec::new().into_iter(),
        }
    }

    fn next_token(&mut self, what: &str) -> GraphResult<String> {
        loop {
            if let Some(tok) = self.pending.next() {
                return Ok(tok);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(GraphError::Parse {
                    line: self.line_no,
                    message: format!("unexpected end of input, expected {what}"),
                });
            }
            self.line_no += 1;
            self.pending = line
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }

    fn next_int(&mut self, what: &str) -> GraphResult<NodeId> {
        let tok = self.next_token(what)?;
        tok.parse().map_err(|_| GraphError::Parse {
            line: self.line_no,
            message: format!("expected integer {what}, found {tok:?}"),
        })
    }

    fn next_count(&mut self, what: &str) -> GraphResult<usize> {
        let value = self.next_int(what)?;
        usize::try_from(value).map_err(|_| GraphError::Parse {
            line: self.line_no,
            message: format!("{what} must be non-negative, found {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_may_span_lines() {
        let input = EdgeListReader::read_from_str("3\n2 1\n2\n2 3", false).unwrap();
        assert_eq!(input.node_count, 3);
        assert_eq!(
            input.records,
            vec![EdgeRecord::new(1, 2, 1), EdgeRecord::new(2, 3, 1)]
        );
    }

    #[test]
    fn reports_line_of_bad_token() {
        let err = EdgeListReader::read_from_str("3 1\n1 x\n", false).unwrap_err();
        match err {
            GraphError::Parse { line, .. } => assert_eq!(line, 2),
            e => panic!("Expected Parse error, got {:?}", e),
        }
    }
}
