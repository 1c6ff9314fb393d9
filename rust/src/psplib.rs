//! Reader for PSPLIB-style tab-separated project files.
//!
//! Line 1 holds the number of activities `n` in its first field. The next
//! `n + 2` lines describe nodes `0..=n+1` (the activities plus the start and
//! end milestones). On each of those lines field 2 is the successor count
//! `k`, fields `3..3+k` are successor ids and fields `3+k..3+2k` their costs.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::graph::{NodeId, ProjectGraph};

/// Errors that can occur while reading a project file.
#[derive(Error, Debug)]
pub enum PspError {
    #[error("Failed to read project file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line}: unexpected end of file")]
    MissingLine { line: usize },
    #[error("Line {line}: missing field {field}")]
    MissingField { line: usize, field: usize },
    #[error("Line {line}, field {field}: invalid integer {token:?}")]
    InvalidInteger {
        line: usize,
        field: usize,
        token: String,
    },
}

/// Tab-separated fields of one line, with its 1-based line number.
struct Record<'a> {
    line: usize,
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    fn new(line: usize, text: &'a str) -> Self {
        let text = text.trim_end_matches(['\n', '\r']);
        Self {
            line,
            fields: text.split('\t').collect(),
        }
    }

    fn field(&self, field: usize) -> Result<&'a str, PspError> {
        self.fields
            .get(field)
            .copied()
            .ok_or(PspError::MissingField {
                line: self.line,
                field,
            })
    }

    fn integer<T: std::str::FromStr>(&self, field: usize) -> Result<T, PspError> {
        let token = self.field(field)?;
        token.trim().parse().map_err(|_| PspError::InvalidInteger {
            line: self.line,
            field,
            token: token.to_string(),
        })
    }

    /// Check that `count` successor ids and costs fit on this line.
    fn require_successors(&self, count: usize) -> Result<(), PspError> {
        let last = count.checked_mul(2).and_then(|n| n.checked_add(2));
        match last {
            Some(last) if last < self.fields.len() => Ok(()),
            _ => Err(PspError::MissingField {
                line: self.line,
                field: self.fields.len(),
            }),
        }
    }

    /// Parse a cost: drop everything except digits and '-', then read an
    /// optional leading minus and the digit run after it.
    fn cost(&self, field: usize) -> Result<i64, PspError> {
        let token = self.field(field)?;
        let cleaned: String = token
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '-')
            .collect();
        let sign_len = usize::from(cleaned.starts_with('-'));
        let digits = cleaned[sign_len..]
            .find(|c: char| !c.is_ascii_digit())
            .map_or(cleaned.len(), |end| sign_len + end);
        cleaned[..digits].parse().map_err(|_| PspError::InvalidInteger {
            line: self.line,
            field,
            token: token.to_string(),
        })
    }
}

/// Parse a project from the contents of a PSPLIB-style file.
pub fn parse_psp_str(input: &str) -> Result<ProjectGraph<NodeId>, PspError> {
    let mut lines = input.lines().enumerate().map(|(i, text)| Record::new(i + 1, text));

    let header = lines.next().ok_or(PspError::MissingLine { line: 1 })?;
    let activities: NodeId = header.integer(0)?;
    // Activities plus the start and end milestones
    let node_count = activities
        .checked_add(2)
        .ok_or_else(|| PspError::InvalidInteger {
            line: 1,
            field: 0,
            token: activities.to_string(),
        })?;

    let mut graph = ProjectGraph::new();
    for node in 0..node_count {
        let line = node as usize + 2;
        let record = lines.next().ok_or(PspError::MissingLine { line })?;
        graph.add_node(node);

        let successors: usize = record.integer(2)?;
        record.require_successors(successors)?;
        for k in 0..successors {
            let to: NodeId = record.integer(3 + k)?;
            let cost = record.cost(3 + k + successors)?;
            graph.add_edge(node, to, cost as f64);
        }
    }

    Ok(graph)
}

/// Read a project from a PSPLIB-style file on disk.
pub fn read_psp_file<P: AsRef<Path>>(path: P) -> Result<ProjectGraph<NodeId>, PspError> {
    let contents = fs::read_to_string(path)?;
    parse_psp_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    // Two activities plus start (0) and end (3) milestones
    const SMALL_PROJECT: &str = "2\t1\t0\t0\n\
        0\t1\t2\t1\t2\t[0]\t[0]\n\
        1\t1\t1\t3\t[4]\n\
        2\t1\t2\t3\t1\t[6]\t[-2]\n\
        3\t1\t0\n";

    #[test]
    fn test_parse_node_and_edge_counts() {
        let graph = parse_psp_str(SMALL_PROJECT).unwrap();

        // n + 2 nodes, edges = sum of successor counts
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2 + 1 + 2);
    }

    #[test]
    fn test_parse_costs_stripped() {
        let graph = parse_psp_str(SMALL_PROJECT).unwrap();

        assert_eq!(
            graph.edges(),
            &[
                Edge::new(0, 1, 0.0),
                Edge::new(0, 2, 0.0),
                Edge::new(1, 3, 4.0),
                Edge::new(2, 3, 6.0),
                Edge::new(2, 1, -2.0),
            ]
        );
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let input = SMALL_PROJECT.replace('\n', "\r\n");
        let graph = parse_psp_str(&input).unwrap();
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn test_empty_input() {
        let result = parse_psp_str("");
        assert!(matches!(result, Err(PspError::MissingLine { line: 1 })));
    }

    #[test]
    fn test_truncated_file() {
        let result = parse_psp_str("2\n0\t1\t0\n");
        assert!(matches!(result, Err(PspError::MissingLine { line: 3 })));
    }

    #[test]
    fn test_missing_cost_field() {
        let result = parse_psp_str("0\n0\t1\t1\t1\n1\t1\t0\n");
        assert!(matches!(
            result,
            Err(PspError::MissingField { line: 2, field: 4 })
        ));
    }

    #[test]
    fn test_non_numeric_successor_count() {
        let result = parse_psp_str("0\n0\t1\tx\n1\t1\t0\n");
        match result {
            Err(PspError::InvalidInteger { line, field, token }) => {
                assert_eq!((line, field), (2, 2));
                assert_eq!(token, "x");
            }
            other => panic!("expected InvalidInteger, got {:?}", other),
        }
    }

    #[test]
    fn test_cost_without_digits() {
        let result = parse_psp_str("0\n0\t1\t1\t1\t[]\n1\t1\t0\n");
        assert!(matches!(
            result,
            Err(PspError::InvalidInteger { line: 2, field: 4, .. })
        ));
    }

    #[test]
    fn test_activity_count_overflow() {
        let result = parse_psp_str("4294967295\n0\t1\t0\n");
        assert!(matches!(
            result,
            Err(PspError::InvalidInteger { line: 1, field: 0, .. })
        ));
    }

    #[test]
    fn test_huge_successor_count() {
        let result = parse_psp_str("0\n0\t1\t18446744073709551615\t1\n1\t1\t0\n");
        assert!(matches!(
            result,
            Err(PspError::MissingField { line: 2, field: 4 })
        ));
    }

    #[test]
    fn test_cost_keeps_leading_minus_only() {
        let input = "1\n\
            0\t1\t1\t1\t[1-2]\n\
            1\t1\t2\t2\t2\t5-\t[--3]\n\
            2\t1\t0\n";
        let result = parse_psp_str(input);
        assert!(matches!(
            result,
            Err(PspError::InvalidInteger { line: 3, field: 6, .. })
        ));

        let input = "1\n\
            0\t1\t1\t1\t[1-2]\n\
            1\t1\t2\t2\t2\t5-\t[-3]\n\
            2\t1\t0\n";
        let graph = parse_psp_str(input).unwrap();
        assert_eq!(
            graph.edges(),
            &[
                Edge::new(0, 1, 1.0),
                Edge::new(1, 2, 5.0),
                Edge::new(1, 2, -3.0),
            ]
        );
    }

    #[test]
    fn test_read_psp_file() {
        let path = std::env::temp_dir().join(format!("tripel-{}.sch", std::process::id()));
        fs::write(&path, SMALL_PROJECT).unwrap();
        let graph = read_psp_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_psp_file("/nonexistent/project.sch");
        assert!(matches!(result, Err(PspError::Io(_))));
    }
}
