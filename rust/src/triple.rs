//! All-pairs longest paths (triple algorithm) and start-time derivation.
//!
//! Floyd-Warshall adapted to maximisation: the matrix starts with 0 on the
//! diagonal and -inf elsewhere, direct edge costs are written in, and every
//! node is then used once as an intermediate. Earliest starts are read from
//! the project start's row, latest starts from its (negated) column.
//!
//! Positive-weight cycles are not detected. Each intermediate is visited
//! exactly once, so such a cycle yields finite but non-maximal values.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::config::TripleConfig;
use crate::distance::Distance;
use crate::graph::{GraphError, ProjectGraph};
use crate::index::NodeIndex;
use crate::schedule::{Schedule, StartTimes};
use crate::{log_changes, log_checks, log_debug};

/// Dense n x n matrix of longest-path lengths, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// 0 on the diagonal, -inf everywhere else.
    pub fn new(n: usize) -> Self {
        let mut cells = vec![Distance::NegInfinity; n * n];
        for i in 0..n {
            cells[i * n + i] = Distance::ZERO;
        }
        Self { n, cells }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Distance {
        self.cells[i * self.n + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: Distance) {
        self.cells[i * self.n + j] = value;
    }

    /// Relax every pair through each intermediate `v` in index order.
    fn relax(&mut self, verbosity: u8) {
        let n = self.n;
        for v in 0..n {
            for i in (0..n).filter(|&i| i != v) {
                let through = self.get(i, v);
                // Nothing reaches v from i
                if through.is_neg_infinity() {
                    continue;
                }
                for j in (0..n).filter(|&j| j != v) {
                    let candidate = through + self.get(v, j);
                    let current = self.get(i, j);
                    if candidate > current {
                        log_debug!(
                            verbosity,
                            "  d[{}][{}]: {} -> {} via {}",
                            i,
                            j,
                            current,
                            candidate,
                            v
                        );
                        self.set(i, j, current.max(candidate));
                    }
                }
            }
        }
    }
}

/// Longest paths between every pair of nodes in a graph.
#[derive(Clone, Debug)]
pub struct LongestPaths<N> {
    index: NodeIndex<N>,
    matrix: DistanceMatrix,
}

impl<N: Ord + Hash + Clone + Debug> LongestPaths<N> {
    /// Longest path length from `from` to `to`, or `None` for unknown nodes.
    pub fn distance(&self, from: &N, to: &N) -> Option<Distance> {
        let i = self.index.get(from)?;
        let j = self.index.get(to)?;
        Some(self.matrix.get(i, j))
    }

    pub fn index(&self) -> &NodeIndex<N> {
        &self.index
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// es(i) = d[0][i], ls(i) = -d[i][0], where 0 is the order-minimum node.
    pub fn start_times(&self) -> Schedule<N> {
        let times: BTreeMap<N, StartTimes> = self
            .index
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let times = StartTimes {
                    es: self.matrix.get(0, i),
                    ls: -self.matrix.get(i, 0),
                };
                (node.clone(), times)
            })
            .collect();
        Schedule::from_map(times)
    }
}

fn unknown_node<N: Debug>(node: &N) -> GraphError {
    GraphError::UnknownNode(format!("{:?}", node))
}

/// Build and relax the distance matrix for `graph`.
///
/// # Returns
/// * `Ok(LongestPaths)` holding a freshly allocated matrix
/// * `Err(GraphError::UnknownNode)` if an edge endpoint is not in the node set
pub fn longest_paths<N: Ord + Hash + Clone + Debug>(
    graph: &ProjectGraph<N>,
    config: &TripleConfig,
) -> Result<LongestPaths<N>, GraphError> {
    let verbosity = config.verbosity;
    let index = NodeIndex::new(graph.nodes());
    let mut matrix = DistanceMatrix::new(index.len());

    log_changes!(
        verbosity,
        "Building {}x{} distance matrix from {} edges",
        index.len(),
        index.len(),
        graph.edge_count()
    );

    // Direct edges overwrite; the last edge between a pair wins
    for edge in graph.edges() {
        let i = index.get(&edge.from).ok_or_else(|| unknown_node(&edge.from))?;
        let j = index.get(&edge.to).ok_or_else(|| unknown_node(&edge.to))?;
        matrix.set(i, j, Distance::from(edge.cost));
    }

    matrix.relax(verbosity);

    Ok(LongestPaths { index, matrix })
}

/// Compute earliest and latest start times for every node.
pub fn compute<N: Ord + Hash + Clone + Debug>(
    graph: &ProjectGraph<N>,
) -> Result<Schedule<N>, GraphError> {
    compute_with_config(graph, &TripleConfig::default())
}

pub fn compute_with_config<N: Ord + Hash + Clone + Debug>(
    graph: &ProjectGraph<N>,
    config: &TripleConfig,
) -> Result<Schedule<N>, GraphError> {
    let schedule = longest_paths(graph, config)?.start_times();
    for (node, times) in &schedule {
        log_checks!(
            config.verbosity,
            "  {:?}: es={} ls={}",
            node,
            times.es,
            times.ls
        );
    }
    Ok(schedule)
}
