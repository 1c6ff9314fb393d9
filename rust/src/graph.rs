//! Project network: an ordered node set plus weighted precedence edges.

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

/// Node identifier used by PSPLIB files (activities numbered from 0).
pub type NodeId = u32;

/// Errors raised by the project graph and the longest-path engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Edge references unknown node: {0}")]
    UnknownNode(String),
    #[error("Project graph has no nodes")]
    EmptyGraph,
}

/// A directed precedence relation `from -> to` with a cost (duration).
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<N = NodeId> {
    pub from: N,
    pub to: N,
    pub cost: f64,
}

impl<N> Edge<N> {
    pub fn new(from: N, to: N, cost: f64) -> Self {
        Self { from, to, cost }
    }
}

/// Nodes kept in their total order, edges in insertion order.
///
/// Edges are not checked against the node set when added, so a file can
/// declare successors before they appear. Endpoints are validated when the
/// longest paths are computed.
#[derive(Clone, Debug)]
pub struct ProjectGraph<N = NodeId> {
    nodes: BTreeSet<N>,
    edges: Vec<Edge<N>>,
}

impl<N: Ord + Hash + Clone + Debug> ProjectGraph<N> {
    pub fn new() -> Self {
        Self {
            nodes: BTreeSet::new(),
            edges: Vec::new(),
        }
    }

    /// Insert a node. Re-inserting an existing node is a no-op.
    pub fn add_node(&mut self, node: N) {
        self.nodes.insert(node);
    }

    pub fn add_nodes<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        self.nodes.extend(nodes);
    }

    /// Append an edge. Parallel edges are kept; the last one written wins
    /// when the distance matrix is built.
    pub fn add_edge(&mut self, from: N, to: N, cost: f64) {
        self.edges.push(Edge::new(from, to, cost));
    }

    /// Bound the project duration by adding `last -> first` with cost `-duration`.
    ///
    /// Reads the first and last node at call time, so call it after every
    /// node has been added.
    pub fn set_max_duration(&mut self, duration: f64) -> Result<(), GraphError> {
        let (Some(first), Some(last)) = (self.first_node(), self.last_node()) else {
            return Err(GraphError::EmptyGraph);
        };
        let (first, last) = (first.clone(), last.clone());
        self.add_edge(last, first, -duration);
        Ok(())
    }

    /// Nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// The order-minimum node (project start).
    pub fn first_node(&self) -> Option<&N> {
        self.nodes.first()
    }

    /// The order-maximum node (project end).
    pub fn last_node(&self) -> Option<&N> {
        self.nodes.last()
    }
}

impl<N: Ord + Hash + Clone + Debug> Default for ProjectGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_deduplicated_and_ordered() {
        let mut graph: ProjectGraph = ProjectGraph::new();
        graph.add_nodes([3, 1, 2]);
        graph.add_node(1);
        graph.add_node(0);

        let nodes: Vec<NodeId> = graph.nodes().copied().collect();
        assert_eq!(nodes, vec![0, 1, 2, 3]);
        assert_eq!(graph.first_node(), Some(&0));
        assert_eq!(graph.last_node(), Some(&3));
    }

    #[test]
    fn test_parallel_edges_kept() {
        let mut graph: ProjectGraph = ProjectGraph::new();
        graph.add_nodes([0, 1]);
        graph.add_edge(0, 1, 3.0);
        graph.add_edge(0, 1, 7.0);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges()[1], Edge::new(0, 1, 7.0));
    }

    #[test]
    fn test_edge_to_unknown_node_accepted() {
        let mut graph: ProjectGraph = ProjectGraph::new();
        graph.add_node(0);
        graph.add_edge(0, 9, 1.0);

        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.contains_node(&9));
    }

    #[test]
    fn test_max_duration_adds_back_edge() {
        let mut graph: ProjectGraph = ProjectGraph::new();
        graph.add_nodes([0, 1, 2]);
        graph.set_max_duration(10.0).unwrap();

        assert_eq!(graph.edges(), &[Edge::new(2, 0, -10.0)]);
    }

    #[test]
    fn test_max_duration_on_empty_graph() {
        let mut graph: ProjectGraph = ProjectGraph::new();
        assert_eq!(graph.set_max_duration(10.0), Err(GraphError::EmptyGraph));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_symbolic_nodes() {
        let mut graph: ProjectGraph<String> = ProjectGraph::new();
        graph.add_nodes(["start".to_string(), "end".to_string()]);
        graph.set_max_duration(4.0).unwrap();

        // "end" < "start" lexicographically
        assert_eq!(
            graph.edges(),
            &[Edge::new("start".to_string(), "end".to_string(), -4.0)]
        );
    }
}
