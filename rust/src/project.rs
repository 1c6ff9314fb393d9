//! Project facade: owns the graph and runs the engine on demand.

use std::fmt::Debug;
use std::hash::Hash;
use std::path::Path;

use crate::config::TripleConfig;
use crate::graph::{GraphError, NodeId, ProjectGraph};
use crate::log_changes;
use crate::psplib::{parse_psp_str, read_psp_file, PspError};
use crate::schedule::Schedule;
use crate::triple::compute_with_config;

/// A project network that can be scheduled.
#[derive(Clone, Debug)]
pub struct Project<N = NodeId> {
    graph: ProjectGraph<N>,
    config: TripleConfig,
}

impl<N: Ord + Hash + Clone + Debug> Project<N> {
    pub fn new() -> Self {
        Self::with_config(TripleConfig::default())
    }

    pub fn with_config(config: TripleConfig) -> Self {
        Self {
            graph: ProjectGraph::new(),
            config,
        }
    }

    pub fn from_graph(graph: ProjectGraph<N>, config: TripleConfig) -> Self {
        Self { graph, config }
    }

    pub fn add_node(&mut self, node: N) {
        self.graph.add_node(node);
    }

    pub fn add_nodes<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        self.graph.add_nodes(nodes);
    }

    pub fn add_edge(&mut self, from: N, to: N, cost: f64) {
        self.graph.add_edge(from, to, cost);
    }

    /// Limit the project duration. Call after all nodes are added.
    pub fn set_max_duration(&mut self, duration: f64) -> Result<(), GraphError> {
        self.graph.set_max_duration(duration)?;
        log_changes!(
            self.config.verbosity,
            "Max duration {} added as {:?} -> {:?}",
            duration,
            self.graph.last_node(),
            self.graph.first_node()
        );
        Ok(())
    }

    /// Earliest and latest start times for every node.
    pub fn schedule(&self) -> Result<Schedule<N>, GraphError> {
        compute_with_config(&self.graph, &self.config)
    }

    pub fn graph(&self) -> &ProjectGraph<N> {
        &self.graph
    }

    pub fn config(&self) -> &TripleConfig {
        &self.config
    }
}

impl<N: Ord + Hash + Clone + Debug> Default for Project<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl Project<NodeId> {
    pub fn from_psp_str(input: &str) -> Result<Self, PspError> {
        Ok(Self::from_graph(parse_psp_str(input)?, TripleConfig::default()))
    }

    pub fn from_psp_file<P: AsRef<Path>>(path: P) -> Result<Self, PspError> {
        Ok(Self::from_graph(read_psp_file(path)?, TripleConfig::default()))
    }
}
