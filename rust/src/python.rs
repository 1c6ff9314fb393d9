//! Python bindings for the project facade.

use std::collections::HashMap;
use std::path::PathBuf;

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::config::TripleConfig;
use crate::graph::{GraphError, ProjectGraph};
use crate::project::Project;
use crate::psplib::{read_psp_file, PspError};

fn graph_error(err: GraphError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn psp_error(err: PspError) -> PyErr {
    match err {
        PspError::Io(_) => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Earliest and latest start of one node (infinite when unbounded).
#[pyclass(name = "StartTimes")]
#[derive(Clone, Debug)]
pub struct PyStartTimes {
    #[pyo3(get)]
    pub es: f64,
    #[pyo3(get)]
    pub ls: f64,
}

#[pymethods]
impl PyStartTimes {
    fn __repr__(&self) -> String {
        format!("StartTimes(es={}, ls={})", self.es, self.ls)
    }
}

/// A project network with integer node ids.
#[pyclass(name = "Project")]
pub struct PyProject {
    inner: Project<i64>,
}

#[pymethods]
impl PyProject {
    #[new]
    #[pyo3(signature = (verbosity=0))]
    fn new(verbosity: u8) -> Self {
        Self {
            inner: Project::with_config(TripleConfig::with_verbosity(verbosity)),
        }
    }

    /// Read a project from a PSPLIB-style file.
    #[staticmethod]
    #[pyo3(signature = (path, verbosity=0))]
    fn from_psp_file(path: PathBuf, verbosity: u8) -> PyResult<Self> {
        let parsed = read_psp_file(path).map_err(psp_error)?;
        let mut graph = ProjectGraph::new();
        graph.add_nodes(parsed.nodes().map(|&n| i64::from(n)));
        for edge in parsed.edges() {
            graph.add_edge(i64::from(edge.from), i64::from(edge.to), edge.cost);
        }
        Ok(Self {
            inner: Project::from_graph(graph, TripleConfig::with_verbosity(verbosity)),
        })
    }

    fn add_node(&mut self, node: i64) {
        self.inner.add_node(node);
    }

    #[pyo3(signature = (*nodes))]
    fn add_nodes(&mut self, nodes: Vec<i64>) {
        self.inner.add_nodes(nodes);
    }

    fn add_edge(&mut self, from: i64, to: i64, cost: f64) {
        self.inner.add_edge(from, to, cost);
    }

    #[setter]
    fn set_max_duration(&mut self, duration: f64) -> PyResult<()> {
        self.inner.set_max_duration(duration).map_err(graph_error)
    }

    /// Compute `{node: StartTimes}` for every node.
    fn schedule(&self) -> PyResult<HashMap<i64, PyStartTimes>> {
        let schedule = self.inner.schedule().map_err(graph_error)?;
        Ok(schedule
            .iter()
            .map(|(&node, times)| {
                let times = PyStartTimes {
                    es: times.es.to_f64(),
                    ls: times.ls.to_f64(),
                };
                (node, times)
            })
            .collect())
    }

    fn __repr__(&self) -> String {
        format!(
            "Project(nodes={}, edges={})",
            self.inner.graph().node_count(),
            self.inner.graph().edge_count()
        )
    }
}

/// The tripel Python module.
#[pymodule]
fn tripel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyProject>()?;
    m.add_class::<PyStartTimes>()?;
    Ok(())
}
