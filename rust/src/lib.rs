//! Earliest/latest start times for project networks.
//!
//! Longest paths between all pairs of activities are computed with the
//! triple algorithm (Floyd-Warshall adapted to maximisation). Earliest starts
//! are the longest paths out of the project start node; latest starts come
//! from paths back to it through the maximum-duration edge.
//!
//! ```
//! use tripel::{Distance, Project};
//!
//! let mut project: Project = Project::new();
//! project.add_nodes([0, 1, 2]);
//! project.add_edge(0, 1, 3.0);
//! project.add_edge(1, 2, 5.0);
//! project.add_edge(0, 2, 4.0);
//! project.set_max_duration(10.0).unwrap();
//!
//! let schedule = project.schedule().unwrap();
//! assert_eq!(schedule.es(&2), Some(Distance::Finite(8.0)));
//! assert_eq!(schedule.ls(&2), Some(Distance::Finite(10.0)));
//! ```

// Allow clippy warning triggered by PyO3 macro expansion
#![cfg_attr(feature = "python", allow(clippy::useless_conversion))]

pub mod logging;

mod config;
pub mod distance;
pub mod graph;
pub mod index;
pub mod project;
pub mod psplib;
pub mod schedule;
pub mod triple;

#[cfg(feature = "python")]
mod python;

pub use config::TripleConfig;
pub use distance::Distance;
pub use graph::{Edge, GraphError, NodeId, ProjectGraph};
pub use index::NodeIndex;
pub use project::Project;
pub use psplib::{parse_psp_str, read_psp_file, PspError};
pub use schedule::{CalendarDates, Schedule, StartTimes};
pub use triple::{compute, compute_with_config, longest_paths, DistanceMatrix, LongestPaths};
