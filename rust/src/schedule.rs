//! Earliest/latest start times produced by the longest-path engine.

use std::collections::btree_map;
use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::distance::Distance;

/// Per-node timing derived from the distance matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StartTimes {
    /// Longest path from the project start to this node.
    pub es: Distance,
    /// Negated longest path from this node back to the project start.
    pub ls: Distance,
}

impl StartTimes {
    /// Slack = ls - es. `None` unless both bounds are finite.
    pub fn slack(&self) -> Option<f64> {
        Some(self.ls.finite()? - self.es.finite()?)
    }

    pub fn is_critical(&self) -> bool {
        // Allow small epsilon for floating point comparison
        self.slack().is_some_and(|slack| slack.abs() < 1e-9)
    }
}

/// Start times projected onto calendar dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDates {
    pub earliest_start: Option<NaiveDate>,
    pub latest_start: Option<NaiveDate>,
}

/// Start times for every node, iterated in node order.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule<N> {
    times: BTreeMap<N, StartTimes>,
}

impl<N: Ord + Clone> Schedule<N> {
    pub(crate) fn from_map(times: BTreeMap<N, StartTimes>) -> Self {
        Self { times }
    }

    pub fn get(&self, node: &N) -> Option<&StartTimes> {
        self.times.get(node)
    }

    pub fn es(&self, node: &N) -> Option<Distance> {
        self.times.get(node).map(|t| t.es)
    }

    pub fn ls(&self, node: &N) -> Option<Distance> {
        self.times.get(node).map(|t| t.ls)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, N, StartTimes> {
        self.times.iter()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Nodes with zero slack, in node order.
    pub fn critical_nodes(&self) -> Vec<N> {
        self.times
            .iter()
            .filter(|(_, t)| t.is_critical())
            .map(|(node, _)| node.clone())
            .collect()
    }

    /// Earliest start of the project end node, if it is reachable.
    pub fn makespan(&self) -> Option<f64> {
        self.times
            .last_key_value()
            .and_then(|(_, t)| t.es.finite())
    }

    /// Project start times onto dates counted in days from `start`.
    ///
    /// Fractional offsets round up to whole days; infinite or negative
    /// offsets have no date.
    pub fn to_calendar(&self, start: NaiveDate) -> BTreeMap<N, CalendarDates> {
        self.times
            .iter()
            .map(|(node, t)| {
                let dates = CalendarDates {
                    earliest_start: offset_date(start, t.es),
                    latest_start: offset_date(start, t.ls),
                };
                (node.clone(), dates)
            })
            .collect()
    }

    pub fn into_inner(self) -> BTreeMap<N, StartTimes> {
        self.times
    }
}

fn offset_date(start: NaiveDate, offset: Distance) -> Option<NaiveDate> {
    let days = offset.finite()?.ceil();
    if days < 0.0 {
        return None;
    }
    start.checked_add_days(Days::new(days as u64))
}

impl<'a, N> IntoIterator for &'a Schedule<N> {
    type Item = (&'a N, &'a StartTimes);
    type IntoIter = btree_map::Iter<'a, N, StartTimes>;

    fn into_iter(self) -> Self::IntoIter {
        self.times.iter()
    }
}
