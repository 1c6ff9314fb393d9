//! Dense matrix indices for ordered nodes.
//!
//! Maps each node to its position in the total order so distance matrix
//! rows and columns can be addressed directly.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Node <-> matrix index mapping, built once per computation.
#[derive(Debug, Clone)]
pub struct NodeIndex<N> {
    to_index: FxHashMap<N, usize>,
    from_index: Vec<N>,
}

impl<N: Eq + Hash + Clone> NodeIndex<N> {
    /// Build from nodes already in ascending order.
    pub fn new<'a, I>(ordered: I) -> Self
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        let from_index: Vec<N> = ordered.into_iter().cloned().collect();
        let mut to_index =
            FxHashMap::with_capacity_and_hasher(from_index.len(), Default::default());
        for (i, node) in from_index.iter().enumerate() {
            to_index.insert(node.clone(), i);
        }
        Self {
            to_index,
            from_index,
        }
    }

    #[inline]
    pub fn get(&self, node: &N) -> Option<usize> {
        self.to_index.get(node).copied()
    }

    #[inline]
    pub fn resolve(&self, index: usize) -> Option<&N> {
        self.from_index.get(index)
    }

    /// Nodes in index order.
    pub fn nodes(&self) -> &[N] {
        &self.from_index
    }

    pub fn len(&self) -> usize {
        self.from_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_index.is_empty()
    }
}
