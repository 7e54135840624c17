use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, Result};

/// Undirected graph over opaque node identities.
///
/// Nodes live in an index-addressed arena in insertion order; each node's
/// neighbors are a set of arena indices. Every edge is stored in both
/// directions.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<BTreeSet<usize>>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }
}

impl<N: Copy + Eq + Hash + Debug> Graph<N> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `n` if absent and returns its arena index.
    pub fn add_node(&mut self, n: N) -> usize {
        if let Some(&i) = self.index.get(&n) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(n);
        self.index.insert(n, i);
        self.adjacency.push(BTreeSet::new());
        i
    }

    /// Connects `a` and `b` in both directions.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::UnknownNode` if either endpoint was not added with
    /// [`Graph::add_node`] first.
    pub fn add_edge(&mut self, a: N, b: N) -> Result<()> {
        let ia = self.require(a)?;
        let ib = self.require(b)?;
        self.adjacency[ia].insert(ib);
        self.adjacency[ib].insert(ia);
        Ok(())
    }

    /// All nodes, isolated ones included, in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Neighbors of `n`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::UnknownNode` if `n` is not in the graph.
    pub fn neighbors_of(&self, n: N) -> Result<Vec<N>> {
        let i = self.require(n)?;
        Ok(self.adjacency[i].iter().map(|&j| self.nodes[j]).collect())
    }

    #[must_use]
    pub fn contains(&self, n: N) -> bool {
        self.index.contains_key(&n)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node stored at arena index `i`.
    pub(crate) fn node_at(&self, i: usize) -> N {
        self.nodes[i]
    }

    /// Neighbor indices of the node at arena index `i`.
    pub(crate) fn neighbor_indices(&self, i: usize) -> &BTreeSet<usize> {
        &self.adjacency[i]
    }

    fn require(&self, n: N) -> Result<usize> {
        self.index
            .get(&n)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(format!("{n:?}")).into())
    }
}
