//! Connected-component ("island") partitioning.
//!
//! An island is a maximal set of nodes connected by edges when edge direction is
//! ignored. [`Islands`] is the partition of a graph into islands, computed on demand by
//! [`Graph::islands`](crate::graph::Graph::islands) and cached until the next structural
//! mutation.
//!
//! # Ordering
//!
//! Islands are numbered in increasing order of the lowest node id they contain. Inside
//! an island, nodes are listed by ascending id and edges in insertion order.
//!
//! # Algorithm
//!
//! Union-find with path halving and union by size over a dense renumbering of the node
//! ids. Computation reads only ids and edge endpoints, so it never touches any traversal
//! state.

use std::collections::HashMap;

use crate::graph::{Edge, EdgeId, NodeId};

/// One connected component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Island {
    nodes: Vec<NodeId>,
    edges: Vec<EdgeId>,
}

impl Island {
    /// Node ids in this island, ascending.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Edge ids in this island, in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns `true` if `node` belongs to this island.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.binary_search(&node).is_ok()
    }

    /// Returns the lowest node id of the island.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }
}

/// The partition of a graph into islands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Islands {
    islands: Vec<Island>,
    membership: HashMap<NodeId, usize>,
}

impl Islands {
    /// Computes the island partition of the given nodes and edges.
    ///
    /// `nodes` must yield every node of the graph in ascending id order and `edges`
    /// every edge in insertion order; both endpoints of every edge must be in `nodes`.
    pub(crate) fn compute<'a>(
        nodes: impl Iterator<Item = NodeId>,
        edges: impl Iterator<Item = &'a Edge>,
    ) -> Self {
        let nodes: Vec<NodeId> = nodes.collect();
        let dense: HashMap<NodeId, usize> =
            nodes.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let mut sets = DisjointSet::new(nodes.len());
        let edges: Vec<&Edge> = edges.collect();
        for edge in &edges {
            if let (Some(&s), Some(&t)) = (dense.get(&edge.source()), dense.get(&edge.target())) {
                sets.union(s, t);
            }
        }

        let mut islands: Vec<Island> = Vec::new();
        let mut by_root: HashMap<usize, usize> = HashMap::new();
        let mut membership = HashMap::with_capacity(nodes.len());

        for (i, &id) in nodes.iter().enumerate() {
            let root = sets.find(i);
            let island = *by_root.entry(root).or_insert_with(|| {
                islands.push(Island::default());
                islands.len() - 1
            });
            islands[island].nodes.push(id);
            membership.insert(id, island);
        }

        for edge in edges {
            if let Some(&island) = membership.get(&edge.source()) {
                islands[island].edges.push(edge.id());
            }
        }

        Islands {
            islands,
            membership,
        }
    }

    /// Returns the number of islands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.islands.len()
    }

    /// Returns `true` if there are no islands (the graph is empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }

    /// Returns the island at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Island> {
        self.islands.get(index)
    }

    /// Iterates over the islands in order.
    pub fn iter(&self) -> impl Iterator<Item = &Island> + '_ {
        self.islands.iter()
    }

    /// Returns the index of the island containing `node`.
    #[must_use]
    pub fn island_of(&self, node: NodeId) -> Option<usize> {
        self.membership.get(&node).copied()
    }

    /// Returns `true` if both nodes exist and share an island.
    #[must_use]
    pub fn same_island(&self, a: NodeId, b: NodeId) -> bool {
        match (self.island_of(a), self.island_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}

impl<'a> IntoIterator for &'a Islands {
    type Item = &'a Island;
    type IntoIter = std::slice::Iter<'a, Island>;

    fn into_iter(self) -> Self::IntoIter {
        self.islands.iter()
    }
}

/// Union-find over `0..len`.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        DisjointSet {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
    }
}
