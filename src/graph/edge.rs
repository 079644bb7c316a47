//! Edge identity and the weighted edge value object.
//!
//! An [`Edge`] connects a source and a destination [`NodeId`] with a numeric weight.
//! Edges are immutable once created. Whether an edge may be walked in both directions
//! is decided by the owning [`Graph`](crate::graph::Graph), never by the edge itself.
//!
//! Every edge also carries an [`EdgeId`], a sequence number handed out by the graph in
//! insertion order. It is never reused, which makes it usable as a stable
//! "inserted earlier" tie-breaker.

use std::fmt;

use crate::graph::NodeId;

/// A strongly-typed identifier for edges within a graph.
///
/// `EdgeId` values are assigned sequentially in insertion order and are never reused,
/// so comparing two ids tells which edge was inserted first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw sequence number.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw sequence number of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A weighted edge between two nodes.
///
/// `Edge` is a small `Copy` value: paths and visitors receive copies, so holding on to
/// one never borrows the graph.
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::Graph;
///
/// let mut graph = Graph::directed();
/// let a = graph.add_node("a");
/// let f = graph.add_node("f");
/// graph.add_edge(a, f, 9.0)?;
///
/// let edge = graph.edge(a, f).copied().unwrap();
/// assert_eq!(edge.source(), a);
/// assert_eq!(edge.target(), f);
/// assert_eq!(edge.weight(), 9.0);
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    weight: f64,
}

impl Edge {
    pub(crate) const fn new(id: EdgeId, source: NodeId, target: NodeId, weight: f64) -> Self {
        Edge {
            id,
            source,
            target,
            weight,
        }
    }

    /// Returns the insertion-ordered id of this edge.
    #[must_use]
    #[inline]
    pub const fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the source node.
    #[must_use]
    #[inline]
    pub const fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the destination node.
    #[must_use]
    #[inline]
    pub const fn target(&self) -> NodeId {
        self.target
    }

    /// Returns the weight of the edge.
    #[must_use]
    #[inline]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns `true` if `node` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    /// Returns the endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    ///
    /// For a self-loop the opposite endpoint is the node itself.
    #[must_use]
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }

    /// Checks whether this edge connects `a` to `b`.
    ///
    /// In directed mode only the ordered pair `(source, target)` matches; otherwise
    /// either orientation does.
    #[must_use]
    pub fn connects(&self, a: NodeId, b: NodeId, directed: bool) -> bool {
        (self.source == a && self.target == b)
            || (!directed && self.source == b && self.target == a)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}
