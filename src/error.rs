use thiserror::Error;

use crate::{algorithms::AlgorithmKind, graph::NodeId};

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant describes a rejected request. Structural mutations are atomic: when a
/// [`Graph`](crate::graph::Graph) method returns an error, nothing was changed.
///
/// # Error Categories
///
/// ## Algorithm Errors
/// - [`Error::NotApplicable`] - The algorithm's preconditions do not hold for the graph
/// - [`Error::UnknownNode`] - The start selector picked a node that is not in the graph
///
/// ## Graph Mutation Errors
/// - [`Error::UnknownEndpoint`] - An edge names a node that does not exist
/// - [`Error::UnknownNode`] - A node-addressed operation names a node that does not exist
/// - [`Error::DuplicateIdentity`] - An explicit node id is already taken
/// - [`Error::DuplicateEdge`] - The node pair is already connected
/// - [`Error::InvalidWeight`] - An edge weight is NaN
///
/// ## Result Errors
/// - [`Error::InvalidMultiplicity`] - A path was given a count of zero
///
/// "No result" is not an error: an algorithm that has nothing to traverse returns an
/// empty [`PathContainer`](crate::path::PathContainer).
///
/// # Examples
///
/// ```rust
/// use graphwalk::{graph::Graph, Error};
///
/// let mut graph = Graph::undirected();
/// let a = graph.add_node("a");
/// let b = graph.add_node("b");
/// graph.add_edge(a, b, 1.0)?;
///
/// match graph.add_edge(b, a, 2.0) {
///     Err(Error::DuplicateEdge { from, to }) => {
///         assert_eq!((from, to), (b, a));
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The algorithm is not defined for this graph.
    ///
    /// Raised by [`Algorithm::run`](crate::algorithms::Algorithm::run) whenever
    /// [`works`](crate::algorithms::Algorithm::works) is false, for example a
    /// depth-first traversal of a directed graph or a topological sort of a cyclic one.
    #[error("{0} is not applicable to this graph")]
    NotApplicable(AlgorithmKind),

    /// An edge endpoint does not exist in the graph.
    #[error("Edge endpoint {0} does not exist")]
    UnknownEndpoint(NodeId),

    /// The addressed node does not exist in the graph.
    #[error("Node {0} does not exist")]
    UnknownNode(NodeId),

    /// A node with this id already exists.
    #[error("Node id {0} is already in use")]
    DuplicateIdentity(NodeId),

    /// The node pair is already connected.
    ///
    /// In a directed graph the pair is ordered; in an undirected graph `(a, b)` and
    /// `(b, a)` are the same pair. Also raised when switching a directed graph to
    /// undirected would merge two opposite edges.
    ///
    /// # Fields
    ///
    /// * `from` - Source of the rejected edge
    /// * `to` - Target of the rejected edge
    #[error("An edge between {from} and {to} already exists")]
    DuplicateEdge {
        /// Source of the rejected edge
        from: NodeId,
        /// Target of the rejected edge
        to: NodeId,
    },

    /// Edge weights must be comparable, so NaN is rejected.
    #[error("Invalid edge weight {0}")]
    InvalidWeight(f64),

    /// A path must occur at least once.
    #[error("Path multiplicity must be at least 1")]
    InvalidMultiplicity,
}
