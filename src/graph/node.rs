//! Node identity and payload storage.
//!
//! This module provides [`NodeId`], the strongly-typed identity of a node within a
//! [`Graph`](crate::graph::Graph), and [`Node`], which pairs that identity with the
//! payload the node owns exclusively.
//!
//! Transient traversal state (the "visit order" of a node) deliberately does not live
//! here; algorithms keep it in a per-run [`VisitOrder`](crate::algorithms::VisitOrder)
//! so that a node's stored state is only its identity and payload.

use std::fmt;

/// A strongly-typed identifier for nodes within a graph.
///
/// `NodeId` wraps a non-negative `usize`, providing type safety to prevent accidental
/// mixing of node ids with edge ids or other integers. Ids are unique within a graph
/// and stable for the lifetime of the node: a graph never renumbers its nodes, and
/// auto-assigned ids are never reused after a removal.
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::{Graph, NodeId};
///
/// let mut graph = Graph::undirected();
/// let a: NodeId = graph.add_node("A");
/// let b: NodeId = graph.add_node("B");
///
/// assert_ne!(a, b);
/// assert!(a < b);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw value.
    ///
    /// Normal usage obtains ids from [`Graph::add_node`](crate::graph::Graph::add_node);
    /// this constructor exists for explicit-id insertion and for callers that persist ids.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw node id
    #[must_use]
    #[inline]
    pub const fn new(value: usize) -> Self {
        NodeId(value)
    }

    /// Returns the raw value of this node identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(value: usize) -> Self {
        NodeId(value)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

/// The minimal capability a node payload must offer: a human readable label.
///
/// Any payload implementing [`Display`](fmt::Display) gets this for free. Payloads that
/// are not `Display` can implement it directly.
///
/// ```rust
/// use graphwalk::graph::Label;
///
/// struct Action {
///     kind: &'static str,
///     version: u32,
/// }
///
/// impl Label for Action {
///     fn label(&self) -> String {
///         format!("{}@{}", self.kind, self.version)
///     }
/// }
///
/// assert_eq!(Action { kind: "fetch", version: 2 }.label(), "fetch@2");
/// assert_eq!("plain".label(), "plain");
/// ```
pub trait Label {
    /// Returns the display label of this payload.
    fn label(&self) -> String;
}

impl<T: fmt::Display + ?Sized> Label for T {
    fn label(&self) -> String {
        self.to_string()
    }
}

/// A node stored in a [`Graph`](crate::graph::Graph).
///
/// The id never changes after creation. The payload is owned by the node and can only
/// be replaced as a whole through
/// [`Graph::replace_payload`](crate::graph::Graph::replace_payload).
#[derive(Debug, Clone, PartialEq)]
pub struct Node<P> {
    id: NodeId,
    payload: P,
}

impl<P> Node<P> {
    pub(crate) fn new(id: NodeId, payload: P) -> Self {
        Node { id, payload }
    }

    /// Returns the id of this node.
    #[must_use]
    #[inline]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the payload carried by this node.
    #[must_use]
    #[inline]
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// Swaps in a new payload, handing back the old one.
    pub(crate) fn replace_payload(&mut self, payload: P) -> P {
        std::mem::replace(&mut self.payload, payload)
    }

    /// Consumes the node, returning its payload.
    pub(crate) fn into_payload(self) -> P {
        self.payload
    }
}

impl<P: Label> Node<P> {
    /// Returns the display label of the payload.
    #[must_use]
    pub fn label(&self) -> String {
        self.payload.label()
    }
}

impl<P: Label> fmt::Display for Node<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_id_ordering() {
        let mut ids = vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn test_node_id_hash() {
        let mut set = HashSet::new();
        set.insert(NodeId::new(1));
        set.insert(NodeId::new(2));
        set.insert(NodeId::new(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_id_conversions() {
        let node: NodeId = 123usize.into();
        assert_eq!(node.index(), 123);
        let raw: usize = node.into();
        assert_eq!(raw, 123);
    }

    #[test]
    fn test_node_id_formatting() {
        let node = NodeId::new(42);
        assert_eq!(format!("{node:?}"), "NodeId(42)");
        assert_eq!(format!("{node}"), "n42");
    }

    #[test]
    fn test_node_replace_payload() {
        let mut node = Node::new(NodeId::new(0), String::from("old"));
        let previous = node.replace_payload(String::from("new"));

        assert_eq!(previous, "old");
        assert_eq!(node.payload(), "new");
        assert_eq!(node.id(), NodeId::new(0));
    }

    #[test]
    fn test_node_label_from_display() {
        let node = Node::new(NodeId::new(7), 'x');
        assert_eq!(node.label(), "x");
        assert_eq!(node.to_string(), "x");
    }

    #[test]
    fn test_custom_label() {
        struct Opaque(u8);

        impl Label for Opaque {
            fn label(&self) -> String {
                format!("opaque-{}", self.0)
            }
        }

        let node = Node::new(NodeId::new(1), Opaque(9));
        assert_eq!(node.label(), "opaque-9");
    }
}
