//! The visitor protocol.
//!
//! Algorithms notify a [`Visitor`] about each node and edge they touch, in visitation
//! order. Visitors only receive shared references, so they can read but never
//! restructure the graph during a callback. Typical visitors print a report or build
//! an export document.

use crate::graph::{Edge, Node, NodeId};

/// Observer of an algorithm run.
///
/// Both methods default to doing nothing, so a visitor only overrides what it needs.
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::{Edge, Node};
/// use graphwalk::visitor::Visitor;
///
/// #[derive(Default)]
/// struct Printer(Vec<String>);
///
/// impl Visitor<&str> for Printer {
///     fn visit_node(&mut self, node: &Node<&str>) {
///         self.0.push(format!("node {}", node.payload()));
///     }
///
///     fn visit_edge(&mut self, edge: &Edge) {
///         self.0.push(format!("edge {edge}"));
///     }
/// }
/// ```
pub trait Visitor<P> {
    /// Called once for each node the algorithm visits.
    fn visit_node(&mut self, _node: &Node<P>) {}

    /// Called once for each edge the algorithm follows.
    fn visit_edge(&mut self, _edge: &Edge) {}
}

impl<P, V: Visitor<P> + ?Sized> Visitor<P> for &mut V {
    fn visit_node(&mut self, node: &Node<P>) {
        (**self).visit_node(node);
    }

    fn visit_edge(&mut self, edge: &Edge) {
        (**self).visit_edge(edge);
    }
}

/// A visitor that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVisitor;

impl<P> Visitor<P> for NoopVisitor {}

/// One recorded callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visit {
    /// `visit_node` was called for this node
    Node(NodeId),
    /// `visit_edge` was called for this edge
    Edge(Edge),
}

/// A visitor that records every callback in order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    visits: Vec<Visit>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded callbacks in order.
    #[must_use]
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Returns the visited nodes in order.
    #[must_use]
    pub fn nodes(&self) -> Vec<NodeId> {
        self.visits
            .iter()
            .filter_map(|visit| match visit {
                Visit::Node(id) => Some(*id),
                Visit::Edge(_) => None,
            })
            .collect()
    }

    /// Returns the followed edges in order.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.visits
            .iter()
            .filter_map(|visit| match visit {
                Visit::Edge(edge) => Some(*edge),
                Visit::Node(_) => None,
            })
            .collect()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.visits.clear();
    }
}

impl<P> Visitor<P> for Recorder {
    fn visit_node(&mut self, node: &Node<P>) {
        self.visits.push(Visit::Node(node.id()));
    }

    fn visit_edge(&mut self, edge: &Edge) {
        self.visits.push(Visit::Edge(*edge));
    }
}
