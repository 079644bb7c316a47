//! The algorithm framework and the algorithms built on it.
//!
//! Every algorithm implements [`Algorithm`]: a cheap applicability check
//! ([`works`](Algorithm::works)) and an execution step. The provided
//! [`run`](Algorithm::run) method ties them together:
//!
//! 1. re-check applicability, failing with [`Error::NotApplicable`]
//! 2. ask the caller's [`StartSelector`] for a start node
//! 3. execute, reporting to the caller's [`Visitor`], and return a [`PathContainer`]
//!
//! A selector that declines to choose a node yields an empty [`PathContainer`]. That
//! is a normal outcome, not an error.
//!
//! # Available Algorithms
//!
//! | Algorithm | Applicable to | Result |
//! |-----------|---------------|--------|
//! | [`DepthFirstTraversal`] | undirected, non-empty | one path with absent steps for re-visits |
//! | [`SpanningTree`] | non-empty | one minimum spanning tree path per island |
//! | [`TopologicalSort`] | directed, acyclic, non-empty | one path in dependency order |
//!
//! Visitation state lives in a per-run [`VisitOrder`], never in the graph. Runs only
//! borrow the graph, so any number of them may share one graph.
//!
//! # Examples
//!
//! ```rust
//! use graphwalk::algorithms::{Algorithm, FirstNode, TopologicalSort};
//! use graphwalk::graph::Graph;
//! use graphwalk::visitor::Recorder;
//!
//! let mut graph = Graph::directed();
//! let shirt = graph.add_node("shirt");
//! let tie = graph.add_node("tie");
//! let jacket = graph.add_node("jacket");
//! graph.add_edge(shirt, tie, 1.0)?;
//! graph.add_edge(tie, jacket, 1.0)?;
//!
//! let sort = TopologicalSort::new();
//! assert!(sort.works(&graph));
//!
//! let mut recorder = Recorder::new();
//! let paths = sort.run(&graph, &mut FirstNode, &mut recorder)?;
//! assert_eq!(paths.len(), 1);
//! assert_eq!(recorder.nodes(), vec![shirt, tie, jacket]);
//! # Ok::<(), graphwalk::Error>(())
//! ```

mod dfs;
mod spanning;
mod topological;

pub use dfs::DepthFirstTraversal;
pub use spanning::SpanningTree;
pub use topological::{has_cycle, Coverage, Order, TopologicalSort};

use std::collections::HashMap;

use strum::{EnumCount, EnumIter, IntoEnumIterator};
use tracing::debug;

use crate::{
    graph::{Graph, NodeId},
    path::PathContainer,
    visitor::Visitor,
    Error, Result,
};

/// Identifies an algorithm independently of its configuration.
///
/// The `Display` output is the human readable name, suitable for menus and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, EnumIter, EnumCount)]
pub enum AlgorithmKind {
    /// [`DepthFirstTraversal`]
    #[strum(to_string = "Depth First Traversal")]
    DepthFirstTraversal,
    /// [`SpanningTree`]
    #[strum(to_string = "Spanning Tree")]
    SpanningTree,
    /// [`TopologicalSort`]
    #[strum(to_string = "Topological Sort")]
    Topological,
}

impl AlgorithmKind {
    /// Creates the default-configured algorithm of this kind.
    #[must_use]
    pub fn build<P>(self) -> Box<dyn Algorithm<P>> {
        match self {
            AlgorithmKind::DepthFirstTraversal => Box::new(DepthFirstTraversal::new()),
            AlgorithmKind::SpanningTree => Box::new(SpanningTree::new()),
            AlgorithmKind::Topological => Box::new(TopologicalSort::new()),
        }
    }
}

/// Lists the algorithm kinds whose default configuration works on `graph`.
#[must_use]
pub fn applicable<P>(graph: &Graph<P>) -> Vec<AlgorithmKind> {
    AlgorithmKind::iter()
        .filter(|kind| kind.build::<P>().works(graph))
        .collect()
}

/// Supplies the start node of a run.
///
/// Any closure `FnMut(&Graph<P>) -> Option<NodeId>` is a selector. Returning `None`
/// means "nothing to do" and makes the run return an empty [`PathContainer`].
pub trait StartSelector<P> {
    /// Chooses the start node, or `None` to skip the run.
    fn select(&mut self, graph: &Graph<P>) -> Option<NodeId>;
}

impl<P, F> StartSelector<P> for F
where
    F: FnMut(&Graph<P>) -> Option<NodeId>,
{
    fn select(&mut self, graph: &Graph<P>) -> Option<NodeId> {
        self(graph)
    }
}

/// Selects the node with the lowest id.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstNode;

impl<P> StartSelector<P> for FirstNode {
    fn select(&mut self, graph: &Graph<P>) -> Option<NodeId> {
        graph.node_ids().next()
    }
}

/// Always selects the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed(pub NodeId);

impl<P> StartSelector<P> for Fixed {
    fn select(&mut self, _graph: &Graph<P>) -> Option<NodeId> {
        Some(self.0)
    }
}

/// The common contract of all algorithms.
///
/// The trait is object safe, so algorithms can be chosen at runtime through
/// [`AlgorithmKind::build`].
pub trait Algorithm<P> {
    /// Returns which algorithm this is.
    fn kind(&self) -> AlgorithmKind;

    /// Returns `true` if the algorithm is defined for `graph`.
    ///
    /// This is side-effect free and cheap relative to a full run.
    fn works(&self, graph: &Graph<P>) -> bool;

    /// Executes the algorithm from `start`.
    ///
    /// Called by [`run`](Self::run) once `works` holds and `start` is known to exist.
    /// Calling it directly skips those checks.
    fn execute(
        &self,
        graph: &Graph<P>,
        start: NodeId,
        visitor: &mut dyn Visitor<P>,
    ) -> PathContainer;

    /// Checks applicability, resolves the start node and executes.
    ///
    /// # Errors
    ///
    /// - [`Error::NotApplicable`] if [`works`](Self::works) is false for `graph`
    /// - [`Error::UnknownNode`] if the selector returned a node that is not in `graph`
    fn run(
        &self,
        graph: &Graph<P>,
        selector: &mut dyn StartSelector<P>,
        visitor: &mut dyn Visitor<P>,
    ) -> Result<PathContainer> {
        let kind = self.kind();
        if !self.works(graph) {
            debug!(algorithm = %kind, "algorithm not applicable");
            return Err(Error::NotApplicable(kind));
        }

        let Some(start) = selector.select(graph) else {
            debug!(algorithm = %kind, "no start node selected");
            return Ok(PathContainer::new());
        };
        if !graph.contains_node(start) {
            return Err(Error::UnknownNode(start));
        }

        debug!(algorithm = %kind, %start, nodes = graph.node_count(), "running");
        let paths = self.execute(graph, start, visitor);
        debug!(algorithm = %kind, paths = paths.len(), "finished");
        Ok(paths)
    }
}

/// Per-run visitation state.
///
/// Maps each visited node to its 1-based visit order. Nodes absent from the map are
/// unvisited. A fresh `VisitOrder` is created for every run, so concurrent runs over
/// the same graph never interfere.
#[derive(Debug, Clone, Default)]
pub struct VisitOrder {
    order: HashMap<NodeId, usize>,
}

impl VisitOrder {
    /// Creates an empty order where every node is unvisited.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `node` visited and returns its order.
    ///
    /// A node that was already visited keeps its original order.
    pub fn visit(&mut self, node: NodeId) -> usize {
        let next = self.order.len() + 1;
        *self.order.entry(node).or_insert(next)
    }

    /// Returns the visit order of `node`, or `0` if it was not visited.
    #[must_use]
    pub fn order(&self, node: NodeId) -> usize {
        self.order.get(&node).copied().unwrap_or(0)
    }

    /// Returns `true` if `node` has been visited.
    #[must_use]
    pub fn is_visited(&self, node: NodeId) -> bool {
        self.order.contains_key(&node)
    }

    /// Returns the number of visited nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing has been visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the visited nodes sorted by visit order.
    #[must_use]
    pub fn sequence(&self) -> Vec<NodeId> {
        let mut nodes: Vec<(usize, NodeId)> =
            self.order.iter().map(|(&node, &order)| (order, node)).collect();
        nodes.sort_unstable();
        nodes.into_iter().map(|(_, node)| node).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::NoopVisitor;

    #[test]
    fn test_kind_names() {
        assert_eq!(AlgorithmKind::COUNT, 3);
        assert_eq!(
            AlgorithmKind::DepthFirstTraversal.to_string(),
            "Depth First Traversal"
        );
        assert_eq!(AlgorithmKind::SpanningTree.to_string(), "Spanning Tree");
        assert_eq!(AlgorithmKind::Topological.to_string(), "Topological Sort");
    }

    #[test]
    fn test_build_matches_kind() {
        for kind in AlgorithmKind::iter() {
            assert_eq!(kind.build::<()>().kind(), kind);
        }
    }

    #[test]
    fn test_applicable() {
        let empty: Graph<()> = Graph::undirected();
        assert!(applicable(&empty).is_empty());

        let mut undirected = Graph::undirected();
        undirected.add_node(());
        assert_eq!(
            applicable(&undirected),
            vec![AlgorithmKind::DepthFirstTraversal, AlgorithmKind::SpanningTree]
        );

        let mut directed = Graph::directed();
        directed.add_node(());
        assert_eq!(
            applicable(&directed),
            vec![AlgorithmKind::SpanningTree, AlgorithmKind::Topological]
        );
    }

    #[test]
    fn test_selectors() {
        let mut graph = Graph::undirected();
        let a = graph.add_node_with_id(NodeId::new(4), "a").unwrap();
        let b = graph.add_node_with_id(NodeId::new(2), "b").unwrap();

        assert_eq!(FirstNode.select(&graph), Some(b));
        assert_eq!(Fixed(a).select(&graph), Some(a));

        let mut by_payload = |g: &Graph<&'static str>| -> Option<NodeId> {
            g.nodes().find(|n| *n.payload() == "a").map(|n| n.id())
        };
        assert_eq!(StartSelector::select(&mut by_payload, &graph), Some(a));
    }

    #[test]
    fn test_run_without_start_is_empty() {
        let mut graph = Graph::undirected();
        graph.add_node(());

        let paths = DepthFirstTraversal::new()
            .run(&graph, &mut |_: &Graph<()>| -> Option<NodeId> { None }, &mut NoopVisitor)
            .unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_run_unknown_start() {
        let mut graph = Graph::undirected();
        graph.add_node(());

        let err = SpanningTree::new()
            .run(&graph, &mut Fixed(NodeId::new(9)), &mut NoopVisitor)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownNode(id) if id == NodeId::new(9)));
    }

    #[test]
    fn test_run_not_applicable() {
        let graph: Graph<()> = Graph::directed();
        let err = SpanningTree::new()
            .run(&graph, &mut FirstNode, &mut NoopVisitor)
            .unwrap_err();
        assert!(matches!(err, Error::NotApplicable(AlgorithmKind::SpanningTree)));
    }

    #[test]
    fn test_visit_order() {
        let mut order = VisitOrder::new();
        assert_eq!(order.order(NodeId::new(3)), 0);

        assert_eq!(order.visit(NodeId::new(3)), 1);
        assert_eq!(order.visit(NodeId::new(1)), 2);
        assert_eq!(order.visit(NodeId::new(3)), 1);

        assert!(order.is_visited(NodeId::new(1)));
        assert_eq!(order.len(), 2);
        assert_eq!(order.sequence(), vec![NodeId::new(3), NodeId::new(1)]);
    }
}
