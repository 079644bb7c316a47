//! Minimum spanning forest construction.
//!
//! Prim-style greedy growth, one tree per island. Connectivity ignores edge direction,
//! matching the island partition, so the forest is defined for directed graphs too.
//!
//! From the tree grown so far the cheapest edge to an unreached node is taken next.
//! Ties are broken by the lower destination node id, then by the edge inserted first.
//! Weights are compared with [`f64::total_cmp`]; the graph rejects NaN weights.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{
    algorithms::{Algorithm, AlgorithmKind, VisitOrder},
    graph::{Edge, Graph, NodeId},
    path::{Path, PathContainer, Step},
    visitor::Visitor,
};

/// Minimum spanning forest.
///
/// The island of the start node is spanned first, the remaining islands follow in
/// island order, each rooted at its lowest node id. Every island yields one [`Path`]
/// beginning with its root, followed by one step per tree edge in the order the
/// edges were chosen.
///
/// # Examples
///
/// ```rust
/// use graphwalk::algorithms::{Algorithm, FirstNode, SpanningTree};
/// use graphwalk::graph::Graph;
/// use graphwalk::visitor::NoopVisitor;
///
/// let mut graph = Graph::undirected();
/// let a = graph.add_node("a");
/// let b = graph.add_node("b");
/// let c = graph.add_node("c");
/// graph.add_edge(a, b, 4.0)?;
/// graph.add_edge(b, c, 1.0)?;
/// graph.add_edge(a, c, 2.0)?;
///
/// let forest = SpanningTree::new().run(&graph, &mut FirstNode, &mut NoopVisitor)?;
/// assert_eq!(forest.len(), 1);
/// assert_eq!(forest.paths()[0].weight(), 3.0);
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanningTree;

impl SpanningTree {
    /// Creates the spanning forest algorithm.
    #[must_use]
    pub const fn new() -> Self {
        SpanningTree
    }

    /// Builds the spanning forest, beginning with the island of `start`.
    pub fn forest<P>(
        &self,
        graph: &Graph<P>,
        start: NodeId,
        visitor: &mut dyn Visitor<P>,
    ) -> Vec<Path> {
        let mut in_tree = VisitOrder::new();
        let roots = std::iter::once(start)
            .filter(|&id| graph.contains_node(id))
            .chain(graph.islands().iter().filter_map(|island| island.root()));

        let mut paths = Vec::with_capacity(graph.island_count());
        for root in roots {
            if in_tree.is_visited(root) {
                continue;
            }
            paths.push(grow(graph, root, &mut in_tree, visitor));
        }
        paths
    }
}

/// A frontier edge leading to `target`.
///
/// Ordered so that the cheapest candidate is the greatest, turning
/// [`BinaryHeap`] into a min-heap.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    target: NodeId,
    edge: Edge,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .edge
            .weight()
            .total_cmp(&self.edge.weight())
            .then_with(|| other.target.cmp(&self.target))
            .then_with(|| other.edge.id().cmp(&self.edge.id()))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Grows one tree from `root` over its whole island.
fn grow<P>(
    graph: &Graph<P>,
    root: NodeId,
    in_tree: &mut VisitOrder,
    visitor: &mut dyn Visitor<P>,
) -> Path {
    let mut steps = vec![Step::root(root)];
    let mut frontier = BinaryHeap::new();

    add_node(graph, root, in_tree, &mut frontier, visitor);

    while let Some(Candidate { target, edge }) = frontier.pop() {
        if in_tree.is_visited(target) {
            continue;
        }
        steps.push(Step::via(target, edge));
        visitor.visit_edge(&edge);
        add_node(graph, target, in_tree, &mut frontier, visitor);
    }

    Path::single(steps)
}

fn add_node<P>(
    graph: &Graph<P>,
    node: NodeId,
    in_tree: &mut VisitOrder,
    frontier: &mut BinaryHeap<Candidate>,
    visitor: &mut dyn Visitor<P>,
) {
    in_tree.visit(node);
    if let Some(n) = graph.node(node) {
        visitor.visit_node(n);
    }

    for edge in graph.incident_edges(node) {
        if let Some(target) = edge.opposite(node) {
            if !in_tree.is_visited(target) {
                frontier.push(Candidate {
                    target,
                    edge: *edge,
                });
            }
        }
    }
}

impl<P> Algorithm<P> for SpanningTree {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::SpanningTree
    }

    fn works(&self, graph: &Graph<P>) -> bool {
        !graph.is_empty()
    }

    fn execute(
        &self,
        graph: &Graph<P>,
        start: NodeId,
        visitor: &mut dyn Visitor<P>,
    ) -> PathContainer {
        self.forest(graph, start, visitor).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::{FirstNode, Fixed},
        graph::EdgeId,
        visitor::{NoopVisitor, Recorder, Visit},
    };

    fn n(id: usize) -> NodeId {
        NodeId::new(id)
    }

    fn build(directed: bool, nodes: usize, edges: &[(usize, usize, f64)]) -> Graph<usize> {
        let mut graph = Graph::new(directed);
        for i in 0..nodes {
            graph.add_node(i);
        }
        for &(s, t, w) in edges {
            graph.add_edge(n(s), n(t), w).unwrap();
        }
        graph
    }

    #[test]
    fn test_works() {
        let tree = SpanningTree::new();
        assert!(!Algorithm::<usize>::works(&tree, &build(false, 0, &[])));
        assert!(Algorithm::<usize>::works(&tree, &build(false, 1, &[])));
        assert!(Algorithm::<usize>::works(&tree, &build(true, 1, &[])));
    }

    #[test]
    fn test_picks_cheapest_edges() {
        // a=0, b=1, c=2, d=3
        let graph = build(
            false,
            4,
            &[(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0), (1, 3, 5.0), (2, 3, 8.0)],
        );
        let forest = SpanningTree::new().forest(&graph, n(0), &mut NoopVisitor);

        assert_eq!(forest.len(), 1);
        let path = &forest[0];
        assert_eq!(
            path.visited_nodes().collect::<Vec<_>>(),
            vec![n(0), n(2), n(1), n(3)]
        );
        assert_eq!(path.weight(), 8.0);
        assert_eq!(path.traversed_edges().count(), 3);
    }

    #[test]
    fn test_ties_prefer_lower_target_then_older_edge() {
        let graph = build(false, 3, &[(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0)]);
        let forest = SpanningTree::new().forest(&graph, n(0), &mut NoopVisitor);

        let edges: Vec<EdgeId> = forest[0].traversed_edges().map(Edge::id).collect();
        assert_eq!(edges, vec![EdgeId::new(0), EdgeId::new(1)]);
    }

    #[test]
    fn test_one_tree_per_island() {
        // {0, 1}, {2, 3, 4}, {5}
        let graph = build(false, 6, &[(0, 1, 1.0), (3, 2, 1.0), (4, 3, 1.0)]);
        let forest = SpanningTree::new().forest(&graph, n(3), &mut NoopVisitor);

        assert_eq!(forest.len(), 3);
        assert_eq!(forest[0].steps()[0], Step::root(n(3)));
        assert_eq!(forest[1].steps()[0], Step::root(n(0)));
        assert_eq!(forest[2].steps(), &[Step::root(n(5))]);

        let edges: usize = forest.iter().map(|p| p.traversed_edges().count()).sum();
        assert_eq!(edges, graph.node_count() - graph.island_count());
    }

    #[test]
    fn test_direction_is_ignored() {
        // every edge points into 0; 0 still reaches all of them
        let graph = build(true, 3, &[(1, 0, 2.0), (2, 0, 1.0)]);
        let forest = SpanningTree::new().forest(&graph, n(0), &mut NoopVisitor);

        assert_eq!(forest.len(), 1);
        assert_eq!(
            forest[0].visited_nodes().collect::<Vec<_>>(),
            vec![n(0), n(2), n(1)]
        );
    }

    #[test]
    fn test_visitor_order() {
        let graph = build(false, 3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        let mut recorder = Recorder::new();
        SpanningTree::new()
            .run(&graph, &mut Fixed(n(1)), &mut recorder)
            .unwrap();

        let visits = recorder.visits();
        assert_eq!(visits.len(), 5);
        assert_eq!(visits[0], Visit::Node(n(1)));
        assert!(matches!(visits[1], Visit::Edge(e) if e.id() == EdgeId::new(0)));
        assert_eq!(visits[2], Visit::Node(n(0)));
        assert!(matches!(visits[3], Visit::Edge(e) if e.id() == EdgeId::new(1)));
        assert_eq!(visits[4], Visit::Node(n(2)));
    }

    #[test]
    fn test_run_packages_paths() {
        let graph = build(false, 4, &[(0, 1, 1.0)]);
        let paths = SpanningTree::new()
            .run(&graph, &mut FirstNode, &mut NoopVisitor)
            .unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.count() == 1));
    }

    #[test]
    fn test_negative_and_infinite_weights() {
        let graph = build(
            false,
            3,
            &[(0, 1, f64::INFINITY), (1, 2, -3.0), (0, 2, 0.5)],
        );
        let forest = SpanningTree::new().forest(&graph, n(0), &mut NoopVisitor);
        assert_eq!(forest[0].weight(), -2.5);
    }
}
