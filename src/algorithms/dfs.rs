//! Depth-first traversal over undirected graphs.
//!
//! The traversal numbers nodes in the order it reaches them and records one [`Step`]
//! per examined adjacency:
//!
//! - the root contributes `(root, none)`
//! - a tree edge to an unvisited node `y` contributes `(y, edge)`
//! - an adjacency to an already visited node (the parent, a back edge or a self-loop)
//!   contributes an absent step
//!
//! Nodes are examined in the run's iteration order: the graph's ascending id order with
//! the start node swapped into the first position. The recursion is emulated with an explicit stack, so
//! deep graphs cannot overflow the call stack.

use std::collections::HashMap;

use crate::{
    algorithms::{Algorithm, AlgorithmKind, VisitOrder},
    graph::{Edge, Graph, NodeId},
    path::{Path, PathContainer, Step},
    visitor::Visitor,
};

/// Depth-first traversal.
///
/// By default only nodes reachable from the start node are visited. With
/// [`covering_all`](Self::covering_all) every remaining node, in iteration order, roots
/// a further traversal once the previous one is exhausted; a remaining node that was
/// already reached contributes an absent step instead.
///
/// # Examples
///
/// ```rust
/// use graphwalk::algorithms::{Algorithm, DepthFirstTraversal, Fixed};
/// use graphwalk::graph::Graph;
/// use graphwalk::visitor::NoopVisitor;
///
/// let mut graph = Graph::undirected();
/// let a = graph.add_node('a');
/// let b = graph.add_node('b');
/// let c = graph.add_node('c');
/// graph.add_edge(a, b, 1.0)?;
/// graph.add_edge(b, c, 1.0)?;
///
/// let paths = DepthFirstTraversal::new().run(&graph, &mut Fixed(b), &mut NoopVisitor)?;
/// let path = &paths.paths()[0];
///
/// // b, then a; back at a, b is already visited; then c; back at c, b again
/// assert_eq!(path.nodes(), vec![Some(b), Some(a), None, Some(c), None]);
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthFirstTraversal {
    all: bool,
}

/// One emulated recursion level.
struct Frame {
    /// Adjacent nodes with the connecting edge, in iteration order
    neighbors: Vec<(NodeId, Edge)>,
    cursor: usize,
}

impl DepthFirstTraversal {
    /// Creates a traversal that visits only nodes reachable from the start node.
    #[must_use]
    pub const fn new() -> Self {
        DepthFirstTraversal { all: false }
    }

    /// Creates a traversal that covers every node of the graph.
    #[must_use]
    pub const fn covering_all() -> Self {
        DepthFirstTraversal { all: true }
    }

    /// Returns `true` if this traversal covers nodes unreachable from the start.
    #[must_use]
    pub const fn covers_all(&self) -> bool {
        self.all
    }

    /// Runs the traversal from `start`.
    ///
    /// # Returns
    ///
    /// The recorded path together with the visit order assigned to every reached node.
    /// An unknown `start` yields an empty path.
    pub fn search<P>(
        &self,
        graph: &Graph<P>,
        start: NodeId,
        visitor: &mut dyn Visitor<P>,
    ) -> (Path, VisitOrder) {
        let order = iteration_order(graph, start);
        let position: HashMap<NodeId, usize> =
            order.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let mut visited = VisitOrder::new();
        let mut steps = Vec::new();

        let roots = if self.all { order.len() } else { order.len().min(1) };
        for &root in &order[..roots] {
            if visited.is_visited(root) {
                steps.push(Step::absent());
                continue;
            }
            steps.push(Step::root(root));
            explore(graph, root, &position, &mut visited, &mut steps, visitor);
        }

        (Path::single(steps), visited)
    }
}

/// Node ids in ascending order with `start` swapped into the first slot.
///
/// The node that held the first slot takes the start's old position. Unknown `start`
/// yields no ids at all.
fn iteration_order<P>(graph: &Graph<P>, start: NodeId) -> Vec<NodeId> {
    let mut ids: Vec<NodeId> = graph.node_ids().collect();
    let Some(at) = ids.iter().position(|&id| id == start) else {
        return Vec::new();
    };
    ids.swap(0, at);
    ids
}

/// Walks everything reachable from `root`, which must be unvisited.
fn explore<P>(
    graph: &Graph<P>,
    root: NodeId,
    position: &HashMap<NodeId, usize>,
    visited: &mut VisitOrder,
    steps: &mut Vec<Step>,
    visitor: &mut dyn Visitor<P>,
) {
    let mut stack = vec![enter(graph, root, position, visited, visitor)];

    while let Some(frame) = stack.last_mut() {
        let Some(&(next, edge)) = frame.neighbors.get(frame.cursor) else {
            stack.pop();
            continue;
        };
        frame.cursor += 1;

        if visited.is_visited(next) {
            steps.push(Step::absent());
            continue;
        }

        steps.push(Step::via(next, edge));
        visitor.visit_edge(&edge);
        stack.push(enter(graph, next, position, visited, visitor));
    }
}

/// Numbers `node`, reports it and prepares its adjacency list.
fn enter<P>(
    graph: &Graph<P>,
    node: NodeId,
    position: &HashMap<NodeId, usize>,
    visited: &mut VisitOrder,
    visitor: &mut dyn Visitor<P>,
) -> Frame {
    visited.visit(node);
    if let Some(n) = graph.node(node) {
        visitor.visit_node(n);
    }

    let mut neighbors: Vec<(NodeId, Edge)> = graph
        .outgoing_edges(node)
        .filter_map(|edge| edge.opposite(node).map(|other| (other, *edge)))
        .collect();
    neighbors.sort_by_key(|(other, _)| position.get(other).copied().unwrap_or(usize::MAX));

    Frame {
        neighbors,
        cursor: 0,
    }
}

impl<P> Algorithm<P> for DepthFirstTraversal {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::DepthFirstTraversal
    }

    fn works(&self, graph: &Graph<P>) -> bool {
        !graph.is_directed() && !graph.is_empty()
    }

    fn execute(
        &self,
        graph: &Graph<P>,
        start: NodeId,
        visitor: &mut dyn Visitor<P>,
    ) -> PathContainer {
        let (path, _) = self.search(graph, start, visitor);
        PathContainer::from(vec![path])
    }
}
