//! Topological ordering of directed acyclic graphs.
//!
//! The ordering is the reverse postorder of a depth-first search: a node is emitted
//! only after everything reachable from it, and the emitted sequence is then reversed.
//! Successors are explored by ascending node id, and the search starts at the start
//! node, so the result is deterministic.
//!
//! Cycle detection uses the same search. Reaching a node that is still on the active
//! search stack means a back edge, and therefore a cycle.

use std::collections::HashMap;

use crate::{
    algorithms::{Algorithm, AlgorithmKind},
    graph::{Graph, NodeId},
    path::{Path, PathContainer, Step},
    visitor::Visitor,
};

/// Direction of the emitted order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// Every edge `(u, v)` has `u` before `v`: roots first, leaves last
    #[default]
    Forward,
    /// Every edge `(u, v)` has `v` before `u`: leaves first, roots last
    Reverse,
}

/// Which nodes the ordering covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Coverage {
    /// Every node of the graph; unreached nodes root further searches in id order
    #[default]
    All,
    /// Only the start node and the nodes reachable from it
    Reachable,
}

/// Topological sort.
///
/// Applicable to non-empty directed graphs without cycles. The result is a single
/// [`Path`] listing nodes in the requested [`Order`]; its steps carry no edges.
///
/// # Examples
///
/// ```rust
/// use graphwalk::algorithms::{Algorithm, Fixed, Order, TopologicalSort};
/// use graphwalk::graph::Graph;
///
/// let mut graph = Graph::directed();
/// let fetch = graph.add_node("fetch");
/// let build = graph.add_node("build");
/// let test = graph.add_node("test");
/// graph.add_edge(fetch, build, 1.0)?;
/// graph.add_edge(build, test, 1.0)?;
///
/// let forward = TopologicalSort::new();
/// assert_eq!(forward.sort(&graph, fetch), Some(vec![fetch, build, test]));
///
/// let reverse = TopologicalSort::new().with_order(Order::Reverse);
/// assert_eq!(reverse.sort(&graph, fetch), Some(vec![test, build, fetch]));
///
/// graph.add_edge(test, fetch, 1.0)?;
/// assert!(!forward.works(&graph));
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopologicalSort {
    order: Order,
    coverage: Coverage,
}

impl TopologicalSort {
    /// Creates a forward sort covering all nodes.
    #[must_use]
    pub const fn new() -> Self {
        TopologicalSort {
            order: Order::Forward,
            coverage: Coverage::All,
        }
    }

    /// Sets the direction of the emitted order.
    #[must_use]
    pub const fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Sets which nodes are covered.
    #[must_use]
    pub const fn with_coverage(mut self, coverage: Coverage) -> Self {
        self.coverage = coverage;
        self
    }

    /// Returns the configured order.
    #[must_use]
    pub const fn order(&self) -> Order {
        self.order
    }

    /// Returns the configured coverage.
    #[must_use]
    pub const fn coverage(&self) -> Coverage {
        self.coverage
    }

    /// Computes the ordering, searching from `start` first.
    ///
    /// Edges are followed from source to target.
    ///
    /// # Returns
    ///
    /// The ordered node ids, or `None` if the search ran into a cycle.
    #[must_use]
    pub fn sort<P>(&self, graph: &Graph<P>, start: NodeId) -> Option<Vec<NodeId>> {
        let roots = match self.coverage {
            Coverage::All => start_first(graph, start),
            Coverage::Reachable if graph.contains_node(start) => vec![start],
            Coverage::Reachable => Vec::new(),
        };

        let mut order = postorder(graph, roots).ok()?;
        if self.order == Order::Forward {
            order.reverse();
        }
        Some(order)
    }
}

/// Returns `true` if following edges from source to target can lead back to a node.
///
/// A self-loop is a cycle.
#[must_use]
pub fn has_cycle<P>(graph: &Graph<P>) -> bool {
    postorder(graph, graph.node_ids()).is_err()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the active search stack
    Active,
    /// Fully explored
    Done,
}

/// Depth-first postorder from each unmarked root in turn.
///
/// Fails with the node closing a cycle when a back edge is found.
fn postorder<P>(
    graph: &Graph<P>,
    roots: impl IntoIterator<Item = NodeId>,
) -> std::result::Result<Vec<NodeId>, NodeId> {
    let mut marks: HashMap<NodeId, Mark> = HashMap::with_capacity(graph.node_count());
    let mut emitted = Vec::with_capacity(graph.node_count());

    for root in roots {
        if marks.contains_key(&root) {
            continue;
        }
        marks.insert(root, Mark::Active);
        let mut stack = vec![(root, successors(graph, root), 0usize)];

        while let Some((node, children, cursor)) = stack.last_mut() {
            if let Some(&child) = children.get(*cursor) {
                *cursor += 1;
                match marks.get(&child) {
                    Some(Mark::Active) => return Err(child),
                    Some(Mark::Done) => {}
                    None => {
                        marks.insert(child, Mark::Active);
                        let next = successors(graph, child);
                        stack.push((child, next, 0));
                    }
                }
            } else {
                let node = *node;
                marks.insert(node, Mark::Done);
                emitted.push(node);
                stack.pop();
            }
        }
    }

    Ok(emitted)
}

/// Node ids with `start` first, followed by all others in ascending order.
fn start_first<P>(graph: &Graph<P>, start: NodeId) -> Vec<NodeId> {
    let mut ids = Vec::with_capacity(graph.node_count());
    if graph.contains_node(start) {
        ids.push(start);
    }
    ids.extend(graph.node_ids().filter(|&id| id != start));
    ids
}

/// Targets of the edges leaving `node`, ascending.
fn successors<P>(graph: &Graph<P>, node: NodeId) -> Vec<NodeId> {
    let mut targets: Vec<NodeId> = graph
        .incident_edges(node)
        .filter(|edge| edge.source() == node)
        .map(|edge| edge.target())
        .collect();
    targets.sort_unstable();
    targets
}

impl<P> Algorithm<P> for TopologicalSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Topological
    }

    fn works(&self, graph: &Graph<P>) -> bool {
        graph.is_directed() && !graph.is_empty() && !has_cycle(graph)
    }

    fn execute(
        &self,
        graph: &Graph<P>,
        start: NodeId,
        visitor: &mut dyn Visitor<P>,
    ) -> PathContainer {
        let Some(order) = self.sort(graph, start) else {
            return PathContainer::new();
        };

        let mut steps = Vec::with_capacity(order.len());
        for id in order {
            if let Some(node) = graph.node(id) {
                visitor.visit_node(node);
            }
            steps.push(Step::root(id));
        }
        PathContainer::from(vec![Path::single(steps)])
    }
}
