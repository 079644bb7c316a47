//! The mutable node/edge store.
//!
//! This module provides [`Graph`], the owner of all nodes and edges. Adjacency is kept
//! as per-node outgoing and incoming edge lists so that incidence queries do not scan
//! the whole edge set. A single flag decides whether edges may be walked in both
//! directions.

use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

use tracing::trace;

use crate::{
    graph::{Edge, EdgeId, Island, Islands, Node, NodeId},
    Error, Result,
};

/// Per-node storage: the node plus its adjacency lists.
#[derive(Debug, Clone)]
struct Slot<P> {
    node: Node<P>,
    /// Edges whose source is this node, in insertion order
    outgoing: Vec<EdgeId>,
    /// Edges whose target is this node, in insertion order
    incoming: Vec<EdgeId>,
}

/// A mutable graph of payload-carrying nodes and weighted edges.
///
/// `Graph` enforces the structural invariants every algorithm relies on:
///
/// - node ids are unique and never change
/// - every edge references two nodes currently present (no dangling edges)
/// - at most one edge exists per ordered pair (directed) or unordered pair (undirected)
///
/// Every mutation is atomic: it is either fully applied or rejected with an error and
/// leaves the graph untouched. Each successful structural mutation discards the cached
/// [`Islands`] partition.
///
/// Nodes iterate in ascending id order; edges iterate in insertion order.
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::Graph;
///
/// let mut graph = Graph::directed();
/// let a = graph.add_node("a");
/// let b = graph.add_node("b");
/// let c = graph.add_node("c");
///
/// graph.add_edge(a, b, 1.0)?;
/// assert!(graph.is_edge(a, b));
/// assert!(!graph.is_edge(b, a));
///
/// assert_eq!(graph.island_count(), 2);
/// graph.add_edge(c, b, 2.0)?;
/// assert_eq!(graph.island_count(), 1);
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<P> {
    nodes: BTreeMap<NodeId, Slot<P>>,
    edges: BTreeMap<EdgeId, Edge>,
    directed: bool,
    next_node: usize,
    next_edge: usize,
    islands: OnceLock<Islands>,
}

impl<P> Default for Graph<P> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<P> Graph<P> {
    /// Creates an empty graph with the given directedness.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Graph {
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            directed,
            next_node: 0,
            next_edge: 0,
            islands: OnceLock::new(),
        }
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Returns `true` if edges may only be walked from source to destination.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Switches the graph between directed and undirected semantics.
    ///
    /// Existing edges keep their stored source and target; only the way they may be
    /// walked changes. The island cache is discarded.
    ///
    /// # Arguments
    ///
    /// * `directed` - `true` to walk edges from source to target only
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphwalk::graph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// let a = graph.add_node(1);
    /// let b = graph.add_node(2);
    /// graph.add_edge(a, b, 1.0)?;
    /// assert!(!graph.is_edge(b, a));
    ///
    /// graph.set_directed(false)?;
    /// assert!(graph.is_edge(b, a));
    /// # Ok::<(), graphwalk::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateEdge`] when switching to undirected would turn two
    /// opposite directed edges `(a, b)` and `(b, a)` into duplicates. The graph is left
    /// unchanged in that case.
    pub fn set_directed(&mut self, directed: bool) -> Result<()> {
        if directed == self.directed {
            return Ok(());
        }

        if !directed {
            let mut pairs = HashSet::with_capacity(self.edges.len());
            for edge in self.edges.values() {
                let key = if edge.source() <= edge.target() {
                    (edge.source(), edge.target())
                } else {
                    (edge.target(), edge.source())
                };
                if !pairs.insert(key) {
                    return Err(Error::DuplicateEdge {
                        from: edge.source(),
                        to: edge.target(),
                    });
                }
            }
        }

        trace!(directed, "graph directedness changed");
        self.directed = directed;
        self.invalidate();
        Ok(())
    }

    /// Adds a node, assigning it a fresh id.
    ///
    /// Auto-assigned ids are one past the highest id this graph has ever issued or
    /// accepted, so an id is never reused after its node is removed.
    ///
    /// # Arguments
    ///
    /// * `payload` - The data carried by the new node
    ///
    /// # Returns
    ///
    /// The [`NodeId`] assigned to the new node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphwalk::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// let a = graph.add_node("a");
    /// let b = graph.add_node("b");
    ///
    /// assert_eq!(a.index(), 0);
    /// assert_eq!(b.index(), 1);
    /// assert_eq!(graph.payload(b), Some(&"b"));
    /// ```
    pub fn add_node(&mut self, payload: P) -> NodeId {
        let id = NodeId::new(self.next_node);
        self.insert_node(id, payload);
        id
    }

    /// Adds a node under an explicit id.
    ///
    /// Later auto-assigned ids continue past the highest id accepted here.
    ///
    /// # Arguments
    ///
    /// * `id` - The id the node will carry
    /// * `payload` - The data carried by the new node
    ///
    /// # Returns
    ///
    /// The accepted `id`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphwalk::graph::{Graph, NodeId};
    ///
    /// let mut graph = Graph::directed();
    /// graph.add_node_with_id(NodeId::new(7), 'x')?;
    /// assert_eq!(graph.add_node('y'), NodeId::new(8));
    /// assert!(graph.add_node_with_id(NodeId::new(7), 'z').is_err());
    /// # Ok::<(), graphwalk::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateIdentity`] if a node with this id already exists.
    pub fn add_node_with_id(&mut self, id: NodeId, payload: P) -> Result<NodeId> {
        if self.nodes.contains_key(&id) {
            return Err(Error::DuplicateIdentity(id));
        }
        self.insert_node(id, payload);
        Ok(id)
    }

    fn insert_node(&mut self, id: NodeId, payload: P) {
        self.nodes.insert(
            id,
            Slot {
                node: Node::new(id, payload),
                outgoing: Vec::new(),
                incoming: Vec::new(),
            },
        );
        self.next_node = self.next_node.max(id.index() + 1);
        trace!(node = %id, "node added");
        self.invalidate();
    }

    /// Removes a node together with every edge incident to it.
    ///
    /// # Arguments
    ///
    /// * `id` - The node to remove
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphwalk::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// let a = graph.add_node("a");
    /// let b = graph.add_node("b");
    /// graph.add_edge(a, b, 1.0)?;
    ///
    /// assert_eq!(graph.remove_node(b)?, "b");
    /// assert_eq!(graph.edge_count(), 0);
    /// assert_eq!(graph.incident_edges(a).count(), 0);
    /// # Ok::<(), graphwalk::Error>(())
    /// ```
    ///
    /// # Returns
    ///
    /// The payload the node carried.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if the node does not exist.
    pub fn remove_node(&mut self, id: NodeId) -> Result<P> {
        let slot = self.nodes.remove(&id).ok_or(Error::UnknownNode(id))?;

        let mut incident: Vec<EdgeId> = slot
            .outgoing
            .iter()
            .chain(slot.incoming.iter())
            .copied()
            .collect();
        incident.sort_unstable();
        incident.dedup();

        for edge_id in &incident {
            if let Some(edge) = self.edges.remove(edge_id) {
                if let Some(other) = self.nodes.get_mut(&edge.source()) {
                    other.outgoing.retain(|e| e != edge_id);
                }
                if let Some(other) = self.nodes.get_mut(&edge.target()) {
                    other.incoming.retain(|e| e != edge_id);
                }
            }
        }

        trace!(node = %id, edges = incident.len(), "node removed");
        self.invalidate();
        Ok(slot.node.into_payload())
    }

    /// Replaces the payload of a node wholesale.
    ///
    /// The structure is untouched, so the island cache survives.
    ///
    /// # Arguments
    ///
    /// * `id` - The node whose payload is replaced
    /// * `payload` - The new payload
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphwalk::graph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// let a = graph.add_node(String::from("old"));
    /// let previous = graph.replace_payload(a, String::from("new"))?;
    ///
    /// assert_eq!(previous, "old");
    /// assert_eq!(graph.payload(a).map(String::as_str), Some("new"));
    /// # Ok::<(), graphwalk::Error>(())
    /// ```
    ///
    /// # Returns
    ///
    /// The previous payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if the node does not exist.
    pub fn replace_payload(&mut self, id: NodeId, payload: P) -> Result<P> {
        let slot = self.nodes.get_mut(&id).ok_or(Error::UnknownNode(id))?;
        Ok(slot.node.replace_payload(payload))
    }

    /// Returns the node with the given id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<P>> {
        self.nodes.get(&id).map(|slot| &slot.node)
    }

    /// Returns the payload of the node with the given id.
    #[must_use]
    pub fn payload(&self, id: NodeId) -> Option<&P> {
        self.node(id).map(Node::payload)
    }

    /// Returns `true` if a node with this id exists.
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterates over all nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<P>> + '_ {
        self.nodes.values().map(|slot| &slot.node)
    }

    /// Iterates over all node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a weighted edge from `source` to `target`.
    ///
    /// Self-loops are accepted.
    ///
    /// # Arguments
    ///
    /// * `source` - The node the edge starts at
    /// * `target` - The node the edge ends at
    /// * `weight` - The edge weight, any value except NaN
    ///
    /// # Returns
    ///
    /// The [`EdgeId`] of the new edge.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphwalk::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// let a = graph.add_node(());
    /// let b = graph.add_node(());
    ///
    /// let id = graph.add_edge(a, b, 2.5)?;
    /// assert_eq!(graph.edge_by_id(id).map(|e| e.weight()), Some(2.5));
    ///
    /// // undirected: (b, a) is the same pair
    /// assert!(graph.add_edge(b, a, 1.0).is_err());
    /// assert!(graph.add_edge(a, b, f64::NAN).is_err());
    /// # Ok::<(), graphwalk::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidWeight`] if `weight` is NaN
    /// - [`Error::UnknownEndpoint`] if either endpoint does not exist
    /// - [`Error::DuplicateEdge`] if the pair is already connected (ordered pair when
    ///   directed, unordered pair when undirected)
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: f64) -> Result<EdgeId> {
        if weight.is_nan() {
            return Err(Error::InvalidWeight(weight));
        }
        if !self.nodes.contains_key(&source) {
            return Err(Error::UnknownEndpoint(source));
        }
        if !self.nodes.contains_key(&target) {
            return Err(Error::UnknownEndpoint(target));
        }
        if self.is_edge(source, target) {
            return Err(Error::DuplicateEdge {
                from: source,
                to: target,
            });
        }

        let id = EdgeId::new(self.next_edge);
        self.next_edge += 1;
        self.edges.insert(id, Edge::new(id, source, target, weight));

        if let Some(slot) = self.nodes.get_mut(&source) {
            slot.outgoing.push(id);
        }
        if let Some(slot) = self.nodes.get_mut(&target) {
            slot.incoming.push(id);
        }

        trace!(edge = %id, %source, %target, weight, "edge added");
        self.invalidate();
        Ok(id)
    }

    /// Removes the edge matching `edge`'s endpoints.
    ///
    /// Matching honours directedness, the same way [`edge`](Self::edge) does. Removing an
    /// edge that is not present is a silent no-op.
    ///
    /// # Arguments
    ///
    /// * `edge` - An edge whose endpoints identify the edge to remove
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphwalk::graph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// let a = graph.add_node(());
    /// let b = graph.add_node(());
    /// let id = graph.add_edge(a, b, 1.0)?;
    /// let edge = *graph.edge_by_id(id).unwrap();
    ///
    /// assert_eq!(graph.remove_edge(&edge), Some(edge));
    /// assert_eq!(graph.remove_edge(&edge), None);
    /// # Ok::<(), graphwalk::Error>(())
    /// ```
    ///
    /// # Returns
    ///
    /// The removed edge, or `None` if nothing matched.
    pub fn remove_edge(&mut self, edge: &Edge) -> Option<Edge> {
        let id = self.edge(edge.source(), edge.target())?.id();
        self.detach_edge(id)
    }

    /// Removes the edge connecting `a` to `b`.
    ///
    /// Matching honours directedness, the same way [`edge`](Self::edge) does.
    ///
    /// # Arguments
    ///
    /// * `a` - The first endpoint (the source, in a directed graph)
    /// * `b` - The second endpoint (the target, in a directed graph)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphwalk::graph::{Graph, NodeId};
    ///
    /// let mut graph = Graph::directed();
    /// let a = graph.add_node(());
    /// let b = graph.add_node(());
    /// graph.add_edge(a, b, 1.0)?;
    ///
    /// assert!(graph.remove_edge_between(b, a)?.is_none());
    /// assert!(graph.remove_edge_between(a, b)?.is_some());
    /// assert!(graph.remove_edge_between(a, NodeId::new(9)).is_err());
    /// # Ok::<(), graphwalk::Error>(())
    /// ```
    ///
    /// # Returns
    ///
    /// The removed edge, or `None` if the nodes exist but are not connected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either node does not exist.
    pub fn remove_edge_between(&mut self, a: NodeId, b: NodeId) -> Result<Option<Edge>> {
        for id in [a, b] {
            if !self.nodes.contains_key(&id) {
                return Err(Error::UnknownNode(id));
            }
        }
        let Some(id) = self.edge(a, b).map(Edge::id) else {
            return Ok(None);
        };
        Ok(self.detach_edge(id))
    }

    fn detach_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.remove(&id)?;
        if let Some(slot) = self.nodes.get_mut(&edge.source()) {
            slot.outgoing.retain(|&e| e != id);
        }
        if let Some(slot) = self.nodes.get_mut(&edge.target()) {
            slot.incoming.retain(|&e| e != id);
        }
        trace!(edge = %id, "edge removed");
        self.invalidate();
        Some(edge)
    }

    /// Looks up the edge connecting `a` to `b`, honouring directedness.
    ///
    /// In a directed graph only an edge with source `a` and target `b` matches; in an
    /// undirected graph an edge in either orientation does.
    #[must_use]
    pub fn edge(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        let slot = self.nodes.get(&a)?;
        let outgoing = slot.outgoing.iter();
        let incoming = slot.incoming.iter().filter(|_| !self.directed);
        outgoing
            .chain(incoming)
            .filter_map(|id| self.edges.get(id))
            .find(|edge| edge.connects(a, b, self.directed))
    }

    /// Returns `true` if an edge connects `a` to `b`, honouring directedness.
    #[must_use]
    pub fn is_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edge(a, b).is_some()
    }

    /// Returns the edge with the given id.
    #[must_use]
    pub fn edge_by_id(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Iterates over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over the edges that can be walked starting at `id`, in insertion order.
    ///
    /// In a directed graph these are the edges whose source is `id`; in an undirected
    /// graph every incident edge qualifies. Unknown ids yield nothing.
    pub fn outgoing_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        let ids = self.adjacent_edge_ids(id, !self.directed);
        ids.into_iter().filter_map(move |e| self.edges.get(&e))
    }

    /// Iterates over every edge touching `id`, regardless of direction, in insertion
    /// order. Unknown ids yield nothing.
    pub fn incident_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        let ids = self.adjacent_edge_ids(id, true);
        ids.into_iter().filter_map(move |e| self.edges.get(&e))
    }

    fn adjacent_edge_ids(&self, id: NodeId, with_incoming: bool) -> Vec<EdgeId> {
        let Some(slot) = self.nodes.get(&id) else {
            return Vec::new();
        };
        let mut ids = slot.outgoing.clone();
        if with_incoming {
            ids.extend_from_slice(&slot.incoming);
            ids.sort_unstable();
            ids.dedup();
        }
        ids
    }

    /// Returns the nodes reachable from `id` over one edge, in ascending id order.
    ///
    /// A self-loop makes a node its own neighbour.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let mut neighbors: Vec<NodeId> = self
            .outgoing_edges(id)
            .filter_map(|edge| edge.opposite(id))
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    /// Returns the island partition, computing it if the cache is empty.
    pub fn islands(&self) -> &Islands {
        self.islands.get_or_init(|| {
            trace!(
                nodes = self.nodes.len(),
                edges = self.edges.len(),
                "computing islands"
            );
            Islands::compute(self.node_ids(), self.edges())
        })
    }

    /// Returns the number of islands.
    #[must_use]
    pub fn island_count(&self) -> usize {
        self.islands().len()
    }

    /// Returns the nodes of the `index`-th island in ascending id order.
    #[must_use]
    pub fn island_nodes(&self, index: usize) -> Option<Vec<&Node<P>>> {
        let island = self.islands().get(index)?;
        Some(island.nodes().iter().filter_map(|&id| self.node(id)).collect())
    }

    /// Returns the edges of the `index`-th island in insertion order.
    #[must_use]
    pub fn island_edges(&self, index: usize) -> Option<Vec<&Edge>> {
        let island: &Island = self.islands().get(index)?;
        Some(
            island
                .edges()
                .iter()
                .filter_map(|id| self.edges.get(id))
                .collect(),
        )
    }

    fn invalidate(&mut self) {
        self.islands.take();
    }
}
