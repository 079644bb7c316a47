//! Algorithm results: paths of node/edge steps.
//!
//! A [`Path`] is the ordered record of one traversal. Each [`Step`] pairs an optional
//! node with an optional edge. A step with both entries absent marks a position where
//! the traversal met a node it had already visited, keeping the node and edge
//! sequences aligned without claiming a fresh visit.
//!
//! A [`PathContainer`] holds every path produced by a single algorithm run.

use crate::{
    graph::{Edge, NodeId},
    Error, Result,
};

/// One position in a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Step {
    /// The node reached at this step, absent for re-visits
    pub node: Option<NodeId>,
    /// The edge used to reach the node, absent for roots and re-visits
    pub edge: Option<Edge>,
}

impl Step {
    /// A step that reached `node` without following an edge (a traversal root).
    #[must_use]
    pub const fn root(node: NodeId) -> Self {
        Step {
            node: Some(node),
            edge: None,
        }
    }

    /// A step that reached `node` by following `edge`.
    #[must_use]
    pub const fn via(node: NodeId, edge: Edge) -> Self {
        Step {
            node: Some(node),
            edge: Some(edge),
        }
    }

    /// A placeholder step for an already visited node.
    #[must_use]
    pub const fn absent() -> Self {
        Step {
            node: None,
            edge: None,
        }
    }

    /// Returns `true` if both entries are absent.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.node.is_none() && self.edge.is_none()
    }
}

/// An ordered sequence of steps with a multiplicity count.
///
/// Algorithms that logically produce the same path several times record a count
/// greater than one instead of storing duplicates.
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::NodeId;
/// use graphwalk::path::{Path, Step};
///
/// let path = Path::new(vec![Step::root(NodeId::new(0)), Step::absent()], 2)?;
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.count(), 2);
/// assert_eq!(path.nodes(), vec![Some(NodeId::new(0)), None]);
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    steps: Vec<Step>,
    count: usize,
}

impl Path {
    /// Creates a path from its steps and multiplicity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMultiplicity`] if `count` is zero.
    pub fn new(steps: Vec<Step>, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::InvalidMultiplicity);
        }
        Ok(Path { steps, count })
    }

    /// Creates a path that occurred once.
    #[must_use]
    pub fn single(steps: Vec<Step>) -> Self {
        Path { steps, count: 1 }
    }

    /// Returns the steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the node entry of every step, aligned with [`edges`](Self::edges).
    #[must_use]
    pub fn nodes(&self) -> Vec<Option<NodeId>> {
        self.steps.iter().map(|step| step.node).collect()
    }

    /// Returns the edge entry of every step, aligned with [`nodes`](Self::nodes).
    #[must_use]
    pub fn edges(&self) -> Vec<Option<Edge>> {
        self.steps.iter().map(|step| step.edge).collect()
    }

    /// Iterates over the nodes actually reached, skipping absent entries.
    pub fn visited_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.steps.iter().filter_map(|step| step.node)
    }

    /// Iterates over the edges actually followed, skipping absent entries.
    pub fn traversed_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.steps.iter().filter_map(|step| step.edge.as_ref())
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the path has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the multiplicity of this path.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the sum of the weights of all followed edges.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.traversed_edges().map(Edge::weight).sum()
    }
}

/// All paths produced by one algorithm run.
///
/// An empty container is a valid outcome: the algorithm was applicable but had nothing
/// to traverse, for example because no start node was selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathContainer {
    paths: Vec<Path>,
}

impl PathContainer {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a path.
    pub fn add_path(&mut self, path: Path) {
        self.paths.push(path);
    }

    /// Returns the paths in the order they were produced.
    #[must_use]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Returns the path at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index)
    }

    /// Returns the number of paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` if no path was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterates over the paths.
    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }
}

impl From<Vec<Path>> for PathContainer {
    fn from(paths: Vec<Path>) -> Self {
        PathContainer { paths }
    }
}

impl FromIterator<Path> for PathContainer {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        PathContainer {
            paths: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PathContainer {
    type Item = Path;
    type IntoIter = std::vec::IntoIter<Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a PathContainer {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeId;

    fn edge(id: usize, source: usize, target: usize, weight: f64) -> Edge {
        Edge::new(
            EdgeId::new(id),
            NodeId::new(source),
            NodeId::new(target),
            weight,
        )
    }

    #[test]
    fn test_zero_multiplicity_rejected() {
        assert!(matches!(
            Path::new(Vec::new(), 0),
            Err(Error::InvalidMultiplicity)
        ));
    }

    #[test]
    fn test_aligned_sequences() {
        let e = edge(0, 0, 1, 2.5);
        let path = Path::single(vec![
            Step::root(NodeId::new(0)),
            Step::via(NodeId::new(1), e),
            Step::absent(),
        ]);

        assert_eq!(path.nodes().len(), path.edges().len());
        assert_eq!(path.edges(), vec![None, Some(e), None]);
        assert_eq!(path.visited_nodes().count(), 2);
        assert!(path.steps()[2].is_absent());
        assert_eq!(path.count(), 1);
    }

    #[test]
    fn test_weight() {
        let path = Path::single(vec![
            Step::root(NodeId::new(0)),
            Step::via(NodeId::new(1), edge(0, 0, 1, 1.5)),
            Step::via(NodeId::new(2), edge(1, 1, 2, 2.0)),
        ]);
        assert!((path.weight() - 3.5).abs() < f64::EPSILON);
        assert_eq!(Path::single(Vec::new()).weight(), 0.0);
    }

    #[test]
    fn test_container() {
        let mut container = PathContainer::new();
        assert!(container.is_empty());

        container.add_path(Path::single(vec![Step::root(NodeId::new(3))]));
        container.add_path(Path::new(Vec::new(), 4).unwrap());

        assert_eq!(container.len(), 2);
        assert_eq!(container.get(1).map(Path::count), Some(4));
        let total: usize = container.iter().map(Path::len).sum();
        assert_eq!(total, 1);
        assert_eq!(container.into_iter().count(), 2);
    }
}
