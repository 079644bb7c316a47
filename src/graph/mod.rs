//! Graph storage: nodes, weighted edges and island partitioning.
//!
//! This module holds the data side of the crate. A [`Graph`] owns every [`Node`] and
//! [`Edge`]; algorithms only ever borrow it.
//!
//! # Key Components
//!
//! - [`NodeId`] / [`EdgeId`] - Strongly-typed identifiers
//! - [`Node`] - Identity plus an owned payload
//! - [`Edge`] - Immutable weighted connection between two nodes
//! - [`Graph`] - The mutable store, directed or undirected
//! - [`Islands`] - Cached partition into connected components (direction ignored)
//!
//! # Examples
//!
//! ```rust
//! use graphwalk::graph::Graph;
//!
//! let mut graph = Graph::undirected();
//! let a = graph.add_node("a");
//! let b = graph.add_node("b");
//! let c = graph.add_node("c");
//! graph.add_edge(a, b, 1.5)?;
//!
//! assert_eq!(graph.island_count(), 2);
//! assert!(graph.islands().same_island(a, b));
//! assert!(!graph.islands().same_island(a, c));
//! # Ok::<(), graphwalk::Error>(())
//! ```

mod edge;
mod islands;
mod node;
mod store;

pub use edge::{Edge, EdgeId};
pub use islands::{Island, Islands};
pub use node::{Label, Node, NodeId};
pub use store::Graph;
