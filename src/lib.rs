// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphwalk
//!
//! An in-memory graph library: a mutable node/edge store with connected-component
//! ("island") partitioning, and a visitor-driven framework of traversal algorithms that
//! report their results as ordered node/edge paths.
//!
//! ## Features
//!
//! - **Typed identities** - [`NodeId`](graph::NodeId) and [`EdgeId`](graph::EdgeId) are distinct types
//! - **Directed or undirected** - one flag on the [`Graph`](graph::Graph), switchable at runtime
//! - **Atomic mutations** - every rejected operation leaves the graph untouched
//! - **Islands on demand** - computed lazily, cached until the next structural change
//! - **Pluggable algorithms** - depth-first traversal, minimum spanning forest and
//!   topological sort behind one object-safe [`Algorithm`](algorithms::Algorithm) trait
//! - **Visitors** - observe every node and edge an algorithm touches, in order
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use graphwalk::prelude::*;
//!
//! let mut graph = Graph::directed();
//! let a = graph.add_node("a");
//! let b = graph.add_node("b");
//! let f = graph.add_node("f");
//! graph.add_edge(a, f, 9.0)?;
//! graph.add_edge(f, b, 2.0)?;
//! graph.add_edge(a, b, 1.0)?;
//!
//! let mut recorder = Recorder::new();
//! let paths = TopologicalSort::new().run(&graph, &mut Fixed(a), &mut recorder)?;
//!
//! assert_eq!(paths.len(), 1);
//! assert_eq!(recorder.nodes(), vec![a, f, b]);
//! # Ok::<(), graphwalk::Error>(())
//! ```
//!
//! ### Choosing an Algorithm at Runtime
//!
//! ```rust
//! use graphwalk::prelude::*;
//!
//! let mut graph = Graph::undirected();
//! let x = graph.add_node(1);
//! let y = graph.add_node(2);
//! graph.add_edge(x, y, 0.5)?;
//!
//! for kind in graphwalk::algorithms::applicable(&graph) {
//!     let algorithm = kind.build::<i32>();
//!     let paths = algorithm.run(&graph, &mut FirstNode, &mut NoopVisitor)?;
//!     println!("{kind}: {} path(s)", paths.len());
//! }
//! # Ok::<(), graphwalk::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Node/edge storage and island partitioning
//! - [`path`] - [`Path`](path::Path) and [`PathContainer`](path::PathContainer) results
//! - [`visitor`] - The [`Visitor`](visitor::Visitor) protocol and stock visitors
//! - [`algorithms`] - The algorithm framework and its implementations
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Concurrency
//!
//! Algorithms borrow the graph immutably and keep their visitation state in a per-run
//! [`VisitOrder`](algorithms::VisitOrder), so several runs may share one graph. Mutation
//! requires exclusive access, which the borrow checker enforces.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` for algorithm runs, `trace` for graph
//! mutations and island computation) and never installs a subscriber itself.

pub(crate) mod error;

pub mod algorithms;
pub mod graph;
pub mod path;
pub mod prelude;
pub mod visitor;

/// `graphwalk` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{graph::{Graph, NodeId}, Result};
///
/// fn connect(graph: &mut Graph<&'static str>) -> Result<NodeId> {
///     let hub = graph.add_node("hub");
///     let leaf = graph.add_node("leaf");
///     graph.add_edge(hub, leaf, 1.0)?;
///     Ok(hub)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `graphwalk` Error type
///
/// The main error type for all operations in this crate.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{graph::{Graph, NodeId}, Error};
///
/// let mut graph: Graph<()> = Graph::undirected();
/// match graph.remove_node(NodeId::new(7)) {
///     Err(Error::UnknownNode(id)) => println!("no such node: {id}"),
///     Err(e) => println!("Error: {e}"),
///     Ok(_) => println!("removed"),
/// }
/// ```
pub use error::Error;
