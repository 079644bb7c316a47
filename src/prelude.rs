//! # graphwalk Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the graphwalk library. Import this module to get quick access to the graph
//! store, the algorithms and the visitor protocol.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphwalk operations
pub use crate::Error;

/// The result type used throughout graphwalk
pub use crate::Result;

// ================================================================================================
// Graph Storage
// ================================================================================================

/// The mutable node/edge store
pub use crate::graph::Graph;

/// Node and edge identities and values
pub use crate::graph::{Edge, EdgeId, Label, Node, NodeId};

/// Connected components
pub use crate::graph::{Island, Islands};

// ================================================================================================
// Algorithms
// ================================================================================================

/// The algorithm contract and catalogue
pub use crate::algorithms::{Algorithm, AlgorithmKind};

/// Start node selection
pub use crate::algorithms::{FirstNode, Fixed, StartSelector};

/// Algorithm implementations and their configuration
pub use crate::algorithms::{
    Coverage, DepthFirstTraversal, Order, SpanningTree, TopologicalSort, VisitOrder,
};

// ================================================================================================
// Results and Visitors
// ================================================================================================

/// Algorithm results
pub use crate::path::{Path, PathContainer, Step};

/// The visitor protocol and stock visitors
pub use crate::visitor::{NoopVisitor, Recorder, Visit, Visitor};
