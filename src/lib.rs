//! adjgraph
//!
//! A generic in-memory graph library: an adjacency-list store for directed or
//! bidirectional graphs with optional vertex and edge payloads, plus
//! depth-first search and topological sort built on it.
//!
//! # Architecture
//!
//! - [`graph`]: the store. `AdjacencyList<C, V, E>` is specialised by type:
//!   the category `C` decides whether vertices carry in-edge lists, and the
//!   payload types `V`/`E` default to the zero-sized [`NoProp`].
//! - [`algo`]: adapters implementing the `adjgraph-algorithms` capability
//!   traits (`VertexListGraph`, `IncidenceGraph`, `BidirectionalGraph`, ...)
//!   for the store, and re-exports of the traversal algorithms.
//!
//! Capability mismatches are compile errors: `in_edges` only exists on
//! bidirectional graphs, and `add_vertex()`/`add_edge()` without a payload
//! require a `Default` payload type. Out-of-range descriptors panic in the
//! plain accessors and return [`GraphError`] from the `try_*` variants.
//!
//! ## Example Usage
//!
//! ```rust
//! use adjgraph::graph::{AdjacencyList, Directed};
//! use adjgraph::algo::topological_order;
//!
//! let mut g: AdjacencyList<Directed> = AdjacencyList::new();
//! let shirt = g.add_vertex();
//! let tie = g.add_vertex();
//! let jacket = g.add_vertex();
//!
//! g.add_edge(shirt, tie);
//! g.add_edge(tie, jacket);
//!
//! assert_eq!(topological_order(&g), vec![shirt, tie, jacket]);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    AdjacencyList, Bidirectional, CategoryKind, Directed, DirectedCategory, EdgeDescriptor,
    GraphConfig, GraphError, GraphResult, NoProp, VertexDescriptor,
};

pub use algo::{
    depth_first_search, depth_first_search_with, topological_order, topological_sort,
    topological_sort_with, CyclePolicy, DfsConfig, DfsStrategy, DfsVisitor, NullVisitor,
    TopoSortConfig, TopoSortError,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
