//! Graph storage
//!
//! This module implements the adjacency-list store:
//! - Dense, stable vertex and edge descriptors
//! - Directed or bidirectional categories chosen by type
//! - Optional vertex and edge payloads, zero-sized when absent
//! - Parallel edges and self-loops

pub mod edge;
pub mod property;
pub mod store;
pub mod tags;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::{Edges, InEdges, IncidentEdges, OutEdges};
pub use property::NoProp;
pub use store::{AdjacencyList, GraphConfig, GraphError, GraphResult};
pub use tags::{Bidirectional, CategoryKind, Directed, DirectedCategory, InEdgeList, InEdgeStore, NoInEdges};
pub use types::{EdgeDescriptor, VertexDescriptor};
pub use vertex::Vertices;
