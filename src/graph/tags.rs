//! Directedness categories
//!
//! The category is a type parameter of the graph, chosen once per graph type.
//! It decides what in-edge storage each vertex carries: `Directed` vertices
//! hold a zero-sized [`NoInEdges`], `Bidirectional` vertices an [`InEdgeList`].
//! In-edge queries are only implemented for `Bidirectional`, so calling them
//! on a directed graph does not compile.

use serde::{Deserialize, Serialize};
use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Runtime name of a category, for logging and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKind {
    Directed,
    Bidirectional,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Directed => write!(f, "directed"),
            CategoryKind::Bidirectional => write!(f, "bidirectional"),
        }
    }
}

/// Per-vertex in-edge storage selected by the category
pub trait InEdgeStore: sealed::Sealed + Default + Clone + fmt::Debug {
    /// Record that the edge at `edge_index` enters this vertex
    fn record(&mut self, edge_index: usize);
}

/// In-edge storage of directed graphs: nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInEdges;

impl sealed::Sealed for NoInEdges {}

impl InEdgeStore for NoInEdges {
    #[inline]
    fn record(&mut self, _edge_index: usize) {}
}

/// In-edge storage of bidirectional graphs: indices into the edge store
#[derive(Debug, Clone, Default)]
pub struct InEdgeList(Vec<usize>);

impl InEdgeList {
    pub(crate) fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl sealed::Sealed for InEdgeList {}

impl InEdgeStore for InEdgeList {
    #[inline]
    fn record(&mut self, edge_index: usize) {
        self.0.push(edge_index);
    }
}

/// Directedness category of a graph
pub trait DirectedCategory: sealed::Sealed + Clone + Copy + Default + fmt::Debug + 'static {
    type InEdges: InEdgeStore;
    const KIND: CategoryKind;
}

/// Out-edges only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

impl sealed::Sealed for Directed {}

impl DirectedCategory for Directed {
    type InEdges = NoInEdges;
    const KIND: CategoryKind = CategoryKind::Directed;
}

/// Out-edges and in-edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bidirectional;

impl sealed::Sealed for Bidirectional {}

impl DirectedCategory for Bidirectional {
    type InEdges = InEdgeList;
    const KIND: CategoryKind = CategoryKind::Bidirectional;
}
