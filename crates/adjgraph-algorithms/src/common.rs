//! Shared graph interfaces for algorithm execution
//!
//! Algorithms in this crate never look at storage layout. They are written
//! against the capability traits below, and every graph type opts into the
//! capabilities it can actually answer. A directed-only graph simply does not
//! implement [`BidirectionalGraph`], so asking it for in-edges fails to compile.

use std::fmt;

/// Basic descriptor types and endpoint lookup
pub trait Graph {
    /// Opaque, copyable vertex handle
    type Vertex: Copy + Eq + fmt::Debug;
    /// Opaque, copyable edge handle
    type Edge: Copy + fmt::Debug;

    /// Source vertex of an edge
    fn source(&self, e: Self::Edge) -> Self::Vertex;

    /// Target vertex of an edge
    fn target(&self, e: Self::Edge) -> Self::Vertex;
}

/// Graphs whose vertex set can be enumerated
pub trait VertexListGraph: Graph {
    type Vertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize;

    /// All vertices, in ascending descriptor order
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Dense index in `0..vertex_count()`, used to key per-vertex state
    fn vertex_index(&self, v: Self::Vertex) -> usize;
}

/// Graphs whose edge set can be enumerated
pub trait EdgeListGraph: Graph {
    type Edges<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    fn edge_count(&self) -> usize;

    /// All edges, in creation order
    fn edges(&self) -> Self::Edges<'_>;
}

/// Graphs that can answer "which edges leave this vertex"
pub trait IncidenceGraph: Graph {
    type OutEdges<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    fn out_edges(&self, v: Self::Vertex) -> Self::OutEdges<'_>;

    fn out_degree(&self, v: Self::Vertex) -> usize {
        self.out_edges(v).count()
    }
}

/// Graphs that can also answer "which edges enter this vertex"
pub trait BidirectionalGraph: IncidenceGraph {
    type InEdges<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    fn in_edges(&self, v: Self::Vertex) -> Self::InEdges<'_>;

    fn in_degree(&self, v: Self::Vertex) -> usize {
        self.in_edges(v).count()
    }
}

/// Graphs that can grow by vertices and edges with default payloads
pub trait MutableGraph: Graph {
    fn add_vertex(&mut self) -> Self::Vertex;

    /// Both endpoints must already belong to the graph
    fn add_edge(&mut self, src: Self::Vertex, tar: Self::Vertex) -> Self::Edge;
}

/// Graphs that attach a payload to every vertex and every edge
pub trait PropertyGraph: Graph {
    type VertexProp;
    type EdgeProp;

    fn vertex_prop(&self, v: Self::Vertex) -> &Self::VertexProp;

    fn vertex_prop_mut(&mut self, v: Self::Vertex) -> &mut Self::VertexProp;

    fn edge_prop(&self, e: Self::Edge) -> &Self::EdgeProp;

    fn edge_prop_mut(&mut self, e: Self::Edge) -> &mut Self::EdgeProp;
}

/// Graphs that grow with caller-supplied payloads
///
/// Payloads are moved into the graph. This does not require
/// [`MutableGraph`], so payload types without a default still qualify.
pub trait MutablePropertyGraph: PropertyGraph {
    fn add_vertex_with(&mut self, prop: Self::VertexProp) -> Self::Vertex;

    fn add_edge_with(
        &mut self,
        src: Self::Vertex,
        tar: Self::Vertex,
        prop: Self::EdgeProp,
    ) -> Self::Edge;
}

/// Minimal graph used by the unit tests of this crate
#[cfg(test)]
pub(crate) mod fixture {
    use super::*;

    /// Vertex ids are `0..n`, edges are indices into `edges`
    pub struct TestGraph {
        pub n: usize,
        pub edges: Vec<(usize, usize)>,
        pub out: Vec<Vec<usize>>,
    }

    impl TestGraph {
        pub fn new(n: usize, edges: &[(usize, usize)]) -> Self {
            let mut out = vec![Vec::new(); n];
            for (idx, &(s, _)) in edges.iter().enumerate() {
                out[s].push(idx);
            }
            TestGraph {
                n,
                edges: edges.to_vec(),
                out,
            }
        }
    }

    impl Graph for TestGraph {
        type Vertex = usize;
        type Edge = usize;

        fn source(&self, e: usize) -> usize {
            self.edges[e].0
        }

        fn target(&self, e: usize) -> usize {
            self.edges[e].1
        }
    }

    impl VertexListGraph for TestGraph {
        type Vertices<'a> = std::ops::Range<usize>;

        fn vertex_count(&self) -> usize {
            self.n
        }

        fn vertices(&self) -> Self::Vertices<'_> {
            0..self.n
        }

        fn vertex_index(&self, v: usize) -> usize {
            v
        }
    }

    impl IncidenceGraph for TestGraph {
        type OutEdges<'a> = std::iter::Copied<std::slice::Iter<'a, usize>>;

        fn out_edges(&self, v: usize) -> Self::OutEdges<'_> {
            self.out[v].iter().copied()
        }
    }
}
