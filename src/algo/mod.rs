//! Graph algorithms module
//!
//! Algorithms are implemented in the `adjgraph-algorithms` crate against its
//! capability traits. This module provides the integration/adapter layer:
//! it implements those traits for [`AdjacencyList`] and re-exports the
//! algorithms. [`BidirectionalGraph`] is only implemented for the
//! `Bidirectional` category:
//!
//! ```compile_fail
//! use adjgraph::algo::BidirectionalGraph;
//! use adjgraph::graph::{AdjacencyList, Directed};
//!
//! fn sources<G: BidirectionalGraph>(_g: &G) {}
//!
//! let g: AdjacencyList<Directed> = AdjacencyList::new();
//! sources(&g);
//! ```
//!
//! [`MutableGraph`] needs `Default` payloads; [`PropertyGraph`] and
//! [`MutablePropertyGraph`] are implemented for every payload type.

use crate::graph::{
    AdjacencyList, Bidirectional, DirectedCategory, EdgeDescriptor, Edges, InEdges, OutEdges,
    VertexDescriptor, Vertices,
};

// Re-export algorithms
pub use adjgraph_algorithms::{
    depth_first_search, depth_first_search_with, topological_order, topological_sort,
    topological_sort_with, BidirectionalGraph, Colour, CyclePolicy, DfsConfig, DfsStrategy,
    DfsVisitor, EdgeListGraph, Graph, IncidenceGraph, MutableGraph, MutablePropertyGraph,
    NullVisitor, PropertyGraph, TopoResult, TopoSortConfig, TopoSortError, TopoVisitor,
    VertexListGraph,
};

impl<C: DirectedCategory, V, E> Graph for AdjacencyList<C, V, E> {
    type Vertex = VertexDescriptor;
    type Edge = EdgeDescriptor;

    fn source(&self, e: EdgeDescriptor) -> VertexDescriptor {
        e.source
    }

    fn target(&self, e: EdgeDescriptor) -> VertexDescriptor {
        e.target
    }
}

impl<C: DirectedCategory, V, E> VertexListGraph for AdjacencyList<C, V, E> {
    type Vertices<'a> = Vertices where Self: 'a;

    fn vertex_count(&self) -> usize {
        AdjacencyList::vertex_count(self)
    }

    fn vertices(&self) -> Vertices {
        AdjacencyList::vertices(self)
    }

    fn vertex_index(&self, v: VertexDescriptor) -> usize {
        AdjacencyList::vertex_index(self, v)
    }
}

impl<C: DirectedCategory, V, E> EdgeListGraph for AdjacencyList<C, V, E> {
    type Edges<'a> = Edges<'a, E> where Self: 'a;

    fn edge_count(&self) -> usize {
        AdjacencyList::edge_count(self)
    }

    fn edges(&self) -> Edges<'_, E> {
        AdjacencyList::edges(self)
    }
}

impl<C: DirectedCategory, V, E> IncidenceGraph for AdjacencyList<C, V, E> {
    type OutEdges<'a> = OutEdges<'a, E> where Self: 'a;

    fn out_edges(&self, v: VertexDescriptor) -> OutEdges<'_, E> {
        AdjacencyList::out_edges(self, v)
    }

    fn out_degree(&self, v: VertexDescriptor) -> usize {
        AdjacencyList::out_degree(self, v)
    }
}

impl<V, E> BidirectionalGraph for AdjacencyList<Bidirectional, V, E> {
    type InEdges<'a> = InEdges<'a, E> where Self: 'a;

    fn in_edges(&self, v: VertexDescriptor) -> InEdges<'_, E> {
        AdjacencyList::in_edges(self, v)
    }

    fn in_degree(&self, v: VertexDescriptor) -> usize {
        AdjacencyList::in_degree(self, v)
    }
}

impl<C: DirectedCategory, V: Default, E: Default> MutableGraph for AdjacencyList<C, V, E> {
    fn add_vertex(&mut self) -> VertexDescriptor {
        AdjacencyList::add_vertex(self)
    }

    fn add_edge(&mut self, src: VertexDescriptor, tar: VertexDescriptor) -> EdgeDescriptor {
        AdjacencyList::add_edge(self, src, tar)
    }
}

impl<C: DirectedCategory, V, E> PropertyGraph for AdjacencyList<C, V, E> {
    type VertexProp = V;
    type EdgeProp = E;

    fn vertex_prop(&self, v: VertexDescriptor) -> &V {
        AdjacencyList::vertex_prop(self, v)
    }

    fn vertex_prop_mut(&mut self, v: VertexDescriptor) -> &mut V {
        AdjacencyList::vertex_prop_mut(self, v)
    }

    fn edge_prop(&self, e: EdgeDescriptor) -> &E {
        AdjacencyList::edge_prop(self, e)
    }

    fn edge_prop_mut(&mut self, e: EdgeDescriptor) -> &mut E {
        AdjacencyList::edge_prop_mut(self, e)
    }
}

impl<C: DirectedCategory, V, E> MutablePropertyGraph for AdjacencyList<C, V, E> {
    fn add_vertex_with(&mut self, prop: V) -> VertexDescriptor {
        AdjacencyList::add_vertex_with(self, prop)
    }

    fn add_edge_with(&mut self, src: VertexDescriptor, tar: VertexDescriptor, prop: E) -> EdgeDescriptor {
        AdjacencyList::add_edge_with(self, src, tar, prop)
    }
}
