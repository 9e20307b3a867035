//! In-memory adjacency-list graph
//!
//! Vertices and edges live in two append-only vectors owned by the graph.
//! Each vertex keeps integer references to its out-edges (and, for
//! bidirectional graphs, its in-edges) in creation order, so every adjacency
//! query walks a contiguous slice. Descriptors are plain integers and stay
//! valid as the vectors grow.

use super::edge::{Edges, InEdges, OutEdges, StoredEdge};
use super::property::NoProp;
use super::tags::{Bidirectional, CategoryKind, DirectedCategory, InEdgeStore};
use super::types::{EdgeDescriptor, VertexDescriptor};
use super::vertex::{StoredVertex, Vertices};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use thiserror::Error;
use tracing::debug;

/// Errors reported by the checked (`try_*`) graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Invalid vertex descriptor {0}")]
    InvalidVertex(VertexDescriptor),

    #[error("Invalid edge descriptor {0}")]
    InvalidEdge(EdgeDescriptor),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Up-front sizing for a new graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Vertices to reserve space for
    pub vertex_capacity: usize,
    /// Edges to reserve space for
    pub edge_capacity: usize,
}

/// Adjacency-list graph
///
/// - `C`: [`Directed`](super::tags::Directed) or [`Bidirectional`]
/// - `V`: vertex payload, [`NoProp`] for none
/// - `E`: edge payload, [`NoProp`] for none
///
/// Parallel edges and self-loops are allowed. Nothing is ever removed.
#[derive(Debug, Clone)]
pub struct AdjacencyList<C: DirectedCategory, V = NoProp, E = NoProp> {
    vertices: Vec<StoredVertex<C, V>>,
    edges: Vec<StoredEdge<E>>,
}

impl<C: DirectedCategory, V, E> Default for AdjacencyList<C, V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DirectedCategory, V, E> AdjacencyList<C, V, E> {
    /// Create an empty graph
    pub fn new() -> Self {
        AdjacencyList {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create an empty graph with room for the given number of vertices and edges
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        AdjacencyList {
            vertices: Vec::with_capacity(vertex_capacity),
            edges: Vec::with_capacity(edge_capacity),
        }
    }

    pub fn with_config(config: &GraphConfig) -> Self {
        debug!(
            "Creating {} graph (vertex capacity {}, edge capacity {})",
            C::KIND,
            config.vertex_capacity,
            config.edge_capacity
        );
        Self::with_capacity(config.vertex_capacity, config.edge_capacity)
    }

    pub fn category(&self) -> CategoryKind {
        C::KIND
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Lazy ascending sequence `0..vertex_count()`
    pub fn vertices(&self) -> Vertices {
        Vertices::new(self.vertices.len())
    }

    /// Lazy sequence of every edge in creation order
    pub fn edges(&self) -> Edges<'_, E> {
        Edges::new(&self.edges)
    }

    pub fn source(&self, e: EdgeDescriptor) -> VertexDescriptor {
        e.source
    }

    pub fn target(&self, e: EdgeDescriptor) -> VertexDescriptor {
        e.target
    }

    /// Dense index of a vertex, suitable for keying per-vertex arrays
    pub fn vertex_index(&self, v: VertexDescriptor) -> usize {
        v.0
    }

    /// Out-edges of `v` in creation order
    ///
    /// # Panics
    ///
    /// If `v` does not belong to this graph. See [`Self::try_out_edges`].
    pub fn out_edges(&self, v: VertexDescriptor) -> OutEdges<'_, E> {
        OutEdges::new(&self.vertices[v.0].out_edges, &self.edges)
    }

    /// # Panics
    ///
    /// If `v` does not belong to this graph.
    pub fn out_degree(&self, v: VertexDescriptor) -> usize {
        self.vertices[v.0].out_edges.len()
    }

    /// Append a vertex holding `prop`
    pub fn add_vertex_with(&mut self, prop: V) -> VertexDescriptor {
        let v = VertexDescriptor(self.vertices.len());
        self.vertices.push(StoredVertex::new(prop));
        v
    }

    /// Append an edge `src -> tar` holding `prop`
    ///
    /// # Panics
    ///
    /// If either endpoint does not belong to this graph. The graph is left
    /// unchanged in that case.
    pub fn add_edge_with(&mut self, src: VertexDescriptor, tar: VertexDescriptor, prop: E) -> EdgeDescriptor {
        let n = self.vertices.len();
        assert!(
            src.0 < n && tar.0 < n,
            "edge {} -> {} out of range for graph with {} vertices",
            src,
            tar,
            n
        );

        let index = self.edges.len();
        self.edges.push(StoredEdge::new(src.0, tar.0, prop));
        self.vertices[src.0].out_edges.push(index);
        self.vertices[tar.0].in_edges.record(index);

        EdgeDescriptor::new(src, tar, index)
    }

    /// # Panics
    ///
    /// If `v` does not belong to this graph.
    pub fn vertex_prop(&self, v: VertexDescriptor) -> &V {
        &self.vertices[v.0].prop
    }

    /// # Panics
    ///
    /// If `v` does not belong to this graph.
    pub fn vertex_prop_mut(&mut self, v: VertexDescriptor) -> &mut V {
        &mut self.vertices[v.0].prop
    }

    /// # Panics
    ///
    /// If `e` does not belong to this graph.
    pub fn edge_prop(&self, e: EdgeDescriptor) -> &E {
        &self.edges[e.index].prop
    }

    /// # Panics
    ///
    /// If `e` does not belong to this graph.
    pub fn edge_prop_mut(&mut self, e: EdgeDescriptor) -> &mut E {
        &mut self.edges[e.index].prop
    }

    pub fn contains_vertex(&self, v: VertexDescriptor) -> bool {
        v.0 < self.vertices.len()
    }

    /// True if `e` was handed out by this graph: its index is in range and its
    /// cached endpoints match the stored edge.
    pub fn contains_edge(&self, e: EdgeDescriptor) -> bool {
        self.edges
            .get(e.index)
            .is_some_and(|stored| stored.source == e.source.0 && stored.target == e.target.0)
    }

    pub fn try_out_edges(&self, v: VertexDescriptor) -> GraphResult<OutEdges<'_, E>> {
        self.check_vertex(v)?;
        Ok(self.out_edges(v))
    }

    pub fn try_out_degree(&self, v: VertexDescriptor) -> GraphResult<usize> {
        self.check_vertex(v)?;
        Ok(self.out_degree(v))
    }

    pub fn try_add_edge_with(
        &mut self,
        src: VertexDescriptor,
        tar: VertexDescriptor,
        prop: E,
    ) -> GraphResult<EdgeDescriptor> {
        self.check_vertex(src)?;
        self.check_vertex(tar)?;
        Ok(self.add_edge_with(src, tar, prop))
    }

    pub fn try_vertex_prop(&self, v: VertexDescriptor) -> GraphResult<&V> {
        self.check_vertex(v)?;
        Ok(self.vertex_prop(v))
    }

    pub fn try_vertex_prop_mut(&mut self, v: VertexDescriptor) -> GraphResult<&mut V> {
        self.check_vertex(v)?;
        Ok(self.vertex_prop_mut(v))
    }

    pub fn try_edge_prop(&self, e: EdgeDescriptor) -> GraphResult<&E> {
        self.check_edge(e)?;
        Ok(self.edge_prop(e))
    }

    pub fn try_edge_prop_mut(&mut self, e: EdgeDescriptor) -> GraphResult<&mut E> {
        self.check_edge(e)?;
        Ok(self.edge_prop_mut(e))
    }

    fn check_vertex(&self, v: VertexDescriptor) -> GraphResult<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex(v))
        }
    }

    fn check_edge(&self, e: EdgeDescriptor) -> GraphResult<()> {
        if self.contains_edge(e) {
            Ok(())
        } else {
            Err(GraphError::InvalidEdge(e))
        }
    }
}

impl<C: DirectedCategory, V: Default, E> AdjacencyList<C, V, E> {
    /// Create a graph with `n` vertices holding default payloads
    pub fn with_vertices(n: usize) -> Self {
        debug!("Creating {} graph with {} vertices", C::KIND, n);
        let mut g = Self::with_capacity(n, 0);
        g.vertices.extend((0..n).map(|_| StoredVertex::new(V::default())));
        g
    }

    /// Append a vertex holding a default payload
    pub fn add_vertex(&mut self) -> VertexDescriptor {
        self.add_vertex_with(V::default())
    }
}

impl<C: DirectedCategory, V, E: Default> AdjacencyList<C, V, E> {
    /// Append an edge `src -> tar` holding a default payload
    ///
    /// # Panics
    ///
    /// If either endpoint does not belong to this graph.
    pub fn add_edge(&mut self, src: VertexDescriptor, tar: VertexDescriptor) -> EdgeDescriptor {
        self.add_edge_with(src, tar, E::default())
    }

    pub fn try_add_edge(&mut self, src: VertexDescriptor, tar: VertexDescriptor) -> GraphResult<EdgeDescriptor> {
        self.try_add_edge_with(src, tar, E::default())
    }
}

impl<V, E> AdjacencyList<Bidirectional, V, E> {
    /// In-edges of `v` in creation order
    ///
    /// ```
    /// use adjgraph::graph::{AdjacencyList, Bidirectional};
    ///
    /// let mut g: AdjacencyList<Bidirectional> = AdjacencyList::with_vertices(2);
    /// let (a, b) = (g.vertices().next().unwrap(), g.vertices().last().unwrap());
    /// let e = g.add_edge(a, b);
    /// assert_eq!(g.in_edges(b).collect::<Vec<_>>(), vec![e]);
    /// ```
    ///
    /// Directed graphs keep no in-edge lists, so there is nothing to call:
    ///
    /// ```compile_fail
    /// use adjgraph::graph::{AdjacencyList, Directed};
    ///
    /// let mut g: AdjacencyList<Directed> = AdjacencyList::new();
    /// let v = g.add_vertex();
    /// let _ = g.in_edges(v);
    /// ```
    ///
    /// # Panics
    ///
    /// If `v` does not belong to this graph. See [`Self::try_in_edges`].
    pub fn in_edges(&self, v: VertexDescriptor) -> InEdges<'_, E> {
        InEdges::new(self.vertices[v.0].in_edges.as_slice(), &self.edges)
    }

    /// Number of edges entering `v`
    ///
    /// Like [`Self::in_edges`], only available on bidirectional graphs:
    ///
    /// ```compile_fail
    /// use adjgraph::graph::{AdjacencyList, Directed};
    ///
    /// let mut g: AdjacencyList<Directed> = AdjacencyList::new();
    /// let v = g.add_vertex();
    /// let _ = g.in_degree(v);
    /// ```
    ///
    /// # Panics
    ///
    /// If `v` does not belong to this graph.
    pub fn in_degree(&self, v: VertexDescriptor) -> usize {
        self.vertices[v.0].in_edges.as_slice().len()
    }

    pub fn try_in_edges(&self, v: VertexDescriptor) -> GraphResult<InEdges<'_, E>> {
        self.check_vertex(v)?;
        Ok(self.in_edges(v))
    }

    pub fn try_in_degree(&self, v: VertexDescriptor) -> GraphResult<usize> {
        self.check_vertex(v)?;
        Ok(self.in_degree(v))
    }
}

impl<C: DirectedCategory, V, E> Index<VertexDescriptor> for AdjacencyList<C, V, E> {
    type Output = V;

    fn index(&self, v: VertexDescriptor) -> &V {
        self.vertex_prop(v)
    }
}

impl<C: DirectedCategory, V, E> IndexMut<VertexDescriptor> for AdjacencyList<C, V, E> {
    fn index_mut(&mut self, v: VertexDescriptor) -> &mut V {
        self.vertex_prop_mut(v)
    }
}

impl<C: DirectedCategory, V, E> Index<EdgeDescriptor> for AdjacencyList<C, V, E> {
    type Output = E;

    fn index(&self, e: EdgeDescriptor) -> &E {
        self.edge_prop(e)
    }
}

impl<C: DirectedCategory, V, E> IndexMut<EdgeDescriptor> for AdjacencyList<C, V, E> {
    fn index_mut(&mut self, e: EdgeDescriptor) -> &mut E {
        self.edge_prop_mut(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tags::Directed;

    #[test]
    fn test_add_vertex_returns_dense_descriptors() {
        let mut g: AdjacencyList<Directed> = AdjacencyList::new();
        for k in 0..10 {
            let v = g.add_vertex();
            assert_eq!(v, VertexDescriptor(k));
        }
        assert_eq!(g.vertex_count(), 10);
        assert_eq!(g.edge_count(), 0);

        let all: Vec<_> = g.vertices().map(|v| v.index()).collect();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_single_directed_edge() {
        let mut g: AdjacencyList<Directed> = AdjacencyList::new();
        let u = g.add_vertex();
        let v = g.add_vertex();
        let e = g.add_edge(u, v);

        assert_eq!(g.out_degree(u), 1);
        assert_eq!(g.out_degree(v), 0);
        assert_eq!(g.source(e), u);
        assert_eq!(g.target(e), v);
        assert_eq!(g.out_edges(u).collect::<Vec<_>>(), vec![e]);
        assert_eq!(g.category(), CategoryKind::Directed);
    }

    #[test]
    fn test_bidirectional_in_and_out_edges() {
        let mut g: AdjacencyList<Bidirectional> = AdjacencyList::new();
        let v = g.add_vertex();
        let u = g.add_vertex();
        let v_to_u = g.add_edge(v, u);
        let u_to_v = g.add_edge(u, v);

        assert_eq!(g.in_edges(v).collect::<Vec<_>>(), vec![u_to_v]);
        assert_eq!(g.out_edges(v).collect::<Vec<_>>(), vec![v_to_u]);
        assert_eq!(g.in_edges(u).collect::<Vec<_>>(), vec![v_to_u]);
        assert_eq!(g.in_degree(v), 1);
        assert_eq!(g.in_degree(u), 1);
    }

    #[test]
    fn test_edges_appear_only_in_their_endpoints() {
        let mut g: AdjacencyList<Bidirectional> = AdjacencyList::with_vertices(4);
        let pairs = [(0, 1), (0, 2), (2, 3), (3, 0), (1, 1), (0, 1)];
        let added: Vec<_> = pairs
            .iter()
            .map(|&(s, t)| g.add_edge(VertexDescriptor(s), VertexDescriptor(t)))
            .collect();

        for e in &added {
            for v in g.vertices() {
                let outs = g.out_edges(v).filter(|x| x == e).count();
                let ins = g.in_edges(v).filter(|x| x == e).count();
                assert_eq!(outs, usize::from(v == e.source));
                assert_eq!(ins, usize::from(v == e.target));
            }
        }

        // parallel edges keep creation order
        let from_zero: Vec<_> = g.out_edges(VertexDescriptor(0)).map(|e| e.index).collect();
        assert_eq!(from_zero, vec![0, 1, 5]);
        assert_eq!(g.edges().count(), pairs.len());
    }

    #[test]
    fn test_self_loop() {
        let mut g: AdjacencyList<Bidirectional> = AdjacencyList::new();
        let v = g.add_vertex();
        let e = g.add_edge(v, v);
        assert_eq!(g.out_edges(v).collect::<Vec<_>>(), vec![e]);
        assert_eq!(g.in_edges(v).collect::<Vec<_>>(), vec![e]);
    }

    #[test]
    fn test_property_round_trip() {
        let mut g: AdjacencyList<Bidirectional, String, u32> = AdjacencyList::new();
        let a = g.add_vertex_with("alpha".to_string());
        let b = g.add_vertex();
        let e = g.add_edge_with(a, b, 123);
        let f = g.add_edge(b, a);

        assert_eq!(g[a], "alpha");
        assert_eq!(g[b], "");
        assert_eq!(g[e], 123);
        assert_eq!(g[f], 0);

        g[b].push_str("beta");
        g[f] = 321;
        assert_eq!(g.vertex_prop(b), "beta");
        assert_eq!(*g.edge_prop(f), 321);
    }

    #[test]
    fn test_payload_is_moved_in() {
        let mut g: AdjacencyList<Directed, Vec<u8>> = AdjacencyList::new();
        let data = vec![1, 2, 3];
        let v = g.add_vertex_with(data);
        assert_eq!(g[v], vec![1, 2, 3]);
    }

    #[test]
    fn test_checked_variants() {
        let mut g: AdjacencyList<Bidirectional, i32, i32> = AdjacencyList::new();
        let a = g.add_vertex_with(1);
        let missing = VertexDescriptor(7);

        assert_eq!(g.try_out_degree(a), Ok(0));
        assert_eq!(g.try_out_degree(missing), Err(GraphError::InvalidVertex(missing)));
        assert!(g.try_in_edges(missing).is_err());
        assert_eq!(g.try_in_degree(missing), Err(GraphError::InvalidVertex(missing)));
        assert_eq!(g.try_add_edge(a, missing), Err(GraphError::InvalidVertex(missing)));
        assert_eq!(g.edge_count(), 0);

        let e = g.try_add_edge_with(a, a, 5).unwrap();
        assert_eq!(g.try_edge_prop(e), Ok(&5));
        *g.try_vertex_prop_mut(a).unwrap() += 1;
        assert_eq!(g.try_vertex_prop(a), Ok(&2));

        let forged = EdgeDescriptor::new(missing, a, e.index);
        assert!(!g.contains_edge(forged));
        assert_eq!(g.try_edge_prop(forged), Err(GraphError::InvalidEdge(forged)));

        let out_of_range = EdgeDescriptor::new(a, a, 9);
        assert!(g.try_edge_prop_mut(out_of_range).is_err());
    }

    #[test]
    fn test_contains_edge() {
        let mut g: AdjacencyList<Directed> = AdjacencyList::with_vertices(3);
        let e = g.add_edge(VertexDescriptor(0), VertexDescriptor(2));

        assert!(g.contains_edge(e));
        assert!(!g.contains_edge(EdgeDescriptor::new(e.source, e.target, 1)));
        assert!(!g.contains_edge(EdgeDescriptor::new(e.target, e.source, 0)));
        assert!(!AdjacencyList::<Directed>::new().contains_edge(e));
    }

    #[test]
    fn test_error_messages() {
        let err = GraphError::InvalidVertex(VertexDescriptor(3));
        assert_eq!(err.to_string(), "Invalid vertex descriptor v3");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_add_edge_to_missing_vertex_panics() {
        let mut g: AdjacencyList<Directed> = AdjacencyList::new();
        let a = g.add_vertex();
        g.add_edge(a, VertexDescriptor(1));
    }

    #[test]
    fn test_with_vertices_and_clone() {
        let mut g: AdjacencyList<Directed, u8> = AdjacencyList::with_vertices(3);
        g.add_edge(VertexDescriptor(0), VertexDescriptor(2));
        g[VertexDescriptor(1)] = 9;

        let copy = g.clone();
        g.add_vertex();

        assert_eq!(copy.vertex_count(), 3);
        assert_eq!(copy.edge_count(), 1);
        assert_eq!(copy[VertexDescriptor(1)], 9);
        assert_eq!(g.vertex_count(), 4);
    }

    #[test]
    fn test_descriptors_survive_growth() {
        let config = GraphConfig {
            vertex_capacity: 1,
            edge_capacity: 1,
        };
        let mut g: AdjacencyList<Directed, u64> = AdjacencyList::with_config(&config);
        let first = g.add_vertex_with(10);
        for i in 0..1000 {
            g.add_vertex_with(i);
        }
        assert_eq!(g[first], 10);
    }
}
