//! Edge storage and edge iterators
//!
//! Every edge lives exactly once in the graph's global, append-only edge
//! vector. Vertices only keep integer references into it, and the iterators
//! here turn those references back into [`EdgeDescriptor`]s.

use super::types::{EdgeDescriptor, VertexDescriptor};
use std::iter::{Enumerate, FusedIterator};
use std::slice;

/// An edge as stored in the global edge vector
#[derive(Debug, Clone)]
pub(crate) struct StoredEdge<E> {
    pub(crate) source: usize,
    pub(crate) target: usize,
    pub(crate) prop: E,
}

impl<E> StoredEdge<E> {
    pub(crate) fn new(source: usize, target: usize, prop: E) -> Self {
        StoredEdge {
            source,
            target,
            prop,
        }
    }

    pub(crate) fn descriptor(&self, index: usize) -> EdgeDescriptor {
        EdgeDescriptor::new(
            VertexDescriptor(self.source),
            VertexDescriptor(self.target),
            index,
        )
    }
}

/// All edges of a graph, in creation order
pub struct Edges<'a, E> {
    inner: Enumerate<slice::Iter<'a, StoredEdge<E>>>,
}

impl<'a, E> Edges<'a, E> {
    pub(crate) fn new(edges: &'a [StoredEdge<E>]) -> Self {
        Edges {
            inner: edges.iter().enumerate(),
        }
    }
}

impl<'a, E> Iterator for Edges<'a, E> {
    type Item = EdgeDescriptor;

    fn next(&mut self) -> Option<EdgeDescriptor> {
        self.inner.next().map(|(i, e)| e.descriptor(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, E> DoubleEndedIterator for Edges<'a, E> {
    fn next_back(&mut self) -> Option<EdgeDescriptor> {
        self.inner.next_back().map(|(i, e)| e.descriptor(i))
    }
}

impl<'a, E> ExactSizeIterator for Edges<'a, E> {}
impl<'a, E> FusedIterator for Edges<'a, E> {}

impl<'a, E> Clone for Edges<'a, E> {
    fn clone(&self) -> Self {
        Edges {
            inner: self.inner.clone(),
        }
    }
}

/// Edges referenced from one vertex's adjacency list
///
/// Used for both out-edges and in-edges; see [`OutEdges`] and [`InEdges`].
pub struct IncidentEdges<'a, E> {
    refs: slice::Iter<'a, usize>,
    edges: &'a [StoredEdge<E>],
}

/// Out-edges of a vertex, in edge-creation order
pub type OutEdges<'a, E> = IncidentEdges<'a, E>;

/// In-edges of a vertex in a bidirectional graph, in edge-creation order
pub type InEdges<'a, E> = IncidentEdges<'a, E>;

impl<'a, E> IncidentEdges<'a, E> {
    pub(crate) fn new(refs: &'a [usize], edges: &'a [StoredEdge<E>]) -> Self {
        IncidentEdges {
            refs: refs.iter(),
            edges,
        }
    }
}

impl<'a, E> Iterator for IncidentEdges<'a, E> {
    type Item = EdgeDescriptor;

    fn next(&mut self) -> Option<EdgeDescriptor> {
        self.refs.next().map(|&i| self.edges[i].descriptor(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.refs.size_hint()
    }
}

impl<'a, E> DoubleEndedIterator for IncidentEdges<'a, E> {
    fn next_back(&mut self) -> Option<EdgeDescriptor> {
        self.refs.next_back().map(|&i| self.edges[i].descriptor(i))
    }
}

impl<'a, E> ExactSizeIterator for IncidentEdges<'a, E> {}
impl<'a, E> FusedIterator for IncidentEdges<'a, E> {}

impl<'a, E> Clone for IncidentEdges<'a, E> {
    fn clone(&self) -> Self {
        IncidentEdges {
            refs: self.refs.clone(),
            edges: self.edges,
        }
    }
}
