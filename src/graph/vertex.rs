//! Vertex storage and the vertex iterator

use super::tags::DirectedCategory;
use super::types::VertexDescriptor;
use std::iter::FusedIterator;
use std::ops::Range;

/// A vertex as stored in the graph's vertex vector
///
/// The shape is fixed per graph type: `in_edges` is zero-sized for directed
/// graphs and `prop` is zero-sized when the payload is `NoProp`.
#[derive(Debug, Clone)]
pub(crate) struct StoredVertex<C: DirectedCategory, V> {
    pub(crate) out_edges: Vec<usize>,
    pub(crate) in_edges: C::InEdges,
    pub(crate) prop: V,
}

impl<C: DirectedCategory, V> StoredVertex<C, V> {
    pub(crate) fn new(prop: V) -> Self {
        StoredVertex {
            out_edges: Vec::new(),
            in_edges: C::InEdges::default(),
            prop,
        }
    }
}

/// All vertices of a graph, in ascending descriptor order
#[derive(Debug, Clone)]
pub struct Vertices {
    range: Range<usize>,
}

impl Vertices {
    pub(crate) fn new(count: usize) -> Self {
        Vertices { range: 0..count }
    }
}

impl Iterator for Vertices {
    type Item = VertexDescriptor;

    fn next(&mut self) -> Option<VertexDescriptor> {
        self.range.next().map(VertexDescriptor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Vertices {
    fn next_back(&mut self) -> Option<VertexDescriptor> {
        self.range.next_back().map(VertexDescriptor)
    }
}

impl ExactSizeIterator for Vertices {}
impl FusedIterator for Vertices {}
