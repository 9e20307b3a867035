//! Core descriptor types for the graph store

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Handle to a vertex
///
/// Equal to the vertex's position in creation order. Descriptors are never
/// invalidated or reused because the store only grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexDescriptor(pub usize);

impl VertexDescriptor {
    pub fn new(index: usize) -> Self {
        VertexDescriptor(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexDescriptor {
    fn from(index: usize) -> Self {
        VertexDescriptor(index)
    }
}

/// Handle to an edge
///
/// Carries cached endpoints next to the index of the stored edge. Identity is
/// the index alone: two descriptors with the same index are equal even if
/// their cached endpoints differ, so only descriptors handed out by the graph
/// should ever be used.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EdgeDescriptor {
    pub source: VertexDescriptor,
    pub target: VertexDescriptor,
    pub index: usize,
}

impl EdgeDescriptor {
    pub fn new(source: VertexDescriptor, target: VertexDescriptor, index: usize) -> Self {
        EdgeDescriptor {
            source,
            target,
            index,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl PartialEq for EdgeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for EdgeDescriptor {}

impl Hash for EdgeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl fmt::Display for EdgeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}({} -> {})", self.index, self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_descriptor() {
        let v = VertexDescriptor::new(42);
        assert_eq!(v.index(), 42);
        assert_eq!(format!("{}", v), "v42");

        let v2: VertexDescriptor = 7.into();
        assert_eq!(v2.index(), 7);
        assert!(v2 < v);
    }

    #[test]
    fn test_edge_identity_is_index_only() {
        let a = EdgeDescriptor::new(VertexDescriptor(0), VertexDescriptor(1), 3);
        let b = EdgeDescriptor::new(VertexDescriptor(5), VertexDescriptor(6), 3);
        let c = EdgeDescriptor::new(VertexDescriptor(0), VertexDescriptor(1), 4);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_edge_display() {
        let e = EdgeDescriptor::new(VertexDescriptor(2), VertexDescriptor(9), 0);
        assert_eq!(e.to_string(), "e0(v2 -> v9)");
    }
}
