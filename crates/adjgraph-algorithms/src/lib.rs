pub mod common;
pub mod topology;
pub mod traversal;

pub use common::{
    BidirectionalGraph, EdgeListGraph, Graph, IncidenceGraph, MutableGraph, MutablePropertyGraph,
    PropertyGraph, VertexListGraph,
};
pub use topology::{
    topological_order, topological_sort, topological_sort_with, CyclePolicy, TopoResult,
    TopoSortConfig, TopoSortError, TopoVisitor,
};
pub use traversal::{
    depth_first_search, depth_first_search_with, Colour, DfsConfig, DfsStrategy, DfsVisitor,
    NullVisitor,
};
