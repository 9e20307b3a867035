//! Depth-first search
//!
//! A generic walk driven by a [`DfsVisitor`]. Every vertex moves through three
//! colours: White (unvisited) -> Grey (on the current path) -> Black (done).
//! The search re-seeds from the next White vertex in ascending order, so every
//! vertex is discovered exactly once and every edge is examined exactly once,
//! whether or not the graph is connected.

use super::common::{Graph, IncidenceGraph, VertexListGraph};
use tracing::{debug, trace};

/// Per-vertex traversal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    /// Not reached yet
    White,
    /// Discovered, some out-edges still pending
    Grey,
    /// All out-edges explored
    Black,
}

/// Observer of a depth-first search
///
/// Every callback defaults to a no-op, so a visitor only overrides the events
/// it cares about. Callbacks fire in this order:
///
/// 1. `init_vertex` for each vertex, ascending
/// 2. for each still-White vertex, ascending: `start_vertex`, then a visit
/// 3. a visit of `v` fires `discover_vertex(v)`; for each out-edge `e` it fires
///    `examine_edge(e)`, then one of `tree_edge(e)` (followed by a visit of the
///    target), `back_edge(e)` or `forward_or_cross_edge(e)`, then
///    `finish_edge(e)`; finally `finish_vertex(v)`
pub trait DfsVisitor<G: Graph + ?Sized> {
    fn init_vertex(&mut self, _v: G::Vertex, _g: &G) {}

    /// A new DFS tree is about to be rooted at `v`
    fn start_vertex(&mut self, _v: G::Vertex, _g: &G) {}

    fn discover_vertex(&mut self, _v: G::Vertex, _g: &G) {}

    fn examine_edge(&mut self, _e: G::Edge, _g: &G) {}

    fn tree_edge(&mut self, _e: G::Edge, _g: &G) {}

    /// Target is Grey: the edge closes a cycle
    fn back_edge(&mut self, _e: G::Edge, _g: &G) {}

    fn forward_or_cross_edge(&mut self, _e: G::Edge, _g: &G) {}

    fn finish_edge(&mut self, _e: G::Edge, _g: &G) {}

    fn finish_vertex(&mut self, _v: G::Vertex, _g: &G) {}
}

/// Visitor that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullVisitor;

impl<G: Graph + ?Sized> DfsVisitor<G> for NullVisitor {}

/// How the search keeps track of the current path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DfsStrategy {
    /// Native call-stack recursion; depth is bounded by the thread stack
    Recursive,
    /// Explicit heap-allocated stack; same event order as `Recursive`
    #[default]
    Iterative,
}

/// DFS configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DfsConfig {
    pub strategy: DfsStrategy,
}

/// Depth-first search over every vertex with the default configuration
pub fn depth_first_search<G, V>(g: &G, visitor: &mut V)
where
    G: VertexListGraph + IncidenceGraph,
    V: DfsVisitor<G>,
{
    depth_first_search_with(g, visitor, DfsConfig::default())
}

/// Depth-first search over every vertex
pub fn depth_first_search_with<G, V>(g: &G, visitor: &mut V, config: DfsConfig)
where
    G: VertexListGraph + IncidenceGraph,
    V: DfsVisitor<G>,
{
    let n = g.vertex_count();
    debug!(
        "Starting depth-first search over {} vertices ({:?})",
        n, config.strategy
    );

    let mut colour = vec![Colour::White; n];
    for v in g.vertices() {
        visitor.init_vertex(v, g);
    }

    let mut trees = 0usize;
    for v in g.vertices() {
        if colour[g.vertex_index(v)] != Colour::White {
            continue;
        }
        trace!("New DFS tree rooted at {:?}", v);
        trees += 1;
        visitor.start_vertex(v, g);
        match config.strategy {
            DfsStrategy::Recursive => visit_recursive(g, visitor, v, &mut colour),
            DfsStrategy::Iterative => visit_iterative(g, visitor, v, &mut colour),
        }
    }

    debug!("Depth-first search finished: {} trees", trees);
}

fn visit_recursive<G, V>(g: &G, visitor: &mut V, u: G::Vertex, colour: &mut [Colour])
where
    G: VertexListGraph + IncidenceGraph,
    V: DfsVisitor<G>,
{
    colour[g.vertex_index(u)] = Colour::Grey;
    visitor.discover_vertex(u, g);

    for e in g.out_edges(u) {
        let w = g.target(e);
        visitor.examine_edge(e, g);
        match colour[g.vertex_index(w)] {
            Colour::White => {
                visitor.tree_edge(e, g);
                visit_recursive(g, visitor, w, colour);
            }
            Colour::Grey => visitor.back_edge(e, g),
            Colour::Black => visitor.forward_or_cross_edge(e, g),
        }
        visitor.finish_edge(e, g);
    }

    colour[g.vertex_index(u)] = Colour::Black;
    visitor.finish_vertex(u, g);
}

/// One vertex on the explicit stack
struct Frame<'g, G: IncidenceGraph + 'g> {
    vertex: G::Vertex,
    edges: G::OutEdges<'g>,
    /// Tree edge whose subtree is being explored; finished when we return here
    pending: Option<G::Edge>,
}

fn visit_iterative<'g, G, V>(g: &'g G, visitor: &mut V, root: G::Vertex, colour: &mut [Colour])
where
    G: VertexListGraph + IncidenceGraph,
    V: DfsVisitor<G>,
{
    colour[g.vertex_index(root)] = Colour::Grey;
    visitor.discover_vertex(root, g);

    let mut stack: Vec<Frame<'g, G>> = vec![Frame {
        vertex: root,
        edges: g.out_edges(root),
        pending: None,
    }];

    while let Some(frame) = stack.last_mut() {
        if let Some(e) = frame.pending.take() {
            visitor.finish_edge(e, g);
        }

        let Some(e) = frame.edges.next() else {
            let u = frame.vertex;
            stack.pop();
            colour[g.vertex_index(u)] = Colour::Black;
            visitor.finish_vertex(u, g);
            continue;
        };

        let w = g.target(e);
        visitor.examine_edge(e, g);
        match colour[g.vertex_index(w)] {
            Colour::White => {
                visitor.tree_edge(e, g);
                frame.pending = Some(e);
                colour[g.vertex_index(w)] = Colour::Grey;
                visitor.discover_vertex(w, g);
                stack.push(Frame {
                    vertex: w,
                    edges: g.out_edges(w),
                    pending: None,
                });
            }
            Colour::Grey => {
                visitor.back_edge(e, g);
                visitor.finish_edge(e, g);
            }
            Colour::Black => {
                visitor.forward_or_cross_edge(e, g);
                visitor.finish_edge(e, g);
            }
        }
    }
}
