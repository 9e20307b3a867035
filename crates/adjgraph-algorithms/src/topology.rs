//! Topological ordering
//!
//! A topological sort is a depth-first search that records vertices in finish
//! order. A vertex finishes only after everything reachable from it has, so
//! the reversed finish order puts `u` before `v` for every edge `u -> v` of an
//! acyclic graph. Cyclic input is not rejected unless the caller opts in with
//! [`CyclePolicy::Reject`]; otherwise the output is simply not a valid order.

use super::common::{Graph, IncidenceGraph, VertexListGraph};
use super::traversal::{depth_first_search_with, DfsConfig, DfsVisitor};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised by a checked topological sort
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopoSortError<V: fmt::Debug> {
    #[error("graph contains a cycle: back edge {from:?} -> {to:?}")]
    Cycle { from: V, to: V },
}

pub type TopoResult<T, V> = Result<T, TopoSortError<V>>;

/// What to do when the input turns out to be cyclic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CyclePolicy {
    /// Produce the finish order anyway
    #[default]
    Ignore,
    /// Fail with [`TopoSortError::Cycle`] and leave the output untouched
    Reject,
}

/// Topological sort configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopoSortConfig {
    pub cycle_policy: CyclePolicy,
    pub dfs: DfsConfig,
}

/// Visitor that appends each finished vertex to `out`
pub struct TopoVisitor<'a, O> {
    out: &'a mut O,
}

impl<'a, O> TopoVisitor<'a, O> {
    pub fn new(out: &'a mut O) -> Self {
        TopoVisitor { out }
    }
}

impl<'a, G, O> DfsVisitor<G> for TopoVisitor<'a, O>
where
    G: Graph + ?Sized,
    O: Extend<G::Vertex>,
{
    fn finish_vertex(&mut self, v: G::Vertex, _g: &G) {
        self.out.extend(std::iter::once(v));
    }
}

/// Append every vertex of `g` to `out` in DFS finish order
///
/// Reverse the appended run to obtain a topological order.
pub fn topological_sort<G, O>(g: &G, out: &mut O)
where
    G: VertexListGraph + IncidenceGraph,
    O: Extend<G::Vertex>,
{
    depth_first_search_with(g, &mut TopoVisitor::new(out), DfsConfig::default());
}

/// Like [`topological_sort`], with an explicit DFS strategy and cycle policy
pub fn topological_sort_with<G, O>(
    g: &G,
    out: &mut O,
    config: TopoSortConfig,
) -> TopoResult<(), G::Vertex>
where
    G: VertexListGraph + IncidenceGraph,
    O: Extend<G::Vertex>,
{
    match config.cycle_policy {
        CyclePolicy::Ignore => {
            depth_first_search_with(g, &mut TopoVisitor::new(out), config.dfs);
            Ok(())
        }
        CyclePolicy::Reject => {
            let mut guard: CycleGuard<G::Vertex, G::Edge> = CycleGuard {
                finished: Vec::with_capacity(g.vertex_count()),
                back_edge: None,
            };
            depth_first_search_with(g, &mut guard, config.dfs);

            if let Some(e) = guard.back_edge {
                let (from, to) = (g.source(e), g.target(e));
                warn!("Topological sort rejected: cycle through {:?} -> {:?}", from, to);
                return Err(TopoSortError::Cycle { from, to });
            }

            debug!("Topological sort accepted {} vertices", guard.finished.len());
            out.extend(guard.finished);
            Ok(())
        }
    }
}

/// Topological order of `g`: the reversed finish order
pub fn topological_order<G>(g: &G) -> Vec<G::Vertex>
where
    G: VertexListGraph + IncidenceGraph,
{
    let mut order = Vec::with_capacity(g.vertex_count());
    topological_sort(g, &mut order);
    order.reverse();
    order
}

/// Collects finish order and remembers the first back edge
struct CycleGuard<V, E> {
    finished: Vec<V>,
    back_edge: Option<E>,
}

impl<G> DfsVisitor<G> for CycleGuard<G::Vertex, G::Edge>
where
    G: Graph + ?Sized,
{
    fn back_edge(&mut self, e: G::Edge, _g: &G) {
        self.back_edge.get_or_insert(e);
    }

    fn finish_vertex(&mut self, v: G::Vertex, _g: &G) {
        self.finished.push(v);
    }
}
