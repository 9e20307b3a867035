//! Payload support
//!
//! Vertex and edge payloads are plain type parameters of the graph. A graph
//! that carries no payload uses [`NoProp`], which is zero-sized, so stored
//! vertices and edges reserve no space for it.

use serde::{Deserialize, Serialize};

/// Marker payload meaning "nothing attached"
///
/// Payload accessors (`vertex_prop`, `edge_prop`, `g[v]`, `g[e]` and their
/// `_mut` forms) still exist on a graph whose payload is `NoProp`. They
/// return this marker, which carries no data; nothing is ever stored for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoProp;
