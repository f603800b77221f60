use thiserror::Error;

use crate::graph::{EdgeId, NodeId};

/// The generic Error type, which provides coverage for all errors this library
/// can potentially return.
///
/// The error surface is intentionally small. Payload-keyed operations are
/// total — unknown vertices and missing edges resolve to empty results or
/// `None` — so the only failure mode left is using a node or edge handle
/// after its element has been removed from the owning graph. Arena slots are
/// tombstoned and never reused, which makes that condition exactly
/// detectable instead of a silent dangling reference.
///
/// # Examples
///
/// ```rust
/// use graphkit::{Error, NodeGraph};
///
/// let mut graph: NodeGraph<&str, ()> = NodeGraph::new();
/// let a = graph.add("a");
/// graph.remove(&"a");
///
/// match graph.value(a) {
///     Err(Error::StaleNode(handle)) => assert_eq!(handle, a),
///     other => panic!("expected a stale handle error, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A node handle was used after its node was removed (or it never named
    /// a node of this graph).
    ///
    /// Node handles become permanently dead when
    /// [`NodeGraph::remove`](crate::NodeGraph::remove) or
    /// [`MultiGraph::remove`](crate::MultiGraph::remove) deletes their node;
    /// re-adding an equal payload afterwards creates a fresh node under a
    /// new handle.
    #[error("stale node handle {0}: the node is not live in this graph")]
    StaleNode(NodeId),

    /// An edge handle was used after its edge was removed (or it never named
    /// an edge of this graph).
    ///
    /// Edge handles die with their edge: on disconnect, and when either
    /// endpoint node is removed.
    #[error("stale edge handle {0}: the edge is not live in this graph")]
    StaleEdge(EdgeId),
}
