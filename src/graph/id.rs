//! Strongly-typed node and edge identifiers.
//!
//! This module provides the [`NodeId`] and [`EdgeId`] newtypes used as handles
//! into graph storage. The wrappers prevent accidental confusion between node
//! indices, edge indices, and other integer values.
//!
//! Identifiers are assigned sequentially starting from 0 when nodes or edges
//! are added to a graph, and a slot is never reassigned after its node or edge
//! has been removed. A handle therefore either names the element it was
//! created for, or nothing at all — handle-taking operations detect the latter
//! and report it as [`Error::StaleNode`](crate::Error::StaleNode) or
//! [`Error::StaleEdge`](crate::Error::StaleEdge).

use std::fmt;

/// A strongly-typed identifier for nodes within a graph.
///
/// `NodeId` wraps a `usize` index into the owning graph's node arena. Handles
/// are created by [`NodeGraph::add`](crate::NodeGraph::add) and
/// [`MultiGraph::add`](crate::MultiGraph::add) and are only meaningful for the
/// graph that issued them.
///
/// # Examples
///
/// ```rust
/// use graphkit::{MultiGraph, NodeId};
/// use std::collections::HashMap;
///
/// let mut graph: MultiGraph<&str, ()> = MultiGraph::new();
/// let a: NodeId = graph.add("A");
/// let b: NodeId = graph.add("B");
/// assert_ne!(a, b);
///
/// // NodeIds can be used as keys in collections
/// let mut data: HashMap<NodeId, i32> = HashMap::new();
/// data.insert(a, 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a `NodeId` from a raw index value.
    ///
    /// Primarily intended for internal use and testing; normal usage obtains
    /// handles from the graph that owns the node.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw 0-based index of this node identifier.
    ///
    /// The index can be used to address per-node side tables kept in plain
    /// vectors.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

/// A strongly-typed identifier for edges within a graph.
///
/// `EdgeId` wraps a `usize` index into the owning graph's edge arena. Handles
/// are created when edges are, e.g. by
/// [`MultiGraph::connect`](crate::MultiGraph::connect), and identify one
/// specific edge — in a multi-edge graph, each parallel edge between the same
/// node pair has its own `EdgeId` and an independently mutable payload.
///
/// # Examples
///
/// ```rust
/// use graphkit::{MultiGraph, EdgeId};
///
/// let mut graph: MultiGraph<&str, &str> = MultiGraph::new();
/// let a = graph.add("A");
/// let b = graph.add("B");
/// let e: EdgeId = graph.connect(a, b, "A->B")?;
///
/// assert_eq!(graph.edge_value(e)?, Some(&"A->B"));
/// assert_eq!(graph.endpoints(e)?, (a, b));
/// # Ok::<(), graphkit::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates an `EdgeId` from a raw index value.
    ///
    /// Primarily intended for internal use and testing; normal usage obtains
    /// handles from the graph that owns the edge.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw 0-based index of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_node_id_roundtrip() {
        let node = NodeId::new(42);
        assert_eq!(node.index(), 42);

        let node: NodeId = 123usize.into();
        let raw: usize = node.into();
        assert_eq!(raw, 123);
    }

    #[test]
    fn test_node_id_ordering_and_hash() {
        let n1 = NodeId::new(1);
        let n2 = NodeId::new(2);
        assert!(n1 < n2);

        let mut set: HashSet<NodeId> = HashSet::new();
        set.insert(n1);
        set.insert(n2);
        set.insert(NodeId::new(1)); // duplicate
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_id_as_map_key() {
        let mut map: HashMap<NodeId, &str> = HashMap::new();
        map.insert(NodeId::new(1), "first");
        map.insert(NodeId::new(2), "second");

        assert_eq!(map.get(&NodeId::new(1)), Some(&"first"));
        assert_eq!(map.get(&NodeId::new(3)), None);
    }

    #[test]
    fn test_edge_id_roundtrip() {
        let edge = EdgeId::new(7);
        assert_eq!(edge.index(), 7);

        let edge: EdgeId = 99usize.into();
        let raw: usize = edge.into();
        assert_eq!(raw, 99);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(format!("{}", NodeId::new(42)), "n42");
        assert_eq!(format!("{}", EdgeId::new(42)), "e42");
        assert_eq!(format!("{:?}", NodeId::new(42)), "NodeId(42)");
        assert_eq!(format!("{:?}", EdgeId::new(42)), "EdgeId(42)");
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // NodeId and EdgeId share an underlying representation but cannot be
        // mixed; the following would not compile:
        // let _: NodeId = EdgeId::new(5);
        let node = NodeId::new(5);
        let edge = EdgeId::new(5);
        assert_eq!(node.index(), edge.index());
    }
}
