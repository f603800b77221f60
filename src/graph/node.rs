//! Handle-based view over the single-edge graph contract.
//!
//! [`NodeGraph`] wraps a [`Graph`] and additionally exposes its vertices and
//! edges as first-class [`NodeId`]/[`EdgeId`] handles. The payload-level
//! contract is unchanged — same single-edge invariant, same total query
//! semantics — but navigation and identity-sensitive work (keeping per-node
//! side tables, distinguishing "this edge" from "an equal edge") go through
//! handles.
//!
//! Handles stay valid across unrelated mutation and become permanently dead
//! when their vertex (or edge) is removed. Using a dead handle is a checked
//! error, never silent corruption: arena slots are tombstoned and not
//! reused, so every handle-taking operation can tell a live handle from a
//! stale one.
//!
//! # Examples
//!
//! ```rust
//! use graphkit::NodeGraph;
//!
//! let mut graph: NodeGraph<&str, u32> = NodeGraph::new();
//! let a = graph.add("a");
//! let b = graph.add("b");
//!
//! // ensure-connected: creates a payload-less edge...
//! let e = graph.connect_nodes(a, b)?;
//! assert_eq!(graph.edge_value(e)?, None);
//!
//! // ...and returns the existing edge on a second call
//! assert_eq!(graph.connect_nodes(a, b)?, e);
//!
//! // the payload-level connect overwrites the same single edge
//! graph.connect("a", "b", 5);
//! assert_eq!(graph.edge_value(e)?, Some(&5));
//! # Ok::<(), graphkit::Error>(())
//! ```

use std::hash::Hash;

use crate::graph::{EdgeId, Graph, GraphView, NodeId};
use crate::{Error, Result};

/// A single-edge directed graph addressed through node and edge handles.
///
/// `NodeGraph<V, E>` layers handle-level operations over the payload-keyed
/// [`Graph`] contract. [`add`](Self::add) is get-or-create (payload equality
/// still identifies vertices), [`connect_nodes`](Self::connect_nodes) is
/// ensure-connected (an existing edge is returned unchanged rather than
/// overwritten), and lookups by handle report staleness as
/// [`Error::StaleNode`]/[`Error::StaleEdge`].
#[derive(Debug, Clone)]
pub struct NodeGraph<V, E> {
    inner: Graph<V, E>,
}

impl<V, E> Default for NodeGraph<V, E> {
    fn default() -> Self {
        NodeGraph::new()
    }
}

impl<V, E> NodeGraph<V, E> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        NodeGraph {
            inner: Graph::new(),
        }
    }

    /// Creates a new empty graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        NodeGraph {
            inner: Graph::with_capacity(vertices, edges),
        }
    }

    /// Returns the number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterator over the handles of all live nodes, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.inner.node_ids()
    }

    /// Payload of a node handle, or [`Error::StaleNode`] if the handle no
    /// longer names a live node.
    pub fn value(&self, node: NodeId) -> Result<&V> {
        self.inner.value_of(node).ok_or(Error::StaleNode(node))
    }

    /// Payload of an edge handle (which may be absent for edges created by
    /// [`connect_nodes`](Self::connect_nodes)), or [`Error::StaleEdge`].
    pub fn edge_value(&self, edge: EdgeId) -> Result<Option<&E>> {
        self.inner
            .edge_slot(edge)
            .map(|slot| slot.value.as_ref())
            .ok_or(Error::StaleEdge(edge))
    }

    /// Source and target node handles of an edge, or [`Error::StaleEdge`].
    pub fn endpoints(&self, edge: EdgeId) -> Result<(NodeId, NodeId)> {
        self.inner
            .edge_slot(edge)
            .map(|slot| (slot.source, slot.target))
            .ok_or(Error::StaleEdge(edge))
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if self.inner.value_of(node).is_some() {
            Ok(())
        } else {
            Err(Error::StaleNode(node))
        }
    }
}

impl<V, E> NodeGraph<V, E>
where
    V: Eq + Hash + Clone,
{
    /// Ensures a vertex for `value` exists and returns its handle.
    ///
    /// Equal payloads always resolve to the same node, so repeated calls
    /// return the same handle.
    pub fn add(&mut self, value: V) -> NodeId {
        self.inner.intern(value)
    }

    /// Looks up the handle of the node holding `value`, or `None` if no such
    /// vertex exists.
    #[must_use]
    pub fn node(&self, value: &V) -> Option<NodeId> {
        self.inner.id_of(value)
    }

    /// Ensures an edge `source -> target` exists between two node handles.
    ///
    /// If the pair is already connected the existing edge is returned with
    /// its payload untouched; otherwise a new payload-less edge is created.
    /// This preserves the single-edge invariant.
    ///
    /// # Errors
    ///
    /// [`Error::StaleNode`] if either handle is dead.
    pub fn connect_nodes(&mut self, source: NodeId, target: NodeId) -> Result<EdgeId> {
        self.check_node(source)?;
        self.check_node(target)?;
        Ok(self.inner.wire(source, target, None, false))
    }

    /// The at-most-one edge from `node` to the vertex holding `target`.
    ///
    /// Returns `Ok(None)` when `target` is unknown or the pair is not
    /// connected.
    ///
    /// # Errors
    ///
    /// [`Error::StaleNode`] if `node` is dead.
    pub fn edge_to(&self, node: NodeId, target: &V) -> Result<Option<EdgeId>> {
        self.check_node(node)?;
        let Some(t) = self.inner.id_of(target) else {
            return Ok(None);
        };
        Ok(self.inner.find_edge(node, t))
    }

    /// The at-most-one edge from the vertex holding `source` to `node`.
    ///
    /// Returns `Ok(None)` when `source` is unknown or the pair is not
    /// connected.
    ///
    /// # Errors
    ///
    /// [`Error::StaleNode`] if `node` is dead.
    pub fn edge_from(&self, node: NodeId, source: &V) -> Result<Option<EdgeId>> {
        self.check_node(node)?;
        let Some(s) = self.inner.id_of(source) else {
            return Ok(None);
        };
        Ok(self.inner.find_edge(s, node))
    }

    /// Handles of the edges leaving the vertex holding `vertex`, in insertion
    /// order; at most one per neighbor. Empty for an unknown vertex.
    pub fn outgoing_edges<'a>(&'a self, vertex: &V) -> impl Iterator<Item = EdgeId> + 'a {
        self.inner
            .id_of(vertex)
            .and_then(|id| self.inner.slot(id))
            .map(|slot| slot.outgoing.as_slice())
            .unwrap_or(&[])
            .iter()
            .copied()
    }

    /// Handles of the edges entering the vertex holding `vertex`, in
    /// insertion order; at most one per neighbor. Empty for an unknown
    /// vertex.
    pub fn incoming_edges<'a>(&'a self, vertex: &V) -> impl Iterator<Item = EdgeId> + 'a {
        self.inner
            .id_of(vertex)
            .and_then(|id| self.inner.slot(id))
            .map(|slot| slot.incoming.as_slice())
            .unwrap_or(&[])
            .iter()
            .copied()
    }

    /// Creates or overwrites the single edge `source -> target` with
    /// `value`, implicitly adding absent endpoints. See
    /// [`Graph::connect`].
    pub fn connect(&mut self, source: V, target: V, value: E) {
        self.inner.connect(source, target, value);
    }

    /// Removes the edge `source -> target` if present, returning its
    /// payload. See [`Graph::disconnect`]. The edge's handle becomes dead.
    pub fn disconnect(&mut self, source: &V, target: &V) -> Option<E> {
        self.inner.disconnect(source, target)
    }

    /// Payload of the edge `source -> target`. See [`Graph::edge`].
    #[must_use]
    pub fn edge(&self, source: &V, target: &V) -> Option<&E> {
        self.inner.edge(source, target)
    }

    /// Edge existence regardless of payload. See [`Graph::has_edge`].
    #[must_use]
    pub fn has_edge(&self, source: &V, target: &V) -> bool {
        self.inner.has_edge(source, target)
    }

    /// Iterator over the target vertices of edges leaving `vertex`. See
    /// [`Graph::outgoing`].
    pub fn outgoing<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.inner.outgoing(vertex)
    }

    /// Iterator over the source vertices of edges entering `vertex`. See
    /// [`Graph::incoming`].
    pub fn incoming<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.inner.incoming(vertex)
    }

    /// Returns `true` if `vertex` is present in the graph.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.inner.contains(vertex)
    }

    /// Iterator over all vertex payloads, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.inner.vertices()
    }

    /// Deletes `vertex` and every incident edge; idempotent. The vertex's
    /// node handle and the handles of all removed edges become dead.
    pub fn remove(&mut self, vertex: &V) -> bool {
        self.inner.remove(vertex)
    }
}

impl<V, E> GraphView for NodeGraph<V, E>
where
    V: Eq + Hash + Clone,
{
    type Vertex = V;

    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        GraphView::vertices(&self.inner)
    }

    fn outgoing(&self, vertex: &V) -> impl Iterator<Item = V> + '_ {
        GraphView::outgoing(&self.inner, vertex)
    }

    fn incoming(&self, vertex: &V) -> impl Iterator<Item = V> + '_ {
        GraphView::incoming(&self.inner, vertex)
    }

    fn contains(&self, vertex: &V) -> bool {
        self.inner.contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }
}
