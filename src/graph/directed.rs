//! Single-edge directed graph keyed by vertex payload.
//!
//! This module provides [`Graph`], the foundational graph type of the crate.
//! Vertices are identified by payload equality (`V: Eq + Hash`), and at most
//! one edge exists per ordered vertex pair — reconnecting an existing pair
//! overwrites its payload.
//!
//! All operations are total: unknown vertices and missing edges resolve to
//! empty iterators or `None`, never errors. This keeps call sites that build
//! graphs incrementally — where [`connect`](Graph::connect) is often the only
//! vertex-creation path used — free of existence checks.
//!
//! # Storage
//!
//! Vertices and edges live in dense arenas indexed by [`NodeId`] and
//! [`EdgeId`], with a payload-to-id map for lookup. Removal tombstones the
//! slot; slots are never reused, which lets the handle view
//! ([`NodeGraph`](crate::NodeGraph)) detect dangling handles exactly.
//!
//! # Examples
//!
//! ```rust
//! use graphkit::Graph;
//!
//! let mut graph: Graph<&str, u32> = Graph::new();
//! graph.connect("a", "b", 1); // implicitly adds "a" and "b"
//! graph.connect("b", "c", 2);
//!
//! assert_eq!(graph.edge(&"a", &"b"), Some(&1));
//! assert!(graph.outgoing(&"a").any(|v| *v == "b"));
//!
//! graph.remove(&"b"); // drops both edges with it
//! assert_eq!(graph.edge_count(), 0);
//! ```

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use crate::graph::{EdgeId, GraphView, NodeId};

/// A vertex arena slot: the payload plus the incident edge lists.
///
/// Edge lists keep insertion order; iteration over neighbors follows it.
#[derive(Debug, Clone)]
pub(crate) struct VertexSlot<V> {
    pub(crate) value: V,
    pub(crate) outgoing: SmallVec<[EdgeId; 4]>,
    pub(crate) incoming: SmallVec<[EdgeId; 4]>,
}

impl<V> VertexSlot<V> {
    fn new(value: V) -> Self {
        VertexSlot {
            value,
            outgoing: SmallVec::new(),
            incoming: SmallVec::new(),
        }
    }
}

/// An edge arena slot: endpoints plus the optional payload.
///
/// The payload is optional because the handle view can materialize edges
/// without one; `None` plays the role of the absent payload throughout the
/// payload-level API.
#[derive(Debug, Clone)]
pub(crate) struct EdgeSlot<E> {
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,
    pub(crate) value: Option<E>,
}

/// A directed graph with payload-identified vertices and at most one edge per
/// ordered vertex pair.
///
/// `Graph<V, E>` stores vertices of type `V` (compared by `Eq`/`Hash`) and
/// directed edges carrying an optional payload of type `E`. Connecting an
/// already-connected pair overwrites the edge payload rather than adding a
/// parallel edge; use [`MultiGraph`](crate::MultiGraph) when parallel edges
/// are required.
///
/// # Failure Semantics
///
/// Every operation is total. Queries about unknown vertices return empty
/// iterators or `None`; [`remove`](Self::remove) and
/// [`disconnect`](Self::disconnect) are idempotent.
///
/// # Examples
///
/// ```rust
/// use graphkit::Graph;
///
/// let mut graph: Graph<u32, &str> = Graph::new();
/// graph.connect(1, 2, "first");
/// graph.connect(1, 2, "second"); // overwrites
///
/// assert_eq!(graph.edge(&1, &2), Some(&"second"));
/// assert_eq!(graph.disconnect(&1, &2), Some("second"));
/// assert_eq!(graph.disconnect(&1, &2), None); // already gone
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    /// Vertex arena; `None` marks a removed vertex. Slots are never reused.
    slots: Vec<Option<VertexSlot<V>>>,
    /// Edge arena; `None` marks a removed edge. Slots are never reused.
    edges: Vec<Option<EdgeSlot<E>>>,
    /// Payload-to-id lookup; holds exactly the live vertices.
    index: HashMap<V, NodeId>,
    /// Count of live edges.
    live_edges: usize,
}

impl<V, E> Graph<V, E> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Graph {
            slots: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
            live_edges: 0,
        }
    }

    /// Creates a new empty graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Graph {
            slots: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            index: HashMap::with_capacity(vertices),
            live_edges: 0,
        }
    }

    /// Returns the number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub(crate) fn slot(&self, id: NodeId) -> Option<&VertexSlot<V>> {
        self.slots.get(id.index())?.as_ref()
    }

    pub(crate) fn edge_slot(&self, id: EdgeId) -> Option<&EdgeSlot<E>> {
        self.edges.get(id.index())?.as_ref()
    }

    pub(crate) fn value_of(&self, id: NodeId) -> Option<&V> {
        self.slot(id).map(|slot| &slot.value)
    }

    /// Iterator over the ids of all live vertices, in insertion order.
    pub(crate) fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| NodeId::new(i)))
    }

    /// Looks up the edge for an ordered pair of vertex ids.
    pub(crate) fn find_edge(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        self.slot(source)?.outgoing.iter().copied().find(|&e| {
            self.edges[e.index()]
                .as_ref()
                .is_some_and(|edge| edge.target == target)
        })
    }
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
{
    /// Ensures `vertex` is present in the graph.
    ///
    /// Returns `true` if the vertex was newly inserted, `false` if it already
    /// existed (in which case the call is a no-op).
    pub fn add(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.intern(vertex);
        true
    }

    /// Creates or overwrites the single directed edge `source -> target`.
    ///
    /// Both endpoints are implicitly added if absent. If the pair is already
    /// connected, the existing edge's payload is replaced with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphkit::Graph;
    ///
    /// let mut graph: Graph<&str, u8> = Graph::new();
    /// graph.connect("x", "y", 1);
    /// assert!(graph.contains(&"x"));
    /// assert_eq!(graph.edge(&"x", &"y"), Some(&1));
    /// ```
    pub fn connect(&mut self, source: V, target: V, value: E) {
        let s = self.intern(source);
        let t = self.intern(target);
        self.wire(s, t, Some(value), true);
    }

    /// Removes the edge `source -> target` if present.
    ///
    /// Returns the removed edge's payload. `None` means there was no edge,
    /// an endpoint is unknown, or the edge carried no payload; none of these
    /// is an error, and a second call for the same pair returns `None`.
    pub fn disconnect(&mut self, source: &V, target: &V) -> Option<E> {
        let s = self.id_of(source)?;
        let t = self.id_of(target)?;
        let e = self.find_edge(s, t)?;
        self.unlink(e)
    }

    /// Returns the payload of the edge `source -> target`, or `None` if the
    /// pair is not connected (or the edge carries no payload).
    ///
    /// Use [`has_edge`](Self::has_edge) to distinguish a payload-less edge
    /// from a missing one.
    #[must_use]
    pub fn edge(&self, source: &V, target: &V) -> Option<&E> {
        let e = self.find_edge(self.id_of(source)?, self.id_of(target)?)?;
        self.edge_slot(e)?.value.as_ref()
    }

    /// Returns `true` if an edge `source -> target` exists, regardless of
    /// whether it carries a payload.
    #[must_use]
    pub fn has_edge(&self, source: &V, target: &V) -> bool {
        match (self.id_of(source), self.id_of(target)) {
            (Some(s), Some(t)) => self.find_edge(s, t).is_some(),
            _ => false,
        }
    }

    /// Iterator over the target vertices of edges leaving `vertex`, in edge
    /// insertion order. Empty for an unknown vertex.
    pub fn outgoing<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        let edges = self
            .id_of(vertex)
            .and_then(|id| self.slot(id))
            .map(|slot| slot.outgoing.as_slice())
            .unwrap_or(&[]);
        edges
            .iter()
            .filter_map(move |&e| self.value_of(self.edge_slot(e)?.target))
    }

    /// Iterator over the source vertices of edges entering `vertex`, in edge
    /// insertion order. Empty for an unknown vertex.
    pub fn incoming<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        let edges = self
            .id_of(vertex)
            .and_then(|id| self.slot(id))
            .map(|slot| slot.incoming.as_slice())
            .unwrap_or(&[]);
        edges
            .iter()
            .filter_map(move |&e| self.value_of(self.edge_slot(e)?.source))
    }

    /// Returns `true` if `vertex` is present in the graph.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Iterator over all vertex payloads, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.index.keys()
    }

    /// Deletes `vertex` and every edge touching it, in both directions.
    ///
    /// Idempotent: removing an absent vertex is a no-op. Returns `true` if
    /// the vertex was present.
    pub fn remove(&mut self, vertex: &V) -> bool {
        let Some(id) = self.index.remove(vertex) else {
            return false;
        };
        let Some(slot) = self.slots[id.index()].take() else {
            return false;
        };
        // A self-loop edge appears in both lists; the second take is a no-op.
        for e in slot.outgoing {
            if let Some(edge) = self.edges[e.index()].take() {
                self.live_edges -= 1;
                if edge.target != id {
                    if let Some(neighbor) = self.slots[edge.target.index()].as_mut() {
                        neighbor.incoming.retain(|x| *x != e);
                    }
                }
            }
        }
        for e in slot.incoming {
            if let Some(edge) = self.edges[e.index()].take() {
                self.live_edges -= 1;
                if edge.source != id {
                    if let Some(neighbor) = self.slots[edge.source.index()].as_mut() {
                        neighbor.outgoing.retain(|x| *x != e);
                    }
                }
            }
        }
        true
    }

    /// Returns the id for `vertex`, if it is present.
    pub(crate) fn id_of(&self, vertex: &V) -> Option<NodeId> {
        self.index.get(vertex).copied()
    }

    /// Get-or-create the vertex slot for a payload.
    pub(crate) fn intern(&mut self, value: V) -> NodeId {
        if let Some(&id) = self.index.get(&value) {
            return id;
        }
        let id = NodeId::new(self.slots.len());
        self.slots.push(Some(VertexSlot::new(value.clone())));
        self.index.insert(value, id);
        id
    }

    /// Creates the edge `source -> target` between existing vertex ids, or
    /// reuses the existing one for the pair.
    ///
    /// With `overwrite` the existing edge's payload is replaced; without, it
    /// is left untouched (the ensure-connected semantics of the handle view).
    pub(crate) fn wire(
        &mut self,
        source: NodeId,
        target: NodeId,
        value: Option<E>,
        overwrite: bool,
    ) -> EdgeId {
        if let Some(e) = self.find_edge(source, target) {
            if overwrite {
                if let Some(slot) = self.edges[e.index()].as_mut() {
                    slot.value = value;
                }
            }
            return e;
        }
        let e = EdgeId::new(self.edges.len());
        self.edges.push(Some(EdgeSlot {
            source,
            target,
            value,
        }));
        if let Some(slot) = self.slots[source.index()].as_mut() {
            slot.outgoing.push(e);
        }
        if let Some(slot) = self.slots[target.index()].as_mut() {
            slot.incoming.push(e);
        }
        self.live_edges += 1;
        e
    }

    /// As [`connect`](Self::connect) but accepting an optional payload.
    pub(crate) fn connect_raw(&mut self, source: V, target: V, value: Option<E>) {
        let s = self.intern(source);
        let t = self.intern(target);
        self.wire(s, t, value, true);
    }

    /// Removes one edge by id, unhooking it from both adjacency lists.
    pub(crate) fn unlink(&mut self, e: EdgeId) -> Option<E> {
        let slot = self.edges[e.index()].take()?;
        if let Some(vertex) = self.slots[slot.source.index()].as_mut() {
            vertex.outgoing.retain(|x| *x != e);
        }
        if let Some(vertex) = self.slots[slot.target.index()].as_mut() {
            vertex.incoming.retain(|x| *x != e);
        }
        self.live_edges -= 1;
        slot.value
    }

    /// Payload slot (possibly `None`) of the edge between two vertex ids.
    pub(crate) fn edge_payload(&self, source: NodeId, target: NodeId) -> Option<&Option<E>> {
        let e = self.find_edge(source, target)?;
        self.edge_slot(e).map(|slot| &slot.value)
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Graph::new()
    }
}

impl<V, E> GraphView for Graph<V, E>
where
    V: Eq + Hash + Clone,
{
    type Vertex = V;

    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.index.keys().cloned()
    }

    fn outgoing(&self, vertex: &V) -> impl Iterator<Item = V> + '_ {
        Graph::outgoing(self, vertex).cloned()
    }

    fn incoming(&self, vertex: &V) -> impl Iterator<Item = V> + '_ {
        Graph::incoming(self, vertex).cloned()
    }

    fn contains(&self, vertex: &V) -> bool {
        Graph::contains(self, vertex)
    }

    fn vertex_count(&self) -> usize {
        self.index.len()
    }
}

impl<V, E> PartialEq for Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: PartialEq,
{
    /// Structural equality: same vertex set, same edges, equal edge payloads.
    /// Insertion order and handle values do not participate.
    fn eq(&self, other: &Self) -> bool {
        if self.index.len() != other.index.len() || self.live_edges != other.live_edges {
            return false;
        }
        if !self.index.keys().all(|v| other.contains(v)) {
            return false;
        }
        self.edges.iter().flatten().all(|edge| {
            let (Some(sv), Some(tv)) = (self.value_of(edge.source), self.value_of(edge.target))
            else {
                return false;
            };
            let (Some(os), Some(ot)) = (other.id_of(sv), other.id_of(tv)) else {
                return false;
            };
            other
                .edge_payload(os, ot)
                .is_some_and(|payload| *payload == edge.value)
        })
    }
}

impl<V, E> Eq for Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq,
{
}

impl<V, E> Hash for Graph<V, E>
where
    V: Eq + Hash + Clone,
{
    /// Hashes the graph structure: vertex payloads and edge endpoint pairs,
    /// combined order-independently. Edge payloads are excluded, which keeps
    /// the hash consistent with equality without requiring `E: Hash`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.len().hash(state);
        self.live_edges.hash(state);

        let mut vertices: u64 = 0;
        for v in self.index.keys() {
            let mut h = DefaultHasher::new();
            v.hash(&mut h);
            vertices ^= h.finish();
        }
        vertices.hash(state);

        let mut endpoints: u64 = 0;
        for edge in self.edges.iter().flatten() {
            let mut h = DefaultHasher::new();
            self.value_of(edge.source).hash(&mut h);
            self.value_of(edge.target).hash(&mut h);
            endpoints ^= h.finish();
        }
        endpoints.hash(state);
    }
}
