//! Multi-edge directed graph keyed by node identity.
//!
//! [`MultiGraph`] deliberately diverges from the single-edge contract of
//! [`Graph`](crate::Graph)/[`NodeGraph`](crate::NodeGraph): nodes and edges
//! are created explicitly and never deduplicated by payload. Two calls to
//! [`add`](MultiGraph::add) with equal payloads produce two distinct nodes,
//! and every [`connect`](MultiGraph::connect) produces a new, additional
//! edge — parallel edges between the same ordered node pair coexist, each
//! with an independent identity and an independently mutable payload.
//!
//! This is the representation of choice when the same two entities carry
//! multiple independent associations. Callers that need get-or-create
//! semantics instead keep their own payload-to-handle map externally (or use
//! [`NodeGraph`](crate::NodeGraph)).
//!
//! # Examples
//!
//! ```rust
//! use graphkit::MultiGraph;
//!
//! let mut graph: MultiGraph<&str, u32> = MultiGraph::new();
//! let a = graph.add("endpoint");
//! let b = graph.add("endpoint"); // a distinct second node
//! assert_ne!(a, b);
//!
//! graph.connect(a, b, 1)?;
//! graph.connect(a, b, 2)?; // parallel edge
//! assert_eq!(graph.edges_between(a, b)?, vec![&1, &2]);
//!
//! // dropping the pair removes both parallel edges at once
//! assert_eq!(graph.disconnect(a, b)?, vec![Some(1), Some(2)]);
//! # Ok::<(), graphkit::Error>(())
//! ```

use smallvec::SmallVec;

use crate::graph::{EdgeId, GraphView, NodeId};
use crate::{Error, Result};

/// A node arena slot of a multi-edge graph.
#[derive(Debug, Clone)]
struct MultiNode<V> {
    value: V,
    outgoing: SmallVec<[EdgeId; 4]>,
    incoming: SmallVec<[EdgeId; 4]>,
}

/// An edge arena slot of a multi-edge graph.
#[derive(Debug, Clone)]
struct MultiEdge<E> {
    source: NodeId,
    target: NodeId,
    value: Option<E>,
}

/// A directed graph with identity-keyed nodes and parallel edges.
///
/// Handles ([`NodeId`]/[`EdgeId`]) are the only way to address nodes and
/// edges; payload equality plays no role in identity. Handle-taking
/// operations return [`Error::StaleNode`]/[`Error::StaleEdge`] when the
/// handle's slot has been removed — slots are tombstoned, never reused, so
/// detection is exact.
#[derive(Debug, Clone)]
pub struct MultiGraph<V, E> {
    nodes: Vec<Option<MultiNode<V>>>,
    edges: Vec<Option<MultiEdge<E>>>,
    live_nodes: usize,
    live_edges: usize,
}

impl<V, E> MultiGraph<V, E> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        MultiGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
            live_nodes: 0,
            live_edges: 0,
        }
    }

    /// Creates a new empty graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        MultiGraph {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            live_nodes: 0,
            live_edges: 0,
        }
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.live_nodes
    }

    /// Returns the number of live edges, counting each parallel edge.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_nodes == 0
    }

    /// Creates a new node holding `value` and returns its handle.
    ///
    /// Always creates a fresh node, even if another node holds an equal
    /// payload.
    pub fn add(&mut self, value: V) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Some(MultiNode {
            value,
            outgoing: SmallVec::new(),
            incoming: SmallVec::new(),
        }));
        self.live_nodes += 1;
        id
    }

    /// Iterator over the handles of all live nodes, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| NodeId::new(i)))
    }

    /// Payload of a node handle.
    ///
    /// # Errors
    ///
    /// [`Error::StaleNode`] if the handle no longer names a live node.
    pub fn value(&self, node: NodeId) -> Result<&V> {
        self.node_slot(node)
            .map(|slot| &slot.value)
            .ok_or(Error::StaleNode(node))
    }

    /// Creates a new edge `source -> target` carrying `value`.
    ///
    /// Always creates an additional edge; existing edges between the pair
    /// are unaffected.
    ///
    /// # Errors
    ///
    /// [`Error::StaleNode`] if either handle is dead.
    pub fn connect(&mut self, source: NodeId, target: NodeId, value: E) -> Result<EdgeId> {
        self.insert_edge(source, target, Some(value))
    }

    /// Creates a new edge `source -> target` without a payload.
    ///
    /// # Errors
    ///
    /// [`Error::StaleNode`] if either handle is dead.
    pub fn connect_unlabeled(&mut self, source: NodeId, target: NodeId) -> Result<EdgeId> {
        self.insert_edge(source, target, None)
    }

    /// Removes **all** edges `source -> target` and returns their payloads in
    /// edge insertion order (payload-less edges contribute `None`).
    ///
    /// Edges in the opposite direction are unaffected. An unconnected pair
    /// yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// [`Error::StaleNode`] if either handle is dead.
    pub fn disconnect(&mut self, source: NodeId, target: NodeId) -> Result<Vec<Option<E>>> {
        self.check_node(source)?;
        self.check_node(target)?;
        let doomed: Vec<EdgeId> = self
            .parallel_edges(source, target)
            .collect();
        let mut values = Vec::with_capacity(doomed.len());
        for e in doomed {
            if let Some(edge) = self.edges[e.index()].take() {
                self.unhook(e, edge.source, edge.target);
                self.live_edges -= 1;
                values.push(edge.value);
            }
        }
        Ok(values)
    }

    /// Payloads of all edges `source -> target`, in edge insertion order.
    /// Payload-less edges are skipped; use
    /// [`edge_handles_between`](Self::edge_handles_between) to see them.
    ///
    /// # Errors
    ///
    /// [`Error::StaleNode`] if either handle is dead.
    pub fn edges_between(&self, source: NodeId, target: NodeId) -> Result<Vec<&E>> {
        self.check_node(source)?;
        self.check_node(target)?;
        Ok(self
            .parallel_edges(source, target)
            .filter_map(|e| self.edges[e.index()].as_ref()?.value.as_ref())
            .collect())
    }

    /// Handles of all edges `source -> target`, in edge insertion order.
    ///
    /// # Errors
    ///
    /// [`Error::StaleNode`] if either handle is dead.
    pub fn edge_handles_between(&self, source: NodeId, target: NodeId) -> Result<Vec<EdgeId>> {
        self.check_node(source)?;
        self.check_node(target)?;
        Ok(self.parallel_edges(source, target).collect())
    }

    /// Deduplicated successor nodes of `node` (parallel edges collapse), in
    /// order of first connection.
    ///
    /// # Errors
    ///
    /// [`Error::StaleNode`] if the handle is dead.
    pub fn outgoing(&self, node: NodeId) -> Result<Vec<NodeId>> {
        let slot = self.node_slot(node).ok_or(Error::StaleNode(node))?;
        Ok(self.dedup_endpoints(&slot.outgoing, |edge| edge.target))
    }

    /// Deduplicated predecessor nodes of `node` (parallel edges collapse),
    /// in order of first connection.
    ///
    /// # Errors
    ///
    /// [`Error::StaleNode`] if the handle is dead.
    pub fn incoming(&self, node: NodeId) -> Result<Vec<NodeId>> {
        let slot = self.node_slot(node).ok_or(Error::StaleNode(node))?;
        Ok(self.dedup_endpoints(&slot.incoming, |edge| edge.source))
    }

    /// Handles of all edges leaving `node`, one per parallel edge, in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// [`Error::StaleNode`] if the handle is dead.
    pub fn outgoing_edges(&self, node: NodeId) -> Result<impl Iterator<Item = EdgeId> + '_> {
        let slot = self.node_slot(node).ok_or(Error::StaleNode(node))?;
        Ok(slot.outgoing.iter().copied())
    }

    /// Handles of all edges entering `node`, one per parallel edge, in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// [`Error::StaleNode`] if the handle is dead.
    pub fn incoming_edges(&self, node: NodeId) -> Result<impl Iterator<Item = EdgeId> + '_> {
        let slot = self.node_slot(node).ok_or(Error::StaleNode(node))?;
        Ok(slot.incoming.iter().copied())
    }

    /// Replaces the payload of one specific edge in place, returning the
    /// previous payload. Parallel edges of the same pair are unaffected.
    ///
    /// # Errors
    ///
    /// [`Error::StaleEdge`] if the handle is dead.
    pub fn set_edge_value(&mut self, edge: EdgeId, value: Option<E>) -> Result<Option<E>> {
        let slot = self
            .edges
            .get_mut(edge.index())
            .and_then(Option::as_mut)
            .ok_or(Error::StaleEdge(edge))?;
        Ok(std::mem::replace(&mut slot.value, value))
    }

    /// Payload of an edge handle.
    ///
    /// # Errors
    ///
    /// [`Error::StaleEdge`] if the handle is dead.
    pub fn edge_value(&self, edge: EdgeId) -> Result<Option<&E>> {
        self.edge_slot(edge)
            .map(|slot| slot.value.as_ref())
            .ok_or(Error::StaleEdge(edge))
    }

    /// Source and target node handles of an edge.
    ///
    /// # Errors
    ///
    /// [`Error::StaleEdge`] if the handle is dead.
    pub fn endpoints(&self, edge: EdgeId) -> Result<(NodeId, NodeId)> {
        self.edge_slot(edge)
            .map(|slot| (slot.source, slot.target))
            .ok_or(Error::StaleEdge(edge))
    }

    /// Deletes a node and every incident edge, in both directions.
    ///
    /// Idempotent: removing a dead handle is a no-op returning `false`.
    pub fn remove(&mut self, node: NodeId) -> bool {
        let Some(slot) = self.nodes.get_mut(node.index()).and_then(Option::take) else {
            return false;
        };
        self.live_nodes -= 1;
        // A self-loop edge appears in both lists; the second take is a no-op.
        for e in slot.outgoing {
            if let Some(edge) = self.edges[e.index()].take() {
                self.live_edges -= 1;
                if edge.target != node {
                    if let Some(neighbor) = self.nodes[edge.target.index()].as_mut() {
                        neighbor.incoming.retain(|x| *x != e);
                    }
                }
            }
        }
        for e in slot.incoming {
            if let Some(edge) = self.edges[e.index()].take() {
                self.live_edges -= 1;
                if edge.source != node {
                    if let Some(neighbor) = self.nodes[edge.source.index()].as_mut() {
                        neighbor.outgoing.retain(|x| *x != e);
                    }
                }
            }
        }
        true
    }

    fn node_slot(&self, id: NodeId) -> Option<&MultiNode<V>> {
        self.nodes.get(id.index())?.as_ref()
    }

    fn edge_slot(&self, id: EdgeId) -> Option<&MultiEdge<E>> {
        self.edges.get(id.index())?.as_ref()
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if self.node_slot(node).is_some() {
            Ok(())
        } else {
            Err(Error::StaleNode(node))
        }
    }

    /// Edge handles `source -> target`, in insertion order.
    fn parallel_edges(&self, source: NodeId, target: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.node_slot(source)
            .map(|slot| slot.outgoing.as_slice())
            .unwrap_or(&[])
            .iter()
            .copied()
            .filter(move |&e| {
                self.edges[e.index()]
                    .as_ref()
                    .is_some_and(|edge| edge.target == target)
            })
    }

    fn dedup_endpoints(
        &self,
        edges: &[EdgeId],
        endpoint: impl Fn(&MultiEdge<E>) -> NodeId,
    ) -> Vec<NodeId> {
        let mut seen = Vec::new();
        for &e in edges {
            if let Some(edge) = self.edges[e.index()].as_ref() {
                let n = endpoint(edge);
                if !seen.contains(&n) {
                    seen.push(n);
                }
            }
        }
        seen
    }

    fn insert_edge(&mut self, source: NodeId, target: NodeId, value: Option<E>) -> Result<EdgeId> {
        self.check_node(source)?;
        self.check_node(target)?;
        let e = EdgeId::new(self.edges.len());
        self.edges.push(Some(MultiEdge {
            source,
            target,
            value,
        }));
        if let Some(slot) = self.nodes[source.index()].as_mut() {
            slot.outgoing.push(e);
        }
        if let Some(slot) = self.nodes[target.index()].as_mut() {
            slot.incoming.push(e);
        }
        self.live_edges += 1;
        Ok(e)
    }

    /// Removes an already-taken edge from its endpoints' adjacency lists.
    fn unhook(&mut self, e: EdgeId, source: NodeId, target: NodeId) {
        if let Some(slot) = self.nodes[source.index()].as_mut() {
            slot.outgoing.retain(|x| *x != e);
        }
        if let Some(slot) = self.nodes[target.index()].as_mut() {
            slot.incoming.retain(|x| *x != e);
        }
    }
}

impl<V, E> Default for MultiGraph<V, E> {
    fn default() -> Self {
        MultiGraph::new()
    }
}

impl<V, E> GraphView for MultiGraph<V, E> {
    type Vertex = NodeId;

    fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes()
    }

    fn outgoing(&self, vertex: &NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing(*vertex).unwrap_or_default().into_iter()
    }

    fn incoming(&self, vertex: &NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incoming(*vertex).unwrap_or_default().into_iter()
    }

    fn contains(&self, vertex: &NodeId) -> bool {
        self.node_slot(*vertex).is_some()
    }

    fn vertex_count(&self) -> usize {
        self.live_nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_never_deduplicates() {
        let mut graph: MultiGraph<&str, ()> = MultiGraph::new();
        let a = graph.add("same");
        let b = graph.add("same");

        assert_ne!(a, b);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.value(a).unwrap(), &"same");
        assert_eq!(graph.value(b).unwrap(), &"same");
    }

    #[test]
    fn test_parallel_edges_accumulate() {
        let mut graph: MultiGraph<&str, u32> = MultiGraph::new();
        let a = graph.add("a");
        let b = graph.add("b");

        let e1 = graph.connect(a, b, 1).unwrap();
        let e2 = graph.connect(a, b, 2).unwrap();
        let e3 = graph.connect_unlabeled(a, b).unwrap();

        assert_ne!(e1, e2);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edges_between(a, b).unwrap(), vec![&1, &2]);
        assert_eq!(
            graph.edge_handles_between(a, b).unwrap(),
            vec![e1, e2, e3]
        );

        // parallel edges collapse in the neighbor set
        assert_eq!(graph.outgoing(a).unwrap(), vec![b]);
        assert_eq!(graph.incoming(b).unwrap(), vec![a]);
        assert_eq!(graph.outgoing_edges(a).unwrap().count(), 3);
    }

    #[test]
    fn test_disconnect_removes_all_parallel_edges() {
        let mut graph: MultiGraph<&str, u32> = MultiGraph::new();
        let a = graph.add("a");
        let b = graph.add("b");
        graph.connect(a, b, 1).unwrap();
        graph.connect(a, b, 2).unwrap();
        graph.connect_unlabeled(a, b).unwrap();
        let back = graph.connect(b, a, 9).unwrap();

        assert_eq!(graph.disconnect(a, b).unwrap(), vec![Some(1), Some(2), None]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges_between(b, a).unwrap(), vec![&9]);
        assert_eq!(graph.edge_value(back).unwrap(), Some(&9));

        // nothing left to disconnect
        assert_eq!(graph.disconnect(a, b).unwrap(), Vec::new());
    }

    #[test]
    fn test_set_edge_value_targets_one_edge() {
        let mut graph: MultiGraph<&str, u32> = MultiGraph::new();
        let a = graph.add("a");
        let b = graph.add("b");
        let e1 = graph.connect(a, b, 1).unwrap();
        let e2 = graph.connect(a, b, 2).unwrap();

        assert_eq!(graph.set_edge_value(e1, Some(10)).unwrap(), Some(1));
        assert_eq!(graph.edge_value(e1).unwrap(), Some(&10));
        assert_eq!(graph.edge_value(e2).unwrap(), Some(&2));

        assert_eq!(graph.set_edge_value(e2, None).unwrap(), Some(2));
        assert_eq!(graph.edge_value(e2).unwrap(), None);
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        let mut graph: MultiGraph<&str, u32> = MultiGraph::new();
        let a = graph.add("a");
        let b = graph.add("b");
        let c = graph.add("c");
        let ab = graph.connect(a, b, 1).unwrap();
        let cb = graph.connect(c, b, 2).unwrap();
        let bc = graph.connect(b, c, 3).unwrap();

        assert!(graph.remove(b));
        assert!(!graph.remove(b)); // idempotent
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);

        assert_eq!(graph.value(b), Err(Error::StaleNode(b)));
        for e in [ab, cb, bc] {
            assert_eq!(graph.edge_value(e), Err(Error::StaleEdge(e)));
        }
        assert_eq!(graph.outgoing(a).unwrap(), Vec::new());
        assert_eq!(graph.incoming(c).unwrap(), Vec::new());
    }

    #[test]
    fn test_self_loop() {
        let mut graph: MultiGraph<&str, u32> = MultiGraph::new();
        let a = graph.add("a");
        graph.connect(a, a, 1).unwrap();
        graph.connect(a, a, 2).unwrap();

        assert_eq!(graph.edges_between(a, a).unwrap(), vec![&1, &2]);
        assert_eq!(graph.outgoing(a).unwrap(), vec![a]);

        assert!(graph.remove(a));
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_stale_node_is_checked_everywhere() {
        let mut graph: MultiGraph<&str, u32> = MultiGraph::new();
        let a = graph.add("a");
        let b = graph.add("b");
        graph.remove(a);

        assert_eq!(graph.connect(a, b, 1), Err(Error::StaleNode(a)));
        assert_eq!(graph.connect(b, a, 1), Err(Error::StaleNode(a)));
        assert_eq!(graph.connect_unlabeled(a, b), Err(Error::StaleNode(a)));
        assert!(graph.disconnect(a, b).is_err());
        assert!(graph.edges_between(a, b).is_err());
        assert!(graph.outgoing(a).is_err());
        assert!(graph.incoming(a).is_err());
        assert!(graph.outgoing_edges(a).is_err());

        // the surviving node still works
        assert_eq!(graph.value(b), Ok(&"b"));
        assert_eq!(graph.outgoing(b).unwrap(), Vec::new());
    }

    #[test]
    fn test_nodes_iteration_skips_removed() {
        let mut graph: MultiGraph<u8, ()> = MultiGraph::new();
        let a = graph.add(1);
        let b = graph.add(2);
        let c = graph.add(3);
        graph.remove(b);

        let live: Vec<NodeId> = graph.nodes().collect();
        assert_eq!(live, vec![a, c]);
    }
}
