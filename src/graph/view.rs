//! Minimal read-only contract shared by all graph types.
//!
//! [`Graph`](crate::Graph), [`NodeGraph`](crate::NodeGraph), and
//! [`MultiGraph`](crate::MultiGraph) have deliberately different mutation
//! contracts (overwrite-on-reconnect vs. ensure-connected vs. parallel
//! edges), so they are separate concrete types rather than one hierarchy.
//! What they share is the read side: a vertex set and adjacency queries.
//! [`GraphView`] captures exactly that, and is the seam the algorithms in
//! [`algorithms`](crate::graph::algorithms) are generic over.

use std::hash::Hash;

/// Read-only adjacency view of a directed graph.
///
/// The vertex representation differs per implementation: payload-keyed
/// graphs expose their payloads, the identity-keyed
/// [`MultiGraph`](crate::MultiGraph) exposes its
/// [`NodeId`](crate::NodeId) handles. Algorithms stay agnostic by working
/// with the associated `Vertex` type.
///
/// # Examples
///
/// ```rust
/// use graphkit::{Graph, GraphView};
///
/// fn degree_sum<G: GraphView>(graph: &G) -> usize {
///     graph
///         .vertices()
///         .map(|v| GraphView::outgoing(graph, &v).count())
///         .sum()
/// }
///
/// let mut graph: Graph<&str, ()> = Graph::new();
/// graph.connect("a", "b", ());
/// graph.connect("b", "c", ());
/// assert_eq!(degree_sum(&graph), 2);
/// ```
pub trait GraphView {
    /// The vertex representation this view hands out.
    type Vertex: Clone + Eq + Hash;

    /// Iterator over all vertices, in no particular order.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Iterator over the direct successors of `vertex`; empty for an unknown
    /// vertex. Parallel edges do not produce duplicate successors.
    fn outgoing(&self, vertex: &Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Iterator over the direct predecessors of `vertex`; empty for an
    /// unknown vertex. Parallel edges do not produce duplicate predecessors.
    fn incoming(&self, vertex: &Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Returns `true` if `vertex` is part of this graph.
    fn contains(&self, vertex: &Self::Vertex) -> bool;

    /// Number of vertices in the graph.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}
