//! Graph condensation over an arbitrary vertex partition.
//!
//! Given a graph and a partition of its vertices — typically the output of
//! [`strongly_connected_components`](crate::strongly_connected_components),
//! but any partition works — [`condense`] collapses each cell to a single
//! vertex. The resulting vertex is the *induced subgraph* of the cell: the
//! cell's vertices plus every original edge with both endpoints inside the
//! cell. Edges of the condensation summarize cross-cell connectivity.
//!
//! With SCC input the condensation is the classic condensation DAG; with an
//! arbitrary partition it may contain cycles, but never self-edges.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::graph::Graph;

/// Builds the condensation of `graph` induced by `cells`.
///
/// Each cell becomes one vertex of the result: the induced subgraph over
/// exactly that cell's vertices. For each ordered pair of distinct cells
/// (X, Y) with at least one original edge crossing from X to Y, the result
/// carries a single edge subgraph(X) -> subgraph(Y); its payload is taken
/// from the **first-encountered** crossing edge, scanning cells in their
/// given order and each vertex's outgoing edges in insertion order. No
/// self-edges are created: intra-cell edges live inside the induced
/// subgraph instead.
///
/// Vertices claimed by multiple cells count for the first cell that lists
/// them; vertices unknown to `graph`, and graph vertices not covered by any
/// cell, are dropped from the result along with their edges.
///
/// # Examples
///
/// ```rust
/// use graphkit::{condense, strongly_connected_components, Graph};
///
/// // a <-> b -> c
/// let mut graph: Graph<&str, u32> = Graph::new();
/// graph.connect("a", "b", 1);
/// graph.connect("b", "a", 2);
/// graph.connect("b", "c", 3);
///
/// let components = strongly_connected_components(&graph);
/// let condensation = condense(&graph, &components);
///
/// assert_eq!(condensation.vertex_count(), 2);
/// assert_eq!(condensation.edge_count(), 1);
///
/// // the {a, b} cell kept its internal cycle
/// let cycle = condensation
///     .vertices()
///     .find(|sub| sub.contains(&"a"))
///     .unwrap();
/// assert_eq!(cycle.edge(&"a", &"b"), Some(&1));
/// assert_eq!(cycle.edge(&"b", &"a"), Some(&2));
/// ```
pub fn condense<V, E>(graph: &Graph<V, E>, cells: &[Vec<V>]) -> Graph<Graph<V, E>, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Clone,
{
    // Which cell owns each vertex; first listing wins.
    let mut cell_of: HashMap<&V, usize> = HashMap::new();
    for (i, cell) in cells.iter().enumerate() {
        for v in cell {
            if graph.contains(v) {
                cell_of.entry(v).or_insert(i);
            }
        }
    }

    let mut subgraphs: Vec<Graph<V, E>> = cells.iter().map(|_| Graph::new()).collect();
    let mut crossings: Vec<(usize, usize, Option<E>)> = Vec::new();
    let mut seen: HashSet<(usize, usize)> = HashSet::new();

    for (x, cell) in cells.iter().enumerate() {
        for v in cell {
            if cell_of.get(v) != Some(&x) {
                continue;
            }
            subgraphs[x].add(v.clone());

            let Some(source) = graph.id_of(v) else {
                continue;
            };
            let Some(slot) = graph.slot(source) else {
                continue;
            };
            for &e in &slot.outgoing {
                let Some(edge) = graph.edge_slot(e) else {
                    continue;
                };
                let Some(target) = graph.value_of(edge.target) else {
                    continue;
                };
                let Some(&y) = cell_of.get(target) else {
                    continue;
                };
                if y == x {
                    subgraphs[x].connect_raw(v.clone(), target.clone(), edge.value.clone());
                } else if seen.insert((x, y)) {
                    crossings.push((x, y, edge.value.clone()));
                }
            }
        }
    }

    let mut condensation: Graph<Graph<V, E>, E> = Graph::new();
    for sub in &subgraphs {
        condensation.add(sub.clone());
    }
    for (x, y, value) in crossings {
        condensation.connect_raw(subgraphs[x].clone(), subgraphs[y].clone(), value);
    }
    condensation
}
