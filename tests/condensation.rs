//! Integration tests for the SCC-to-condensation pipeline.
//!
//! These tests exercise the full flow an application would use: build a
//! graph incrementally, compute strongly connected components, feed them
//! into [`condense`], and consume the resulting condensation graph.

use std::collections::HashSet;

use graphkit::prelude::*;

/// A build-system-shaped dependency graph with two cycles:
///
/// ```text
/// app -> core <-> util          core <-> util is one cycle
/// app -> ui   -> core
/// ui  <-> theme                 ui <-> theme is another
/// util -> log
/// ```
fn dependency_graph() -> Graph<&'static str, u32> {
    let mut graph = Graph::new();
    graph.connect("app", "core", 1);
    graph.connect("core", "util", 2);
    graph.connect("util", "core", 3);
    graph.connect("app", "ui", 4);
    graph.connect("ui", "core", 5);
    graph.connect("ui", "theme", 6);
    graph.connect("theme", "ui", 7);
    graph.connect("util", "log", 8);
    graph
}

fn component_index<V: PartialEq>(components: &[Vec<V>], vertex: &V) -> usize {
    components
        .iter()
        .position(|c| c.contains(vertex))
        .expect("vertex missing from components")
}

#[test]
fn test_components_cover_and_partition() {
    let graph = dependency_graph();
    let components = strongly_connected_components(&graph);

    let mut seen: HashSet<&str> = HashSet::new();
    for component in &components {
        for v in component {
            assert!(seen.insert(v), "vertex {v} in two components");
        }
    }
    let all: HashSet<&str> = graph.vertices().copied().collect();
    assert_eq!(seen, all);
}

#[test]
fn test_every_edge_respects_component_order() {
    let graph = dependency_graph();
    let components = strongly_connected_components(&graph);

    for v in graph.vertices() {
        for w in graph.outgoing(v) {
            assert!(
                component_index(&components, v) <= component_index(&components, w),
                "edge {v}->{w} points backwards in the component order"
            );
        }
    }
}

#[test]
fn test_expected_grouping() {
    let graph = dependency_graph();
    let components = strongly_connected_components(&graph);
    assert_eq!(components.len(), 4);

    let group_of = |v: &&str| {
        components[component_index(&components, v)]
            .iter()
            .copied()
            .collect::<HashSet<&str>>()
    };
    assert_eq!(group_of(&"core"), HashSet::from(["core", "util"]));
    assert_eq!(group_of(&"ui"), HashSet::from(["ui", "theme"]));
    assert_eq!(group_of(&"app"), HashSet::from(["app"]));
    assert_eq!(group_of(&"log"), HashSet::from(["log"]));
}

#[test]
fn test_condensation_structure() {
    let graph = dependency_graph();
    let components = strongly_connected_components(&graph);
    let condensation = condense(&graph, &components);

    assert_eq!(condensation.vertex_count(), 4);

    // every condensation edge is backed by at least one crossing edge
    for x in condensation.vertices() {
        for y in condensation.vertices() {
            if condensation.has_edge(x, y) {
                assert_ne!(x, y, "condensation must not contain self-edges");
                let crosses = x.vertices().any(|s| {
                    graph
                        .outgoing(s)
                        .any(|t| y.contains(t))
                });
                assert!(crosses, "condensation edge without a crossing edge");
            }
        }
    }

    // app -> {core,util}, app -> {ui,theme}, {ui,theme} -> {core,util},
    // {core,util} -> log
    assert_eq!(condensation.edge_count(), 4);
}

#[test]
fn test_condensation_is_a_dag() {
    let graph = dependency_graph();
    let components = strongly_connected_components(&graph);
    let condensation = condense(&graph, &components);

    let order = strongly_connected_components(&condensation);
    assert_eq!(order.len(), condensation.vertex_count());
}

#[test]
fn test_induced_subgraphs_keep_internal_edges_only() {
    let graph = dependency_graph();
    let components = strongly_connected_components(&graph);
    let condensation = condense(&graph, &components);

    let cycle = condensation
        .vertices()
        .find(|sub| sub.contains(&"core"))
        .unwrap();
    assert_eq!(cycle.vertex_count(), 2);
    assert_eq!(cycle.edge(&"core", &"util"), Some(&2));
    assert_eq!(cycle.edge(&"util", &"core"), Some(&3));
    // the edge out to "log" is not part of the cell
    assert!(!cycle.contains(&"log"));
    assert_eq!(cycle.edge_count(), 2);
}

#[test]
fn test_trivial_partition_round_trip() {
    let graph = dependency_graph();
    let whole: Vec<&str> = graph.vertices().copied().collect();
    let condensation = condense(&graph, &[whole]);

    assert_eq!(condensation.vertex_count(), 1);
    assert_eq!(condensation.edge_count(), 0);
    assert_eq!(condensation.vertices().next().unwrap(), &graph);
}

#[test]
fn test_empty_graph_pipeline() {
    let graph: Graph<&str, u32> = Graph::new();
    let components = strongly_connected_components(&graph);
    assert!(components.is_empty());

    let condensation = condense(&graph, &components);
    assert!(condensation.is_empty());
}

#[test]
fn test_mutation_then_recompute() {
    let mut graph = dependency_graph();

    // breaking the util -> core back edge splits the {core, util} cycle
    assert_eq!(graph.disconnect(&"util", &"core"), Some(3));
    let components = strongly_connected_components(&graph);
    assert_eq!(components.len(), 5);

    // removing a vertex drops it from the components as well
    graph.remove(&"theme");
    let components = strongly_connected_components(&graph);
    assert!(components.iter().all(|c| !c.contains(&"theme")));
}
