//! Integration tests for the traversal engine.
//!
//! Exercises the documented visiting orders over [`MapGraph`] sources and
//! over graph adjacency, with every combination of configuration flags an
//! application is likely to use.

use graphkit::prelude::*;

/// The reference tree used throughout:
///
/// ```text
///         a
///       / | \
///      b  c  d
///     /|  |\  |\
///    e f  g h i j
/// ```
fn reference_tree() -> MapGraph<char> {
    [
        ('a', vec!['b', 'c', 'd']),
        ('b', vec!['e', 'f']),
        ('c', vec!['g', 'h']),
        ('d', vec!['i', 'j']),
    ]
    .into_iter()
    .collect()
}

fn run_dfs(tree: &MapGraph<char>, start: char, config: TraversalConfig) -> Vec<char> {
    let mut order = Sequence::new();
    depth_first(tree, &start, &config, &mut order);
    order.into_items()
}

fn run_bfs(tree: &MapGraph<char>, start: char, config: TraversalConfig) -> Vec<char> {
    let mut order = Sequence::new();
    breadth_first(tree, &start, &config, &mut order);
    order.into_items()
}

#[test]
fn test_dfs_pre_order_reference_sequence() {
    let tree = reference_tree();
    assert_eq!(
        run_dfs(&tree, 'a', TraversalConfig::default()),
        vec!['a', 'b', 'e', 'f', 'c', 'g', 'h', 'd', 'i', 'j']
    );
}

#[test]
fn test_dfs_exclude_start_drops_leading_root() {
    let tree = reference_tree();
    let config = TraversalConfig {
        exclude_start: true,
        ..TraversalConfig::default()
    };
    assert_eq!(
        run_dfs(&tree, 'a', config),
        vec!['b', 'e', 'f', 'c', 'g', 'h', 'd', 'i', 'j']
    );
}

#[test]
fn test_dfs_children_only() {
    let tree = reference_tree();
    let config = TraversalConfig {
        exclude_start: true,
        max_depth: Some(1),
        ..TraversalConfig::default()
    };
    assert_eq!(run_dfs(&tree, 'a', config), vec!['b', 'c', 'd']);
}

#[test]
fn test_bfs_level_order_reference_sequence() {
    let tree = reference_tree();
    assert_eq!(
        run_bfs(&tree, 'a', TraversalConfig::default()),
        vec!['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j']
    );
}

#[test]
fn test_post_order_emits_children_first() {
    let tree = reference_tree();
    let config = TraversalConfig {
        post_order: true,
        ..TraversalConfig::default()
    };
    let order = run_dfs(&tree, 'a', config);
    assert_eq!(order, vec!['e', 'f', 'b', 'g', 'h', 'c', 'i', 'j', 'd', 'a']);

    // every parent comes after all of its children
    let pos = |c: char| order.iter().position(|&x| x == c).unwrap();
    for (parent, children) in [('a', "bcd"), ('b', "ef"), ('c', "gh"), ('d', "ij")] {
        for child in children.chars() {
            assert!(pos(child) < pos(parent));
        }
    }
}

#[test]
fn test_subtree_start() {
    let tree = reference_tree();
    assert_eq!(
        run_dfs(&tree, 'b', TraversalConfig::default()),
        vec!['b', 'e', 'f']
    );
    assert_eq!(
        run_bfs(&tree, 'd', TraversalConfig::default()),
        vec!['d', 'i', 'j']
    );
}

#[test]
fn test_leaf_start_is_singleton() {
    let tree = reference_tree();
    assert_eq!(run_dfs(&tree, 'j', TraversalConfig::default()), vec!['j']);
}

#[test]
fn test_depth_zero() {
    let tree = reference_tree();
    let only_root = TraversalConfig {
        max_depth: Some(0),
        ..TraversalConfig::default()
    };
    assert_eq!(run_dfs(&tree, 'a', only_root), vec!['a']);

    let nothing = TraversalConfig {
        max_depth: Some(0),
        exclude_start: true,
        ..TraversalConfig::default()
    };
    assert_eq!(run_dfs(&tree, 'a', nothing), Vec::new());
    assert_eq!(run_bfs(&tree, 'a', nothing), Vec::new());
}

#[test]
fn test_collectors_agree_on_emission_count() {
    let tree = reference_tree();
    let config = TraversalConfig {
        max_depth: Some(1),
        ..TraversalConfig::default()
    };

    let mut sequence = Sequence::new();
    depth_first(&tree, &'a', &config, &mut sequence);

    let mut counter = Counter::new();
    depth_first(&tree, &'a', &config, &mut counter);

    assert_eq!(counter.count(), sequence.len());
    assert_eq!(counter.count(), 4); // a, b, c, d
}

#[test]
fn test_early_exit_stops_mid_walk() {
    struct StopAt(char);
    impl TraversalCollector<char> for StopAt {
        fn visit(&mut self, node: &char) -> Flow {
            if *node == self.0 {
                Flow::Stop
            } else {
                Flow::Continue
            }
        }
    }

    let tree = reference_tree();
    let flow = breadth_first(&tree, &'a', &TraversalConfig::default(), &mut StopAt('c'));
    assert_eq!(flow, Flow::Stop);

    let flow = breadth_first(&tree, &'a', &TraversalConfig::default(), &mut StopAt('z'));
    assert_eq!(flow, Flow::Continue);
}

#[test]
fn test_graph_as_adjacency_source() {
    // graphs expose their outgoing adjacency in edge insertion order
    let mut graph: Graph<&str, u32> = Graph::new();
    graph.connect("root", "mid", 1);
    graph.connect("root", "leaf", 2);
    graph.connect("mid", "deep", 3);

    let mut order = Sequence::new();
    depth_first(&graph, &"root", &TraversalConfig::default(), &mut order);
    assert_eq!(order.items(), &["root", "mid", "deep", "leaf"]);

    // a cyclic graph is walked as an infinite tree; max_depth bounds it
    let mut cyclic: Graph<u8, ()> = Graph::new();
    cyclic.connect(0, 1, ());
    cyclic.connect(1, 0, ());

    let config = TraversalConfig {
        max_depth: Some(2),
        ..TraversalConfig::default()
    };
    let mut order = Sequence::new();
    breadth_first(&cyclic, &0, &config, &mut order);
    assert_eq!(order.items(), &[0, 1, 0]);
}
