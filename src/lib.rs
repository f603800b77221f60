// Copyright 2025 the graphkit contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]

//! # graphkit
//!
//! A small, self-contained directed graph library: generic graph abstract
//! data types, strongly connected components with a topological ordering
//! guarantee, partition-based graph condensation, and a configurable
//! tree-traversal engine.
//!
//! ## Features
//!
//! - **Three graph contracts** - payload-keyed single-edge ([`Graph`]),
//!   handle-based single-edge ([`NodeGraph`]), and identity-keyed with
//!   parallel edges ([`MultiGraph`])
//! - **Total query semantics** - unknown vertices and missing edges resolve
//!   to empty results, never errors, keeping incremental construction free
//!   of existence checks
//! - **Checked handles** - arena slots are tombstoned and never reused, so
//!   a stale [`NodeId`]/[`EdgeId`] is a [`Result`] error instead of a
//!   dangling reference
//! - **Ordered components** - [`strongly_connected_components`] returns the
//!   condensation DAG's topological order, sources before sinks
//! - **Induced-subgraph condensation** - [`condense`] collapses each
//!   partition cell into a `Graph` vertex of the condensation
//! - **Configurable traversal** - DFS/BFS over any adjacency source with
//!   depth limiting, start exclusion, and pre/post-order control
//!
//! ## Quick Start
//!
//! Add `graphkit` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! graphkit = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the
//! prelude:
//!
//! ```rust
//! use graphkit::prelude::*;
//!
//! let mut graph: Graph<&str, u32> = Graph::new();
//! graph.connect("parser", "lexer", 1);
//! graph.connect("compiler", "parser", 2);
//!
//! let order = strongly_connected_components(&graph);
//! assert_eq!(order.first().map(Vec::as_slice), Some(&["compiler"][..]));
//! ```
//!
//! ### Collapsing Cycles
//!
//! ```rust
//! use graphkit::{condense, strongly_connected_components, Graph};
//!
//! // two modules that depend on each other, plus a leaf
//! let mut deps: Graph<&str, ()> = Graph::new();
//! deps.connect("a", "b", ());
//! deps.connect("b", "a", ());
//! deps.connect("b", "leaf", ());
//!
//! let components = strongly_connected_components(&deps);
//! let condensation = condense(&deps, &components);
//!
//! // the a <-> b cycle collapsed into a single vertex
//! assert_eq!(condensation.vertex_count(), 2);
//! assert_eq!(condensation.edge_count(), 1);
//! ```
//!
//! ### Ordered Traversal
//!
//! ```rust
//! use graphkit::{depth_first, MapGraph, Sequence, TraversalConfig};
//!
//! let tree: MapGraph<char> = [('a', vec!['b', 'c']), ('b', vec!['d'])]
//!     .into_iter()
//!     .collect();
//!
//! let mut order = Sequence::new();
//! depth_first(&tree, &'a', &TraversalConfig::default(), &mut order);
//! assert_eq!(order.items(), &['a', 'b', 'd', 'c']);
//! ```
//!
//! ## Architecture
//!
//! `graphkit` is organized into two layers:
//!
//! - [`graph`] - the data structures: [`Graph`], [`NodeGraph`],
//!   [`MultiGraph`], the shared read-only [`GraphView`] contract, and the
//!   [`NodeId`]/[`EdgeId`] handle types
//! - [`graph::algorithms`] - strongly connected components, condensation,
//!   and the traversal engine
//!
//! Everything commonly needed is re-exported at the crate root and through
//! [`prelude`].
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T, Error>`](Result). The only
//! runtime errors are stale handles; see [`Error`] for the contract:
//!
//! ```rust
//! use graphkit::{Error, MultiGraph};
//!
//! let mut graph: MultiGraph<&str, ()> = MultiGraph::new();
//! let a = graph.add("a");
//! let b = graph.add("b");
//! graph.remove(a);
//!
//! match graph.connect(a, b, ()) {
//!     Err(Error::StaleNode(dead)) => assert_eq!(dead, a),
//!     other => panic!("expected a stale handle error, got {other:?}"),
//! }
//! ```
//!
//! ## Concurrency
//!
//! All types are plain in-memory data structures designed for
//! single-threaded, synchronous use: mutation takes `&mut self`, queries and
//! algorithms take `&self`, and the borrow checker enforces the
//! one-writer/many-readers discipline. No operation blocks or performs I/O.

mod error;
pub mod graph;
pub mod prelude;

/// `graphkit` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is
/// always [`Error`]. This is used consistently throughout the crate for all
/// fallible operations.
///
/// # Examples
///
/// ```rust
/// use graphkit::{MultiGraph, NodeId, Result};
///
/// fn biggest_fanout(graph: &MultiGraph<&str, ()>, nodes: &[NodeId]) -> Result<usize> {
///     let mut best = 0;
///     for &n in nodes {
///         best = best.max(graph.outgoing_edges(n)?.count());
///     }
///     Ok(best)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `graphkit` Error type
///
/// The crate-wide error enum. The only failure mode is using a stale node
/// or edge handle; see the variants for the full contract.
pub use error::Error;

pub use graph::algorithms::{
    breadth_first, condense, depth_first, strongly_connected_components, Counter, Flow, MapGraph,
    Sequence, Successors, TraversalCollector, TraversalConfig,
};
pub use graph::{EdgeId, Graph, GraphView, MultiGraph, NodeGraph, NodeId};
