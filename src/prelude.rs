//! Convenient re-exports of the most commonly used types and traits.
//!
//! Importing the prelude brings the whole everyday API surface into scope
//! with a single `use`:
//!
//! ```rust
//! use graphkit::prelude::*;
//!
//! let mut graph: Graph<&str, u32> = Graph::new();
//! graph.connect("a", "b", 1);
//!
//! let components = strongly_connected_components(&graph);
//! assert_eq!(components.len(), 2);
//! ```

pub use crate::graph::algorithms::{
    breadth_first, condense, depth_first, strongly_connected_components, Counter, Flow, MapGraph,
    Sequence, Successors, TraversalCollector, TraversalConfig,
};
pub use crate::graph::{EdgeId, Graph, GraphView, MultiGraph, NodeGraph, NodeId};
pub use crate::{Error, Result};
