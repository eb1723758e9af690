//! # vizgraph-core
//!
//! A general-purpose node/edge graph container backing graph-based
//! visualizations (force-directed diagrams, trees, flow charts).
//!
//! The container owns topology only — nodes, edges, adjacency, and the id
//! and edge-pair indices. Per-item values, visual styling, and layout
//! coordinates live in external record tables reached through the
//! [`RecordTable`] contract, and the topology stays synchronized with the
//! tables' filtered live views via [`Graph::synchronize`].
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use vizgraph_core::{DataItemAccess, Direction, Graph, MemoryTable, RecordRow};
//!
//! // Topology: a directed graph with two nodes and one edge.
//! let mut graph = Graph::new(true);
//! let a = graph.add_node("a", Some(0)).unwrap();
//! let b = graph.add_node("b", Some(1)).unwrap();
//! graph.add_edge(a, b, Some(0)).unwrap();
//!
//! // Record layer: one row per node, one row per edge.
//! let mut node_table: MemoryTable = MemoryTable::new();
//! node_table.push_row(RecordRow::new().with_field("value", json!(3.0)));
//! node_table.push_row(RecordRow::new().with_field("value", json!(5.0)));
//! let mut edge_table: MemoryTable = MemoryTable::new();
//! edge_table.push_row(RecordRow::new().with_field("edge_value", json!(1.0)));
//!
//! graph.synchronize(&node_table, &mut edge_table);
//!
//! // Per-item values are delegated to the bound table.
//! let node = graph.node(a).unwrap();
//! assert_eq!(node.value(&node_table), Some(json!(3.0)));
//!
//! // Breadth-first traversal over outgoing adjacency.
//! let mut order = Vec::new();
//! graph.breadth_first("a", Direction::Outgoing, |node, _from| {
//!     order.push(node);
//!     false
//! });
//! assert_eq!(order, vec![a, b]);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod graph;
pub mod table;

pub use error::{Error, Result};
pub use graph::{Direction, Edge, EdgeIx, Graph, Node, NodeIx, NodeRef};
pub use table::{DataItem, DataItemAccess, MemoryTable, RecordRow, RecordTable};
