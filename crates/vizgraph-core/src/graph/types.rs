//! Core graph entities: arena handles, nodes, edges, and endpoint references.
//!
//! The [`Graph`](crate::Graph) container owns two arenas (nodes and edges);
//! everything outside the container refers to entities through the dense
//! index handles [`NodeIx`] and [`EdgeIx`]. Handle values are stable for the
//! lifetime of the graph — entities are never deleted, they only drop out of
//! the live record view (see [`Graph::synchronize`](crate::Graph::synchronize)).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dense arena index of a node within its owning graph.
///
/// Doubles as the node's storage index in the bound node record table
/// (creation order = row order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIx(usize);

impl NodeIx {
    /// Creates a handle from a raw arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

/// Dense arena index of an edge within its owning graph.
///
/// Doubles as the edge's storage index in the bound edge record table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeIx(usize);

impl EdgeIx {
    /// Creates a handle from a raw arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

/// A graph vertex: identity plus adjacency bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: String,
    live_position: Option<usize>,
    edges: Vec<EdgeIx>,
    in_edges: Vec<EdgeIx>,
    out_edges: Vec<EdgeIx>,
}

impl Node {
    pub(crate) fn new(id: String, live_position: Option<usize>) -> Self {
        Self {
            id,
            live_position,
            edges: Vec::new(),
            in_edges: Vec::new(),
            out_edges: Vec::new(),
        }
    }

    /// Returns the node id, unique within its graph.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the node's position in the live record view, or `None` when
    /// the node is not currently represented (filtered out or never bound).
    #[must_use]
    pub fn live_position(&self) -> Option<usize> {
        self.live_position
    }

    /// Every incident edge, in adjacency-insertion order. A self-loop is
    /// recorded once.
    #[must_use]
    pub fn edges(&self) -> &[EdgeIx] {
        &self.edges
    }

    /// Incoming edges. Populated only when the owning graph is directed.
    #[must_use]
    pub fn in_edges(&self) -> &[EdgeIx] {
        &self.in_edges
    }

    /// Outgoing edges. Populated only when the owning graph is directed.
    #[must_use]
    pub fn out_edges(&self) -> &[EdgeIx] {
        &self.out_edges
    }

    /// Number of incident edges.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn set_live_position(&mut self, position: Option<usize>) {
        self.live_position = position;
    }

    pub(crate) fn push_edge(&mut self, edge: EdgeIx) {
        self.edges.push(edge);
    }

    pub(crate) fn push_in_edge(&mut self, edge: EdgeIx) {
        self.in_edges.push(edge);
    }

    pub(crate) fn push_out_edge(&mut self, edge: EdgeIx) {
        self.out_edges.push(edge);
    }
}

/// A connection between two nodes.
///
/// Directed (`node1` = source, `node2` = target) when the owning graph is
/// directed, an unordered pair otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    node1: NodeIx,
    node2: NodeIx,
    live_position: Option<usize>,
}

impl Edge {
    pub(crate) fn new(node1: NodeIx, node2: NodeIx, live_position: Option<usize>) -> Self {
        Self {
            node1,
            node2,
            live_position,
        }
    }

    /// First endpoint (source when directed).
    #[must_use]
    pub fn node1(&self) -> NodeIx {
        self.node1
    }

    /// Second endpoint (target when directed).
    #[must_use]
    pub fn node2(&self) -> NodeIx {
        self.node2
    }

    /// Returns the edge's position in the live record view, or `None` when
    /// the edge is not currently represented.
    #[must_use]
    pub fn live_position(&self) -> Option<usize> {
        self.live_position
    }

    /// Returns the endpoint opposite to `from`. For a self-loop both
    /// endpoints are the same node.
    #[must_use]
    pub fn other_end(&self, from: NodeIx) -> NodeIx {
        if self.node2 == from {
            self.node1
        } else {
            self.node2
        }
    }

    pub(crate) fn set_live_position(&mut self, position: Option<usize>) {
        self.live_position = position;
    }
}

/// A reference to a node accepted by edge creation, edge lookup, and
/// traversal entry points.
///
/// Converts from a [`NodeIx`] handle, a node id, or a positional index into
/// the creation-order node sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    /// An arena handle obtained from this graph.
    Index(NodeIx),
    /// A node id.
    Id(&'a str),
    /// A position in creation order (`graph.nodes()[ordinal]`).
    Ordinal(usize),
}

impl From<NodeIx> for NodeRef<'_> {
    fn from(index: NodeIx) -> Self {
        NodeRef::Index(index)
    }
}

impl<'a> From<&'a str> for NodeRef<'a> {
    fn from(id: &'a str) -> Self {
        NodeRef::Id(id)
    }
}

impl<'a> From<&'a String> for NodeRef<'a> {
    fn from(id: &'a String) -> Self {
        NodeRef::Id(id)
    }
}

impl From<usize> for NodeRef<'_> {
    fn from(ordinal: usize) -> Self {
        NodeRef::Ordinal(ordinal)
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::Index(ix) => write!(f, "index {}", ix.as_usize()),
            NodeRef::Id(id) => write!(f, "id {id:?}"),
            NodeRef::Ordinal(ordinal) => write!(f, "ordinal {ordinal}"),
        }
    }
}
