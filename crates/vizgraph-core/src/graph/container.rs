//! The [`Graph`] container: arenas, indices, mutation, and lookup.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::table::RecordTable;

use super::types::{Edge, EdgeIx, Node, NodeIx, NodeRef};

/// A node/edge topology container backing a graph visualization.
///
/// The graph owns its node and edge arenas; creation order is the canonical
/// positional index space and lines up with the row order of the bound record
/// tables. Entities are never deleted — removal is expressed through an
/// entity's live position becoming `None` during [`synchronize`].
///
/// Mutating operations never panic and never leave the graph half-updated:
/// a rejected operation (duplicate id, unresolved endpoint, duplicate edge)
/// is a no-op that returns `None`. The `try_*` variants return the rejection
/// as an [`Error`] instead.
///
/// [`synchronize`]: Graph::synchronize
#[derive(Debug, Clone, Default)]
pub struct Graph {
    directed: bool,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: FxHashMap<String, NodeIx>,
    edge_index: FxHashMap<(NodeIx, NodeIx), EdgeIx>,
}

impl Graph {
    /// Creates an empty graph.
    ///
    /// `directed` is fixed for the graph's lifetime; it decides whether
    /// in/out adjacency is maintained and whether edge lookup is
    /// direction-sensitive.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Self::default()
        }
    }

    /// Creates an empty graph with pre-allocated arenas.
    #[must_use]
    pub fn with_capacity(directed: bool, nodes: usize, edges: usize) -> Self {
        Self {
            directed,
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            node_index: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            edge_index: FxHashMap::with_capacity_and_hasher(edges, Default::default()),
        }
    }

    /// Returns whether this graph is directed.
    #[must_use]
    pub fn directed(&self) -> bool {
        self.directed
    }

    // ── Node creation ──────────────────────────────────────────────────

    /// Adds a node, returning its handle.
    ///
    /// `seed_position` seeds the node's live position (`None` = not yet
    /// represented in the live record view). A duplicate id is a no-op:
    /// the rejection is logged at debug level and `None` is returned.
    pub fn add_node(&mut self, id: impl Into<String>, seed_position: Option<usize>) -> Option<NodeIx> {
        match self.try_add_node(id, seed_position) {
            Ok(ix) => Some(ix),
            Err(err) => {
                tracing::debug!(error = %err, "add_node rejected");
                None
            }
        }
    }

    /// Adds a node whose id is derived from its seed position.
    ///
    /// Covers callers that have no id of their own: the id is the decimal
    /// form of `seed_position`.
    pub fn add_anonymous_node(&mut self, seed_position: usize) -> Option<NodeIx> {
        self.add_node(seed_position.to_string(), Some(seed_position))
    }

    /// Adds a node, reporting a duplicate id as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNodeId`] if a node with this id already
    /// exists; the graph is left unchanged.
    pub fn try_add_node(
        &mut self,
        id: impl Into<String>,
        seed_position: Option<usize>,
    ) -> Result<NodeIx> {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return Err(Error::DuplicateNodeId(id));
        }
        let ix = NodeIx::new(self.nodes.len());
        self.node_index.insert(id.clone(), ix);
        self.nodes.push(Node::new(id, seed_position));
        Ok(ix)
    }

    // ── Edge creation ──────────────────────────────────────────────────

    /// Adds an edge between two endpoints, returning its handle.
    ///
    /// Each endpoint may be a [`NodeIx`], a node id, or a creation-order
    /// ordinal (see [`NodeRef`]). An unresolved endpoint or an already
    /// existing edge (direction-sensitive when directed, either order when
    /// undirected) is a no-op: logged at debug level, returns `None`.
    pub fn add_edge<'a>(
        &mut self,
        n1: impl Into<NodeRef<'a>>,
        n2: impl Into<NodeRef<'a>>,
        seed_position: Option<usize>,
    ) -> Option<EdgeIx> {
        match self.try_add_edge(n1, n2, seed_position) {
            Ok(ix) => Some(ix),
            Err(err) => {
                tracing::debug!(error = %err, "add_edge rejected");
                None
            }
        }
    }

    /// Adds an edge, reporting rejections as errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedEndpoint`] if either endpoint does not
    /// resolve to a node of this graph, or [`Error::DuplicateEdge`] if an
    /// edge already exists for the pair. The graph is left unchanged in
    /// both cases.
    pub fn try_add_edge<'a>(
        &mut self,
        n1: impl Into<NodeRef<'a>>,
        n2: impl Into<NodeRef<'a>>,
        seed_position: Option<usize>,
    ) -> Result<EdgeIx> {
        let n1 = n1.into();
        let n2 = n2.into();
        let ix1 = self
            .resolve(n1)
            .ok_or_else(|| Error::UnresolvedEndpoint(n1.to_string()))?;
        let ix2 = self
            .resolve(n2)
            .ok_or_else(|| Error::UnresolvedEndpoint(n2.to_string()))?;

        if self.lookup_edge(ix1, ix2).is_some() {
            return Err(Error::DuplicateEdge(
                self.nodes[ix1.as_usize()].id().to_string(),
                self.nodes[ix2.as_usize()].id().to_string(),
            ));
        }

        let edge_ix = EdgeIx::new(self.edges.len());
        self.edges.push(Edge::new(ix1, ix2, seed_position));
        // The key keeps the insertion-order direction; undirected lookup
        // tries both orderings instead of normalizing here.
        self.edge_index.insert((ix1, ix2), edge_ix);

        if self.directed {
            self.nodes[ix1.as_usize()].push_out_edge(edge_ix);
            self.nodes[ix2.as_usize()].push_in_edge(edge_ix);
        }
        self.nodes[ix1.as_usize()].push_edge(edge_ix);
        if ix1 != ix2 {
            // Self-loop is recorded once.
            self.nodes[ix2.as_usize()].push_edge(edge_ix);
        }

        Ok(edge_ix)
    }

    // ── Lookup ─────────────────────────────────────────────────────────

    /// Resolves a [`NodeRef`] to a node handle.
    #[must_use]
    pub fn resolve(&self, node: NodeRef<'_>) -> Option<NodeIx> {
        match node {
            NodeRef::Index(ix) => {
                if ix.as_usize() < self.nodes.len() {
                    Some(ix)
                } else {
                    None
                }
            }
            NodeRef::Id(id) => self.node_index.get(id).copied(),
            NodeRef::Ordinal(ordinal) => {
                if ordinal < self.nodes.len() {
                    Some(NodeIx::new(ordinal))
                } else {
                    None
                }
            }
        }
    }

    /// Looks up a node handle by id.
    #[must_use]
    pub fn get_node_by_id(&self, id: &str) -> Option<NodeIx> {
        self.node_index.get(id).copied()
    }

    /// Looks up the edge between two endpoints.
    ///
    /// Direction-sensitive when the graph is directed; tries both orderings
    /// when undirected.
    #[must_use]
    pub fn get_edge<'a>(
        &self,
        n1: impl Into<NodeRef<'a>>,
        n2: impl Into<NodeRef<'a>>,
    ) -> Option<EdgeIx> {
        let ix1 = self.resolve(n1.into())?;
        let ix2 = self.resolve(n2.into())?;
        self.lookup_edge(ix1, ix2)
    }

    /// Maps a live-view position back to a node handle through the node
    /// record table.
    #[must_use]
    pub fn get_node_by_live_position<T: RecordTable>(
        &self,
        position: usize,
        node_table: &T,
    ) -> Option<NodeIx> {
        let storage = node_table.storage_index(position)?;
        if storage < self.nodes.len() {
            Some(NodeIx::new(storage))
        } else {
            None
        }
    }

    /// Maps a live-view position back to an edge handle through the edge
    /// record table.
    #[must_use]
    pub fn get_edge_by_live_position<T: RecordTable>(
        &self,
        position: usize,
        edge_table: &T,
    ) -> Option<EdgeIx> {
        let storage = edge_table.storage_index(position)?;
        if storage < self.edges.len() {
            Some(EdgeIx::new(storage))
        } else {
            None
        }
    }

    /// Returns a node by handle.
    #[must_use]
    pub fn node(&self, ix: NodeIx) -> Option<&Node> {
        self.nodes.get(ix.as_usize())
    }

    /// Returns an edge by handle.
    #[must_use]
    pub fn edge(&self, ix: EdgeIx) -> Option<&Edge> {
        self.edges.get(ix.as_usize())
    }

    /// All nodes in creation order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in creation order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ── Live iteration ─────────────────────────────────────────────────

    /// Visits nodes in storage order, skipping any not represented in the
    /// live record view.
    pub fn live_nodes(&self) -> impl Iterator<Item = (NodeIx, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.live_position().is_some())
            .map(|(i, node)| (NodeIx::new(i), node))
    }

    /// Visits edges in storage order, skipping any edge that is not live or
    /// whose endpoints are not both live.
    ///
    /// The endpoint check defends against a stale edge synchronized before
    /// its endpoint was filtered out.
    pub fn live_edges(&self) -> impl Iterator<Item = (EdgeIx, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| {
                edge.live_position().is_some()
                    && self.nodes[edge.node1().as_usize()].live_position().is_some()
                    && self.nodes[edge.node2().as_usize()].live_position().is_some()
            })
            .map(|(i, edge)| (EdgeIx::new(i), edge))
    }

    // ── Internal ───────────────────────────────────────────────────────

    pub(crate) fn lookup_edge(&self, ix1: NodeIx, ix2: NodeIx) -> Option<EdgeIx> {
        match self.edge_index.get(&(ix1, ix2)) {
            Some(&edge) => Some(edge),
            None if !self.directed => self.edge_index.get(&(ix2, ix1)).copied(),
            None => None,
        }
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub(crate) fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }
}
