//! Synchronization of the topology against filtered record views.

use crate::table::RecordTable;

use super::container::Graph;

impl Graph {
    /// Re-derives every entity's live position from the bound record tables.
    ///
    /// Call this whenever the tables' filtering changes. Two stages:
    ///
    /// 1. node live positions are reset and reassigned from the node table's
    ///    live sequence (`live_count` + `storage_index`);
    /// 2. the edge table is told to re-filter itself, keeping only rows
    ///    whose two endpoint nodes are live, and edge live positions are
    ///    then reassigned from the updated live sequence.
    ///
    /// The edge table's filtering is driven by structural information only
    /// the graph has, which is why stage 2 pushes the predicate into the
    /// table instead of filtering the in-memory edge arena alone. After this
    /// returns, a live edge always has two live endpoints.
    pub fn synchronize<N, E>(&mut self, node_table: &N, edge_table: &mut E)
    where
        N: RecordTable,
        E: RecordTable,
    {
        for node in self.nodes_mut() {
            node.set_live_position(None);
        }
        for position in 0..node_table.live_count() {
            let Some(storage) = node_table.storage_index(position) else {
                continue;
            };
            if let Some(node) = self.nodes_mut().get_mut(storage) {
                node.set_live_position(Some(position));
            }
        }

        let nodes = self.nodes();
        let edges = self.edges();
        edge_table.filter_self(&mut |storage| {
            edges.get(storage).is_some_and(|edge| {
                nodes[edge.node1().as_usize()].live_position().is_some()
                    && nodes[edge.node2().as_usize()].live_position().is_some()
            })
        });

        for edge in self.edges_mut() {
            edge.set_live_position(None);
        }
        for position in 0..edge_table.live_count() {
            let Some(storage) = edge_table.storage_index(position) else {
                continue;
            };
            if let Some(edge) = self.edges_mut().get_mut(storage) {
                edge.set_live_position(Some(position));
            }
        }
    }
}
