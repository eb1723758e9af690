//! Tests for live-view synchronization.

use proptest::prelude::*;

use crate::table::{MemoryTable, RecordRow};
use crate::Graph;

/// Undirected path a - b - c plus matching node/edge tables (one row per
/// entity, everything live).
fn build_synced_setup() -> (Graph, MemoryTable, MemoryTable) {
    let mut graph = Graph::new(false);
    let mut node_table: MemoryTable = MemoryTable::new();
    for id in ["a", "b", "c"] {
        graph.add_node(id, None).unwrap();
        node_table.push_row(RecordRow::new());
    }
    let mut edge_table: MemoryTable = MemoryTable::new();
    graph.add_edge("a", "b", None).unwrap();
    edge_table.push_row(RecordRow::new());
    graph.add_edge("b", "c", None).unwrap();
    edge_table.push_row(RecordRow::new());
    (graph, node_table, edge_table)
}

#[test]
fn test_synchronize_assigns_live_positions_from_view_order() {
    let (mut graph, mut node_table, mut edge_table) = build_synced_setup();
    // Storage index 2 is live-position 0, storage index 0 is live-position 1.
    node_table.set_live([2, 0]);

    graph.synchronize(&node_table, &mut edge_table);

    assert_eq!(graph.nodes()[2].live_position(), Some(0));
    assert_eq!(graph.nodes()[0].live_position(), Some(1));
    assert_eq!(graph.nodes()[1].live_position(), None);
}

#[test]
fn test_synchronize_drops_edges_with_filtered_endpoint() {
    let (mut graph, mut node_table, mut edge_table) = build_synced_setup();
    // Filter node c (storage 2) out of the view.
    node_table.set_live([0, 1]);

    graph.synchronize(&node_table, &mut edge_table);

    // The b-c row was removed from the edge table's live view...
    assert_eq!(edge_table.live_view(), &[0]);
    // ...and the edge arena mirrors it.
    assert_eq!(graph.edges()[0].live_position(), Some(0));
    assert_eq!(graph.edges()[1].live_position(), None);
}

#[test]
fn test_synchronize_full_view_keeps_everything_live() {
    let (mut graph, node_table, mut edge_table) = build_synced_setup();

    graph.synchronize(&node_table, &mut edge_table);

    assert!(graph.nodes().iter().all(|n| n.live_position().is_some()));
    assert!(graph.edges().iter().all(|e| e.live_position().is_some()));
    assert_eq!(graph.live_edges().count(), 2);
}

#[test]
fn test_synchronize_again_after_reset_restores_live_set() {
    let (mut graph, mut node_table, mut edge_table) = build_synced_setup();
    node_table.set_live([0]);
    graph.synchronize(&node_table, &mut edge_table);
    assert_eq!(graph.live_edges().count(), 0);

    node_table.reset_filter();
    edge_table.reset_filter();
    graph.synchronize(&node_table, &mut edge_table);

    assert_eq!(graph.live_nodes().count(), 3);
    assert_eq!(graph.live_edges().count(), 2);
}

#[test]
fn test_synchronize_ignores_out_of_range_storage_rows() {
    let (mut graph, mut node_table, mut edge_table) = build_synced_setup();
    // A table row beyond the arenas must not panic and must not stay live
    // in the edge view (the predicate cannot vouch for it).
    node_table.push_row(RecordRow::new());
    edge_table.push_row(RecordRow::new());

    graph.synchronize(&node_table, &mut edge_table);

    assert_eq!(edge_table.live_view(), &[0, 1]);
    assert_eq!(graph.live_nodes().count(), 3);
}

#[test]
fn test_live_edge_positions_follow_edge_view_order() {
    let (mut graph, mut node_table, mut edge_table) = build_synced_setup();
    node_table.set_live([2, 1]); // only b and c live
    graph.synchronize(&node_table, &mut edge_table);

    // a-b dropped, b-c is the sole live edge at position 0.
    assert_eq!(graph.edges()[1].live_position(), Some(0));
    let live: Vec<usize> = graph
        .live_edges()
        .map(|(ix, _)| ix.as_usize())
        .collect();
    assert_eq!(live, vec![1]);
}

proptest! {
    #[test]
    fn prop_live_edge_always_has_live_endpoints(
        live in proptest::collection::vec(any::<bool>(), 6),
        edges in proptest::collection::vec((0usize..6, 0usize..6), 0..15)
    ) {
        let mut graph = Graph::new(false);
        let mut node_table: MemoryTable = MemoryTable::new();
        for i in 0..6 {
            graph.add_node(i.to_string(), None).unwrap();
            node_table.push_row(RecordRow::new());
        }
        let mut edge_table: MemoryTable = MemoryTable::new();
        for (a, b) in edges {
            if graph.add_edge(a, b, None).is_some() {
                edge_table.push_row(RecordRow::new());
            }
        }
        node_table.set_live(
            live.iter()
                .enumerate()
                .filter(|(_, &keep)| keep)
                .map(|(storage, _)| storage),
        );

        graph.synchronize(&node_table, &mut edge_table);

        for edge in graph.edges() {
            if edge.live_position().is_some() {
                prop_assert!(graph.node(edge.node1()).unwrap().live_position().is_some());
                prop_assert!(graph.node(edge.node2()).unwrap().live_position().is_some());
            }
        }
    }
}
