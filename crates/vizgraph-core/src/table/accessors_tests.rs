//! Tests for the shared node/edge accessor surface.

use serde_json::json;

use crate::table::{DataItem, DataItemAccess, MemoryTable, RecordRow, RecordTable};
use crate::{Edge, Graph, Node};

/// Directed a -> b graph with a bound node table; node "a" is live at
/// position 0, node "b" has no bound row.
fn build_bound_setup() -> (Graph, MemoryTable<String>) {
    let mut graph = Graph::new(true);
    graph.add_node("a", Some(0)).unwrap();
    graph.add_node("b", None).unwrap();
    graph.add_edge("a", "b", Some(0)).unwrap();

    let mut node_table: MemoryTable<String> = MemoryTable::new();
    node_table.push_row(
        RecordRow::new()
            .with_field("value", json!(42))
            .with_field("weight", json!(1.5))
            .with_visual("color", json!("#c23531"))
            .with_layout(json!({"x": 10.0, "y": 20.0}))
            .with_graphic("circle#0".to_string())
            .with_model(json!({"symbolSize": 8})),
    );
    (graph, node_table)
}

#[test]
fn test_default_value_fields() {
    assert_eq!(<Node as DataItem>::value_field(), "value");
    assert_eq!(<Edge as DataItem>::value_field(), "edge_value");
}

#[test]
fn test_bound_node_reads_value_and_fields() {
    let (graph, table) = build_bound_setup();
    let a = graph.node(graph.get_node_by_id("a").unwrap()).unwrap();

    assert_eq!(a.value(&table), Some(json!(42)));
    assert_eq!(a.field_value(&table, "weight"), Some(json!(1.5)));
    assert_eq!(a.field_value(&table, "missing"), None);
}

#[test]
fn test_bound_node_visual_roundtrip() {
    let (graph, mut table) = build_bound_setup();
    let a_ix = graph.get_node_by_id("a").unwrap();

    let a = graph.node(a_ix).unwrap();
    assert_eq!(a.visual(&table, "color"), Some(json!("#c23531")));

    a.set_visual(&mut table, "opacity", json!(0.5));
    assert_eq!(a.visual(&table, "opacity"), Some(json!(0.5)));
}

#[test]
fn test_bound_node_layout_merge_and_replace() {
    let (graph, mut table) = build_bound_setup();
    let a = graph.node(graph.get_node_by_id("a").unwrap()).unwrap();

    a.set_layout(&mut table, json!({"x": 99.0}), true);
    assert_eq!(a.layout(&table), Some(json!({"x": 99.0, "y": 20.0})));

    a.set_layout(&mut table, json!({"x": 1.0}), false);
    assert_eq!(a.layout(&table), Some(json!({"x": 1.0})));
}

#[test]
fn test_bound_node_graphic_and_model() {
    let (graph, table) = build_bound_setup();
    let a = graph.node(graph.get_node_by_id("a").unwrap()).unwrap();

    assert_eq!(a.graphic(&table), Some(&"circle#0".to_string()));
    assert_eq!(a.item_model(&table), Some(json!({"symbolSize": 8})));
}

#[test]
fn test_storage_index_maps_through_view() {
    let (graph, mut table) = build_bound_setup();
    table.push_row(RecordRow::new());
    // Reorder the view: node "a" (live position 0) now maps to storage 1.
    table.set_live([1, 0]);

    let a = graph.node(graph.get_node_by_id("a").unwrap()).unwrap();
    assert_eq!(a.storage_index(&table), Some(1));
}

#[test]
fn test_unbound_node_reads_nothing() {
    let (graph, table) = build_bound_setup();
    let b = graph.node(graph.get_node_by_id("b").unwrap()).unwrap();

    assert_eq!(b.position(), None);
    assert_eq!(b.value(&table), None);
    assert_eq!(b.visual(&table, "color"), None);
    assert_eq!(b.layout(&table), None);
    assert!(b.graphic(&table).is_none());
    assert_eq!(b.storage_index(&table), None);
    assert_eq!(b.item_model(&table), None);
}

#[test]
fn test_unbound_node_writes_are_noops() {
    let (graph, mut table) = build_bound_setup();
    let b = graph.node(graph.get_node_by_id("b").unwrap()).unwrap();

    b.set_visual(&mut table, "color", json!("#000"));
    b.set_layout(&mut table, json!({"x": 0.0}), false);

    // The only row in the table is untouched.
    assert_eq!(table.visual(0, "color"), Some(json!("#c23531")));
    assert_eq!(table.layout(0), Some(json!({"x": 10.0, "y": 20.0})));
}

#[test]
fn test_edge_accessors_delegate_to_edge_table() {
    let (graph, _) = build_bound_setup();
    let mut edge_table: MemoryTable<String> = MemoryTable::new();
    edge_table.push_row(
        RecordRow::new()
            .with_field("edge_value", json!(7))
            .with_graphic("line#0".to_string()),
    );

    let e = graph.edge(graph.get_edge("a", "b").unwrap()).unwrap();
    assert_eq!(e.value(&edge_table), Some(json!(7)));
    assert_eq!(e.graphic(&edge_table), Some(&"line#0".to_string()));
    assert_eq!(e.storage_index(&edge_table), Some(0));
}
