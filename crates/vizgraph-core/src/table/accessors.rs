//! Shared record-table accessor surface for graph entities.
//!
//! [`Node`] and [`Edge`] expose the same delegation surface over their
//! owning graph's bound record table (node table for nodes, edge table for
//! edges). The surface is split into [`DataItem`] — what an entity must
//! provide — and [`DataItemAccess`], blanket-implemented on top of it.

use serde_json::Value;

use crate::graph::{Edge, Node};

use super::record::RecordTable;

/// An entity bound (or bindable) to a record-table row.
pub trait DataItem {
    /// The entity's position in the table's live view, or `None` when it has
    /// no bound row.
    fn position(&self) -> Option<usize>;

    /// The field read by [`DataItemAccess::value`] when no field name is
    /// given.
    fn value_field() -> &'static str;
}

impl DataItem for Node {
    fn position(&self) -> Option<usize> {
        self.live_position()
    }

    fn value_field() -> &'static str {
        "value"
    }
}

impl DataItem for Edge {
    fn position(&self) -> Option<usize> {
        self.live_position()
    }

    fn value_field() -> &'static str {
        "edge_value"
    }
}

/// Record-table delegations shared by nodes and edges.
///
/// Every method is a pure delegation keyed by the entity's live position:
/// getters return `None` and setters are no-ops when the entity has no
/// bound row.
pub trait DataItemAccess: DataItem {
    /// Returns the entity's default-field value (`"value"` for nodes,
    /// `"edge_value"` for edges).
    fn value<T: RecordTable>(&self, table: &T) -> Option<Value> {
        self.field_value(table, Self::value_field())
    }

    /// Returns a named field's parsed value.
    fn field_value<T: RecordTable>(&self, table: &T, field: &str) -> Option<Value> {
        table.parsed_value(self.position()?, field)
    }

    /// Returns a named visual attribute.
    fn visual<T: RecordTable>(&self, table: &T, key: &str) -> Option<Value> {
        table.visual(self.position()?, key)
    }

    /// Sets a named visual attribute; no-op when unbound.
    fn set_visual<T: RecordTable>(&self, table: &mut T, key: &str, value: Value) {
        if let Some(position) = self.position() {
            table.set_visual(position, key, value);
        }
    }

    /// Returns the layout payload.
    fn layout<T: RecordTable>(&self, table: &T) -> Option<Value> {
        table.layout(self.position()?)
    }

    /// Sets the layout payload, merging top-level keys when `merge` is set;
    /// no-op when unbound.
    fn set_layout<T: RecordTable>(&self, table: &mut T, payload: Value, merge: bool) {
        if let Some(position) = self.position() {
            table.set_layout(position, payload, merge);
        }
    }

    /// Returns the rendering handle for the entity's row.
    fn graphic<'a, T: RecordTable>(&self, table: &'a T) -> Option<&'a T::Graphic> {
        table.graphic(self.position()?)
    }

    /// Returns the entity's underlying storage index in the record table.
    fn storage_index<T: RecordTable>(&self, table: &T) -> Option<usize> {
        table.storage_index(self.position()?)
    }

    /// Returns the style/config sub-model scoped to the entity's row.
    fn item_model<T: RecordTable>(&self, table: &T) -> Option<T::ItemModel> {
        table.item_model(self.position()?)
    }
}

impl<I: DataItem + ?Sized> DataItemAccess for I {}
