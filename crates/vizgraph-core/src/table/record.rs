//! The record-table collaborator contract.

use serde_json::Value;

/// A per-item record table bound to one side of a graph (node rows or edge
/// rows).
///
/// The table owns field values, visual attributes, layout payloads, and
/// rendering handles; the graph core holds none of that data and reaches it
/// only through this trait. A table presents a *live view*: the subset of
/// storage rows that survive its current filtering, addressed by dense
/// positions `0..live_count()`. Row order is creation order and lines up
/// with the graph's arena indices.
///
/// All accessor methods are keyed by live-view position; implementations map
/// to storage rows internally. Calls are synchronous and must not have side
/// effects beyond the table's own state.
pub trait RecordTable {
    /// Rendering handle associated with a row.
    type Graphic;

    /// Style/config sub-model scoped to a row, for hierarchical option
    /// resolution.
    type ItemModel;

    /// Total number of storage rows, filtered or not.
    fn storage_count(&self) -> usize;

    /// Number of rows in the current live view.
    fn live_count(&self) -> usize;

    /// Maps a live-view position to its underlying storage row index.
    ///
    /// Returns `None` when `position` is outside the live view.
    fn storage_index(&self, position: usize) -> Option<usize>;

    /// Narrows the live view to rows whose *storage index* satisfies `keep`,
    /// preserving the current live order.
    fn filter_self(&mut self, keep: &mut dyn FnMut(usize) -> bool);

    /// Returns the parsed value of a named field.
    fn parsed_value(&self, position: usize, field: &str) -> Option<Value>;

    /// Returns a named visual attribute.
    fn visual(&self, position: usize, key: &str) -> Option<Value>;

    /// Sets a named visual attribute. Out-of-view positions are ignored.
    fn set_visual(&mut self, position: usize, key: &str, value: Value);

    /// Returns the layout payload assigned by a layout algorithm.
    fn layout(&self, position: usize) -> Option<Value>;

    /// Sets the layout payload.
    ///
    /// With `merge = true` the payload's top-level keys are merged into the
    /// existing payload; otherwise the payload is replaced wholesale.
    /// Out-of-view positions are ignored.
    fn set_layout(&mut self, position: usize, payload: Value, merge: bool);

    /// Returns the rendering handle associated with a row.
    fn graphic(&self, position: usize) -> Option<&Self::Graphic>;

    /// Returns the style/config sub-model scoped to a row.
    fn item_model(&self, position: usize) -> Option<Self::ItemModel>;
}
