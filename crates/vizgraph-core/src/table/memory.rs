//! In-memory reference implementation of [`RecordTable`].
//!
//! [`MemoryTable`] exists so the graph core can be exercised end-to-end
//! without a real data layer: unit tests, doctests, and embedders without
//! their own record store all use it. It is not an optimized columnar store;
//! rows are plain maps and the live view is a vector of storage indices.

use rustc_hash::FxHashMap;
use serde_json::Value;

use super::record::RecordTable;

/// One storage row of a [`MemoryTable`].
///
/// Built with the `with_*` builder methods:
///
/// ```
/// use serde_json::json;
/// use vizgraph_core::RecordRow;
///
/// let row: RecordRow = RecordRow::new()
///     .with_field("value", json!(42))
///     .with_visual("color", json!("#c23531"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordRow<G = ()> {
    fields: FxHashMap<String, Value>,
    visuals: FxHashMap<String, Value>,
    layout: Option<Value>,
    graphic: Option<G>,
    model: Option<Value>,
}

impl<G> RecordRow<G> {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: FxHashMap::default(),
            visuals: FxHashMap::default(),
            layout: None,
            graphic: None,
            model: None,
        }
    }

    /// Sets a named field value (builder pattern).
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Sets a named visual attribute (builder pattern).
    #[must_use]
    pub fn with_visual(mut self, key: impl Into<String>, value: Value) -> Self {
        self.visuals.insert(key.into(), value);
        self
    }

    /// Sets the layout payload (builder pattern).
    #[must_use]
    pub fn with_layout(mut self, layout: Value) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Attaches a rendering handle (builder pattern).
    #[must_use]
    pub fn with_graphic(mut self, graphic: G) -> Self {
        self.graphic = Some(graphic);
        self
    }

    /// Attaches a style/config sub-model (builder pattern).
    #[must_use]
    pub fn with_model(mut self, model: Value) -> Self {
        self.model = Some(model);
        self
    }
}

/// In-memory [`RecordTable`] keeping rows in insertion order.
///
/// `G` is the rendering-handle type stored per row; tests typically leave it
/// at the `()` default.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable<G = ()> {
    rows: Vec<RecordRow<G>>,
    /// Live view: position -> storage index, in view order.
    live: Vec<usize>,
}

impl<G> MemoryTable<G> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            live: Vec::new(),
        }
    }

    /// Appends a storage row, returning its storage index. The new row joins
    /// the end of the live view.
    pub fn push_row(&mut self, row: RecordRow<G>) -> usize {
        let storage = self.rows.len();
        self.rows.push(row);
        self.live.push(storage);
        storage
    }

    /// Restores the live view to all rows in storage order, undoing any
    /// filtering.
    pub fn reset_filter(&mut self) {
        self.live = (0..self.rows.len()).collect();
    }

    /// Replaces the live view with an explicit position -> storage mapping.
    ///
    /// Storage indices outside the table are dropped. This is how a caller
    /// models an externally reordered/filtered view.
    pub fn set_live(&mut self, live: impl IntoIterator<Item = usize>) {
        let count = self.rows.len();
        self.live = live.into_iter().filter(|&storage| storage < count).collect();
    }

    /// The current live view as storage indices, in view order.
    #[must_use]
    pub fn live_view(&self) -> &[usize] {
        &self.live
    }

    fn row(&self, position: usize) -> Option<&RecordRow<G>> {
        self.rows.get(*self.live.get(position)?)
    }

    fn row_mut(&mut self, position: usize) -> Option<&mut RecordRow<G>> {
        let storage = *self.live.get(position)?;
        self.rows.get_mut(storage)
    }
}

impl<G> RecordTable for MemoryTable<G> {
    type Graphic = G;
    type ItemModel = Value;

    fn storage_count(&self) -> usize {
        self.rows.len()
    }

    fn live_count(&self) -> usize {
        self.live.len()
    }

    fn storage_index(&self, position: usize) -> Option<usize> {
        self.live.get(position).copied()
    }

    fn filter_self(&mut self, keep: &mut dyn FnMut(usize) -> bool) {
        self.live.retain(|&storage| keep(storage));
    }

    fn parsed_value(&self, position: usize, field: &str) -> Option<Value> {
        self.row(position)?.fields.get(field).cloned()
    }

    fn visual(&self, position: usize, key: &str) -> Option<Value> {
        self.row(position)?.visuals.get(key).cloned()
    }

    fn set_visual(&mut self, position: usize, key: &str, value: Value) {
        if let Some(row) = self.row_mut(position) {
            row.visuals.insert(key.to_string(), value);
        }
    }

    fn layout(&self, position: usize) -> Option<Value> {
        self.row(position)?.layout.clone()
    }

    fn set_layout(&mut self, position: usize, payload: Value, merge: bool) {
        let Some(row) = self.row_mut(position) else {
            return;
        };
        if merge {
            match (&mut row.layout, payload) {
                (Some(Value::Object(existing)), Value::Object(incoming)) => {
                    for (key, value) in incoming {
                        existing.insert(key, value);
                    }
                }
                (slot, payload) => *slot = Some(payload),
            }
        } else {
            row.layout = Some(payload);
        }
    }

    fn graphic(&self, position: usize) -> Option<&Self::Graphic> {
        self.row(position)?.graphic.as_ref()
    }

    fn item_model(&self, position: usize) -> Option<Self::ItemModel> {
        self.row(position)?.model.clone()
    }
}
