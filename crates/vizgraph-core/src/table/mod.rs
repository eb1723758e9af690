//! The record-table collaborator contract and entity accessor surface.
//!
//! - [`RecordTable`] — what an external per-item data table must expose
//! - [`DataItem`] / [`DataItemAccess`] — the accessor surface shared by
//!   nodes and edges, delegating to a bound table
//! - [`MemoryTable`] — in-memory reference implementation

mod accessors;
mod memory;
mod record;

#[cfg(test)]
mod accessors_tests;

pub use accessors::{DataItem, DataItemAccess};
pub use memory::{MemoryTable, RecordRow};
pub use record::RecordTable;
