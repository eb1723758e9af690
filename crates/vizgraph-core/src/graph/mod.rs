//! Graph topology: entities, container, traversal, and synchronization.
//!
//! - [`Node`], [`Edge`], the [`NodeIx`]/[`EdgeIx`] arena handles, and the
//!   [`NodeRef`] endpoint reference
//! - [`Graph`] — container, indices, lookup, and live iteration
//! - [`Direction`] + [`Graph::breadth_first`] — traversal
//! - [`Graph::synchronize`] — live-view synchronization

mod container;
mod sync;
mod traversal;
mod types;

#[cfg(test)]
mod sync_tests;

pub use container::Graph;
pub use traversal::Direction;
pub use types::{Edge, EdgeIx, Node, NodeIx, NodeRef};
