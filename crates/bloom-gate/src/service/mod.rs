//! Service Layer
//!
//! Coordinators that sit between callers and an exact store.

pub mod direct_store;
pub mod gated_store;

pub use direct_store::DirectStore;
pub use gated_store::GatedStore;
