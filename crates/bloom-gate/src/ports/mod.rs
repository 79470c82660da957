//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for external callers
//! - Driven Ports (outbound) - The exact store behind the gate

pub mod inbound;
pub mod outbound;

pub use inbound::GateApi;
pub use outbound::{ExactStore, ScanResult};
