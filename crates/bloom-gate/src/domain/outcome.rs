//! Result of a gated lookup

use serde::Serialize;

/// Outcome of [`GatedStore::query`](crate::service::GatedStore::query)
///
/// Distinguishes a fast rejection by the filter from an exact miss that was
/// only discovered after paying for the lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "record", rename_all = "snake_case")]
pub enum LookupOutcome<R> {
    /// The filter reported "definitely absent"; no exact lookup was performed
    GateRejected,
    /// The filter passed the key and the exact store returned this record
    Found(R),
    /// The filter passed the key but the exact store had no record (a false positive)
    NotFoundAfterGate,
}

impl<R> LookupOutcome<R> {
    /// Whether the exact store was consulted
    pub fn passed_gate(&self) -> bool {
        !matches!(self, LookupOutcome::GateRejected)
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }

    /// The record, if one was found
    pub fn record(&self) -> Option<&R> {
        match self {
            LookupOutcome::Found(record) => Some(record),
            _ => None,
        }
    }

    /// Consume the outcome, yielding the record if one was found
    pub fn into_record(self) -> Option<R> {
        match self {
            LookupOutcome::Found(record) => Some(record),
            _ => None,
        }
    }

    /// Short label for logs and reports
    pub fn label(&self) -> &'static str {
        match self {
            LookupOutcome::GateRejected => "gate_rejected",
            LookupOutcome::Found(_) => "found",
            LookupOutcome::NotFoundAfterGate => "not_found_after_gate",
        }
    }
}
