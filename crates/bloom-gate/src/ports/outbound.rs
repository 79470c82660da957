//! Outbound Ports (Driven Ports)
//!
//! The exact-match store sitting behind the gate. It holds the authoritative
//! records and may be arbitrarily slow; the coordinator imposes no timeout.

/// Result of an exact lookup, with the cost the store paid for it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanResult<R> {
    /// The matching record, if any
    pub record: Option<R>,
    /// How many candidate entries the store examined
    pub records_scanned: u64,
}

impl<R> ScanResult<R> {
    pub fn found(record: R, records_scanned: u64) -> Self {
        Self {
            record: Some(record),
            records_scanned,
        }
    }

    pub fn missing(records_scanned: u64) -> Self {
        Self {
            record: None,
            records_scanned,
        }
    }
}

/// Exact key-value store (Driven Port)
///
/// Errors are surfaced to callers of the coordinator unchanged.
pub trait ExactStore {
    /// Record type stored under each key
    type Record;
    /// Failure type for inserts and lookups
    type Error;

    /// Register `record` under `key`
    fn insert(&mut self, key: &[u8], record: Self::Record) -> Result<(), Self::Error>;

    /// Find the record stored under `key`
    fn lookup(&self, key: &[u8]) -> Result<ScanResult<Self::Record>, Self::Error>;
}

/// Lets a caller keep ownership of its store and lend it to a coordinator
impl<S: ExactStore + ?Sized> ExactStore for &mut S {
    type Record = S::Record;
    type Error = S::Error;

    fn insert(&mut self, key: &[u8], record: Self::Record) -> Result<(), Self::Error> {
        (**self).insert(key, record)
    }

    fn lookup(&self, key: &[u8]) -> Result<ScanResult<Self::Record>, Self::Error> {
        (**self).lookup(key)
    }
}
