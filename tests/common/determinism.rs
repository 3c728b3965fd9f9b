//! Deterministic test environment setup
//!
//! Provides utilities for creating reproducible tests by controlling
//! normally non-deterministic values like record ids and timestamps.

use std::sync::atomic::{AtomicU64, Ordering};

use roster::{Record, RecordId};
use uuid::Uuid;

/// Generates deterministic record ids for testing
///
/// Produces sequential ids starting from 1, so CSV output and ordering
/// are reproducible.
pub struct DeterministicIdGenerator {
    counter: AtomicU64,
}

impl DeterministicIdGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    /// Generate the next deterministic id
    pub fn next(&self) -> RecordId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        RecordId::from_uuid(Uuid::from_u128(n as u128))
    }

    /// Get the current counter value without incrementing
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

impl Default for DeterministicIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a record with a deterministic id
pub fn record(gen: &DeterministicIdGenerator, name: &str, gender: &str, age: u32) -> Record {
    Record {
        id: gen.next(),
        name: name.to_string(),
        gender: gender.to_string(),
        age,
    }
}

/// Fixed timestamp for testing (2024-01-01 00:00:00 UTC)
pub const TEST_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

/// Get a fixed chrono DateTime for testing
pub fn test_now() -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::parse_from_rfc3339(TEST_TIMESTAMP)
        .expect("Invalid test timestamp")
        .with_timezone(&chrono::Utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_deterministic_id_generator() {
        let gen = DeterministicIdGenerator::new();
        let id1 = gen.next();
        let id2 = gen.next();

        assert_ne!(id1, id2);
        assert_eq!(id1.as_uuid(), Uuid::from_u128(1));
        assert_eq!(gen.current(), 3);
    }

    #[test]
    fn test_timestamp() {
        let ts = test_now();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.month(), 1);
        assert_eq!(ts.day(), 1);
    }
}
