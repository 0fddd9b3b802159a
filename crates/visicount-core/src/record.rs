//! The single persisted counter record.

use serde::{Deserialize, Serialize};

/// Fixed key of the one counter record that ever exists.
pub const COUNTER_KEY: &str = "visitor_count";

/// Counter record as read from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRecord {
    /// Total visits recorded. Only ever grows.
    pub count: u64,
}

impl CounterRecord {
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}

/// Count reported for a possibly-absent record; absence reads as zero.
pub fn count_or_zero(record: Option<CounterRecord>) -> u64 {
    record.map(|r| r.count).unwrap_or(0)
}
