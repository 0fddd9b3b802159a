use async_trait::async_trait;
use dashmap::DashMap;

use visicount_core::error::Result;
use visicount_core::record::CounterRecord;

use super::CounterStore;

/// Process-local store. The entry lock held across `or_insert` + add makes
/// the increment atomic with respect to concurrent callers.
#[derive(Default)]
pub struct MemoryCounterStore {
    records: DashMap<String, u64>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self { records: DashMap::new() }
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<CounterRecord>> {
        Ok(self.records.get(key).map(|r| CounterRecord::new(*r.value())))
    }

    async fn increment(&self, key: &str, delta: u64) -> Result<u64> {
        let mut entry = self.records.entry(key.to_string()).or_insert(0);
        *entry = entry.saturating_add(delta);
        Ok(*entry)
    }
}
