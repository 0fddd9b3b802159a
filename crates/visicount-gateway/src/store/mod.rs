//! Counter store abstraction.
//!
//! The service only ever needs two primitives from a backing store: a point
//! read, and an atomic increment-with-default that runs on the store side.
//! Implementations must never emulate the latter with a client-side
//! read-then-write.

pub mod dynamo;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use visicount_core::error::Result;
use visicount_core::record::CounterRecord;

use crate::config::{StoreBackend, StoreConfig};

pub use dynamo::DynamoCounterStore;
pub use memory::MemoryCounterStore;

#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Short backend name for logs/metrics labels.
    fn backend(&self) -> &'static str;

    /// Point read. `Ok(None)` means the record does not exist yet.
    async fn get(&self, key: &str) -> Result<Option<CounterRecord>>;

    /// Initialize the count to 0 if absent, add `delta`, return the new value.
    async fn increment(&self, key: &str, delta: u64) -> Result<u64>;
}

/// Build the configured store once at startup.
pub async fn connect(cfg: &StoreConfig) -> Result<Arc<dyn CounterStore>> {
    match cfg.backend {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory counter store; counts are lost on restart");
            Ok(Arc::new(MemoryCounterStore::new()))
        }
        StoreBackend::Dynamodb => Ok(Arc::new(DynamoCounterStore::connect(cfg).await)),
    }
}
