//! Shared application state for the counter gateway.

use std::sync::Arc;

use visicount_core::error::Result;

use crate::config::CounterConfig;
use crate::counter::CounterService;
use crate::obs::CounterMetrics;
use crate::store::{self, CounterStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    counter: CounterService,
    metrics: Arc<CounterMetrics>,
}

struct AppStateInner {
    cfg: CounterConfig,
}

impl AppState {
    /// Build state around an already-constructed store.
    pub fn new(cfg: CounterConfig, store: Arc<dyn CounterStore>) -> Self {
        let metrics = Arc::new(CounterMetrics::default());
        let counter = CounterService::new(store, Arc::clone(&metrics));
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            counter,
            metrics,
        }
    }

    /// Connect the configured store, then build state.
    pub async fn connect(cfg: CounterConfig) -> Result<Self> {
        let store = store::connect(&cfg.store).await?;
        tracing::info!(backend = store.backend(), "counter store connected");
        Ok(Self::new(cfg, store))
    }

    pub fn cfg(&self) -> &CounterConfig {
        &self.inner.cfg
    }

    pub fn counter(&self) -> &CounterService {
        &self.counter
    }

    pub fn metrics(&self) -> Arc<CounterMetrics> {
        Arc::clone(&self.metrics)
    }
}
