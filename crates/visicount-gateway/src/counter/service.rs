use std::sync::Arc;
use std::time::Instant;

use visicount_core::error::Result;
use visicount_core::record::{count_or_zero, COUNTER_KEY};
use visicount_core::response::Reply;

use crate::obs::CounterMetrics;
use crate::store::CounterStore;

/// Store operation selected purely by the resolved method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    Read,
    Increment,
    Reject(String),
}

impl CounterAction {
    pub fn from_method(method: &str) -> Self {
        match method {
            "GET" => CounterAction::Read,
            "POST" | "PUT" => CounterAction::Increment,
            other => CounterAction::Reject(other.to_string()),
        }
    }
}

/// Stateless get-or-increment over the single counter record.
///
/// Holds no count of its own; every call is one round-trip to the store,
/// and concurrent increments rely on the store's atomic primitive.
#[derive(Clone)]
pub struct CounterService {
    store: Arc<dyn CounterStore>,
    metrics: Arc<CounterMetrics>,
}

impl CounterService {
    pub fn new(store: Arc<dyn CounterStore>, metrics: Arc<CounterMetrics>) -> Self {
        Self { store, metrics }
    }

    pub async fn handle(&self, method: &str) -> Result<Reply> {
        match CounterAction::from_method(method) {
            CounterAction::Read => {
                let record = self.observe("get", self.store.get(COUNTER_KEY)).await?;
                Ok(Reply::count(count_or_zero(record)))
            }
            CounterAction::Increment => {
                let count = self.observe("increment", self.store.increment(COUNTER_KEY, 1)).await?;
                tracing::debug!(count, "visitor counted");
                Ok(Reply::count(count))
            }
            CounterAction::Reject(m) => {
                tracing::info!(method = %m, "method not allowed");
                Ok(Reply::method_not_allowed(&m))
            }
        }
    }

    async fn observe<T, F>(&self, op: &'static str, fut: F) -> Result<T>
    where
        F: std::future::Future<Output = Result<T>>,
    {
        let backend = self.store.backend();
        let started = Instant::now();
        let res = fut.await;
        self.metrics
            .store_duration
            .observe(&[("backend", backend), ("op", op)], started.elapsed());

        if let Err(e) = &res {
            self.metrics.store_errors.inc(&[("backend", backend), ("op", op)]);
            tracing::error!(backend, op, error = %e, "store call failed");
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_table() {
        assert_eq!(CounterAction::from_method("GET"), CounterAction::Read);
        assert_eq!(CounterAction::from_method("POST"), CounterAction::Increment);
        assert_eq!(CounterAction::from_method("PUT"), CounterAction::Increment);
        assert_eq!(
            CounterAction::from_method("DELETE"),
            CounterAction::Reject("DELETE".into())
        );
        // resolver already uppercases; lowercase here is a distinct token
        assert_eq!(CounterAction::from_method("get"), CounterAction::Reject("get".into()));
    }
}
