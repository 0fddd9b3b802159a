//! DynamoDB-backed counter store.
//!
//! Increment is a single `UpdateItem`:
//! `SET #count = if_not_exists(#count, :zero) + :inc` with `UPDATED_NEW`,
//! so concurrent invocations never lose updates.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use visicount_core::error::{Result, VisiCountError};
use visicount_core::record::CounterRecord;

use super::CounterStore;
use crate::config::StoreConfig;

const COUNT_ATTRIBUTE: &str = "count";
const INCREMENT_EXPRESSION: &str = "SET #count = if_not_exists(#count, :zero) + :inc";

pub struct DynamoCounterStore {
    client: Client,
    table_name: String,
    key_attribute: String,
}

impl DynamoCounterStore {
    pub fn new(client: Client, table_name: impl Into<String>, key_attribute: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            key_attribute: key_attribute.into(),
        }
    }

    /// Resolve credentials/region from the environment, then apply the
    /// optional region and endpoint overrides from config.
    pub async fn connect(cfg: &StoreConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &cfg.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &cfg.endpoint_url {
            tracing::info!(endpoint = %endpoint, "dynamodb endpoint override");
            builder = builder.endpoint_url(endpoint);
        }

        tracing::info!(table = %cfg.table_name, "dynamodb counter store ready");
        Self::new(
            Client::from_conf(builder.build()),
            cfg.table_name.clone(),
            cfg.key_attribute.clone(),
        )
    }

    fn key(&self, key: &str) -> (String, AttributeValue) {
        (self.key_attribute.clone(), AttributeValue::S(key.to_string()))
    }
}

#[async_trait]
impl CounterStore for DynamoCounterStore {
    fn backend(&self) -> &'static str {
        "dynamodb"
    }

    async fn get(&self, key: &str) -> Result<Option<CounterRecord>> {
        let (k, v) = self.key(key);
        let out = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(k, v)
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| VisiCountError::StoreUnavailable(DisplayErrorContext(&e).to_string()))?;

        match out.item() {
            // a row seeded with only the key reads as zero, matching if_not_exists
            Some(item) => Ok(Some(CounterRecord::new(read_count(item)?.unwrap_or(0)))),
            None => Ok(None),
        }
    }

    async fn increment(&self, key: &str, delta: u64) -> Result<u64> {
        let (k, v) = self.key(key);
        let out = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(k, v)
            .update_expression(INCREMENT_EXPRESSION)
            .expression_attribute_names("#count", COUNT_ATTRIBUTE)
            .expression_attribute_values(":zero", AttributeValue::N("0".into()))
            .expression_attribute_values(":inc", AttributeValue::N(delta.to_string()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(|e| VisiCountError::StoreUnavailable(DisplayErrorContext(&e).to_string()))?;

        let attrs = out.attributes().ok_or_else(|| {
            VisiCountError::CorruptRecord("update returned no attributes".into())
        })?;
        read_count(attrs)?
            .ok_or_else(|| VisiCountError::CorruptRecord("update returned no count".into()))
    }
}

/// `Ok(None)` when the attribute is absent; present but non-numeric is corrupt.
fn read_count(item: &HashMap<String, AttributeValue>) -> Result<Option<u64>> {
    let Some(raw) = item.get(COUNT_ATTRIBUTE) else {
        return Ok(None);
    };
    let n = raw
        .as_n()
        .map_err(|_| VisiCountError::CorruptRecord("count attribute is not a number".into()))?;
    n.parse::<u64>()
        .map(Some)
        .map_err(|e| VisiCountError::CorruptRecord(format!("count {n:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(v: AttributeValue) -> HashMap<String, AttributeValue> {
        HashMap::from([(COUNT_ATTRIBUTE.to_string(), v)])
    }

    #[test]
    fn reads_numeric_count() {
        assert_eq!(read_count(&item(AttributeValue::N("42".into()))).unwrap(), Some(42));
    }

    #[test]
    fn rejects_non_numeric_count() {
        let err = read_count(&item(AttributeValue::S("42".into()))).unwrap_err();
        assert!(matches!(err, VisiCountError::CorruptRecord(_)));
    }

    #[test]
    fn rejects_negative_count() {
        let err = read_count(&item(AttributeValue::N("-1".into()))).unwrap_err();
        assert!(matches!(err, VisiCountError::CorruptRecord(_)));
    }

    #[test]
    fn key_only_item_has_no_count() {
        let seeded = HashMap::from([(
            "id".to_string(),
            AttributeValue::S("visitor_count".into()),
        )]);
        assert_eq!(read_count(&seeded).unwrap(), None);
        assert_eq!(read_count(&seeded).unwrap().unwrap_or(0), 0);
    }
}
