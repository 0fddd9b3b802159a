//! Counter config loader (strict parsing + env overrides).

pub mod schema;

use std::fs;

use visicount_core::error::{Result, VisiCountError};

pub use schema::{CounterConfig, GatewaySection, StoreBackend, StoreConfig};

/// Overrides the configured table name.
pub const ENV_TABLE_NAME: &str = "VISICOUNT_TABLE_NAME";
/// Overrides the store endpoint; an empty value clears it.
pub const ENV_STORE_ENDPOINT: &str = "VISICOUNT_STORE_ENDPOINT";

pub fn load_from_file(path: &str) -> Result<CounterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| VisiCountError::Internal(format!("read config failed: {e}")))?;
    load_with_env(&s, |k| std::env::var(k).ok())
}

pub fn load_from_str(s: &str) -> Result<CounterConfig> {
    let cfg = parse(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Parse, apply overrides from `lookup`, then validate.
pub fn load_with_env<F>(s: &str, lookup: F) -> Result<CounterConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = parse(s)?;
    apply_overrides(&mut cfg, lookup);
    cfg.validate()?;
    Ok(cfg)
}

fn parse(s: &str) -> Result<CounterConfig> {
    serde_yaml::from_str(s).map_err(|e| VisiCountError::BadRequest(format!("invalid yaml: {e}")))
}

fn apply_overrides<F>(cfg: &mut CounterConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(table) = lookup(ENV_TABLE_NAME) {
        tracing::info!(table = %table, "store.table_name overridden from env");
        cfg.store.table_name = table;
    }
    if let Some(endpoint) = lookup(ENV_STORE_ENDPOINT) {
        if endpoint.is_empty() {
            cfg.store.endpoint_url = None;
        } else {
            tracing::info!(endpoint = %endpoint, "store.endpoint_url overridden from env");
            cfg.store.endpoint_url = Some(endpoint);
        }
    }
}
