use std::net::SocketAddr;

use serde::Deserialize;
use visicount_core::error::{Result, VisiCountError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CounterConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub store: StoreConfig,
}

impl CounterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(VisiCountError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.store.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            VisiCountError::BadRequest(format!("gateway.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    #[default]
    Dynamodb,
    /// Process-local map; for tests and offline runs only.
    Memory,
}

/// Backing store settings. Handed to `store::connect` once at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    #[serde(default)]
    pub table_name: String,

    #[serde(default = "default_key_attribute")]
    pub key_attribute: String,

    #[serde(default)]
    pub region: Option<String>,

    /// Endpoint override (e.g. DynamoDB Local).
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            table_name: String::new(),
            key_attribute: default_key_attribute(),
            region: None,
            endpoint_url: None,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<()> {
        if self.backend == StoreBackend::Dynamodb && self.table_name.trim().is_empty() {
            return Err(VisiCountError::BadRequest(
                "store.table_name must not be empty for the dynamodb backend".into(),
            ));
        }
        if self.key_attribute.trim().is_empty() {
            return Err(VisiCountError::BadRequest(
                "store.key_attribute must not be empty".into(),
            ));
        }
        if let Some(url) = &self.endpoint_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(VisiCountError::BadRequest(format!(
                    "store.endpoint_url must be an http(s) url: {url}"
                )));
            }
        }
        Ok(())
    }
}

fn default_key_attribute() -> String {
    "id".into()
}
