//! Inbound gateway event model and method resolution (panic-free).
//!
//! Two event encodings reach the handler:
//! - REST (v1): `{"httpMethod": "POST", ...}`
//! - HTTP API / function URL (v2): `{"requestContext": {"http": {"method": "POST"}}, ...}`
//!
//! Resolution rules:
//! - The flat `httpMethod` field wins over the nested one when both exist.
//! - A field with the wrong JSON type counts as absent.
//! - Anything unrecognized resolves to `GET`; no error is ever raised.

use serde_json::Value;

/// Method used when neither event shape carries one.
pub const DEFAULT_METHOD: &str = "GET";

/// Classified inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    /// REST API (payload v1): top-level `httpMethod`.
    Rest { http_method: String },
    /// HTTP API (payload v2) / function URL: `requestContext.http.method`.
    Http { method: String },
    /// Neither shape matched.
    Unrecognized,
}

impl GatewayEvent {
    /// Classify a raw event by which method field it actually carries.
    pub fn classify(event: &Value) -> Self {
        if let Some(m) = event.get("httpMethod").and_then(Value::as_str) {
            return GatewayEvent::Rest { http_method: m.to_string() };
        }

        let nested = event
            .get("requestContext")
            .and_then(|ctx| ctx.get("http"))
            .and_then(|http| http.get("method"))
            .and_then(Value::as_str);

        match nested {
            Some(m) => GatewayEvent::Http { method: m.to_string() },
            None => GatewayEvent::Unrecognized,
        }
    }

    /// Canonical uppercased method for this event.
    pub fn method(&self) -> String {
        match self {
            GatewayEvent::Rest { http_method } => http_method.to_uppercase(),
            GatewayEvent::Http { method } => method.to_uppercase(),
            GatewayEvent::Unrecognized => DEFAULT_METHOD.to_string(),
        }
    }
}

/// Resolve the HTTP method of a raw gateway event.
pub fn resolve_method(event: &Value) -> String {
    let classified = GatewayEvent::classify(event);
    if classified == GatewayEvent::Unrecognized {
        tracing::debug!("event carries no method field, defaulting to {DEFAULT_METHOD}");
    }
    classified.method()
}
