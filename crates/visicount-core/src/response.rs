//! Outbound reply and the gateway response envelope.
//!
//! Every branch (count, rejection) carries the same fixed headers. The
//! envelope body is the JSON-encoded reply body as a string, which is what
//! API gateways expect from a function integration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VisiCountError};

/// Headers applied to every response regardless of branch.
pub const RESPONSE_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
];

/// JSON body of a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyBody {
    Count { count: u64 },
    Error { error: String },
}

/// Status + body produced by the counter service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status_code: u16,
    pub body: ReplyBody,
}

impl Reply {
    pub fn count(count: u64) -> Self {
        Self { status_code: 200, body: ReplyBody::Count { count } }
    }

    /// 405 reply naming the rejected method. A normal outcome, not an `Err`.
    pub fn method_not_allowed(method: &str) -> Self {
        Self {
            status_code: 405,
            body: ReplyBody::Error { error: format!("Method not allowed: {method}") },
        }
    }

    pub fn body_json(&self) -> Result<String> {
        serde_json::to_string(&self.body)
            .map_err(|e| VisiCountError::Internal(format!("encode reply body failed: {e}")))
    }

    /// Package into the gateway envelope.
    pub fn into_envelope(self) -> Result<ResponseEnvelope> {
        let body = self.body_json()?;
        Ok(ResponseEnvelope {
            status_code: self.status_code,
            headers: RESPONSE_HEADERS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body,
        })
    }
}

/// `{statusCode, headers, body}` as returned to the invoking gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn envelope_carries_fixed_headers_and_string_body() {
        let env = Reply::count(3).into_envelope().unwrap();
        assert_eq!(env.status_code, 200);
        assert_eq!(env.body, r#"{"count":3}"#);
        assert_eq!(env.headers["Content-Type"], "application/json");
        assert_eq!(env.headers["Access-Control-Allow-Origin"], "*");
    }

    #[test]
    fn rejection_body_names_method() {
        let env = Reply::method_not_allowed("PATCH").into_envelope().unwrap();
        assert_eq!(env.status_code, 405);
        assert_eq!(env.body, r#"{"error":"Method not allowed: PATCH"}"#);
        assert_eq!(env.headers.len(), 2);
    }

    #[test]
    fn envelope_serializes_camel_case() {
        let v = serde_json::to_value(Reply::count(0).into_envelope().unwrap()).unwrap();
        assert_eq!(v["statusCode"], 200);
        assert!(v["body"].is_string());
    }
}
