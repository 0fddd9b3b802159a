//! HTTP handlers.
//!
//! - `ANY  /v1/visitors` : the request's own method drives the counter
//! - `POST /v1/invoke`   : body is a raw gateway event; replies with the
//!   `{statusCode, headers, body}` envelope a function integration returns

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use visicount_core::error::VisiCountError;
use visicount_core::event::resolve_method;
use visicount_core::response::{Reply, ResponseEnvelope, RESPONSE_HEADERS};

use crate::app_state::AppState;
use crate::error::ApiError;

/// Stamp the fixed content-type/CORS headers onto a response.
pub fn apply_fixed_headers(res: &mut Response) {
    for (k, v) in RESPONSE_HEADERS {
        if let Ok(name) = HeaderName::from_bytes(k.as_bytes()) {
            res.headers_mut().insert(name, HeaderValue::from_static(v));
        }
    }
}

fn reply_response(reply: &Reply) -> Result<Response, ApiError> {
    let status = StatusCode::from_u16(reply.status_code)
        .map_err(|e| VisiCountError::Internal(format!("invalid status code: {e}")))?;
    let mut res = (status, reply.body_json()?).into_response();
    apply_fixed_headers(&mut res);
    Ok(res)
}

fn method_label(method: &str) -> &'static str {
    match method {
        "GET" => "GET",
        "POST" => "POST",
        "PUT" => "PUT",
        _ => "OTHER",
    }
}

async fn run(app: &AppState, method: &str) -> Result<Reply, ApiError> {
    let res = app.counter().handle(method).await.map_err(ApiError::from);
    let status = match &res {
        Ok(reply) => reply.status_code.to_string(),
        Err(e) => e.status().as_u16().to_string(),
    };
    app.metrics()
        .requests
        .inc(&[("method", method_label(method)), ("status", status.as_str())]);
    res
}

pub async fn visitors(State(app): State<AppState>, method: Method) -> Result<Response, ApiError> {
    let method = method.as_str().to_uppercase();
    let reply = run(&app, &method).await?;
    reply_response(&reply)
}

/// Content type is not checked and an unparsable body resolves like an
/// event with no method field (GET).
pub async fn invoke(State(app): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let event: Value = serde_json::from_slice(&body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "invoke body is not json");
        Value::Null
    });
    let method = resolve_method(&event);
    tracing::debug!(method = %method, "gateway event resolved");

    let envelope: ResponseEnvelope = run(&app, &method).await?.into_envelope()?;
    let mut res = Json(envelope).into_response();
    apply_fixed_headers(&mut res);
    Ok(res)
}
