//! Axum router wiring.

use axum::{
    routing::{any, get, post},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/visitors", any(transport::http::visitors))
        .route("/v1/invoke", post(transport::http::invoke))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
