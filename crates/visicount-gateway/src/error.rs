//! HTTP mapping for core errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use visicount_core::error::VisiCountError;

use crate::transport::http::apply_fixed_headers;

/// Core error on its way out through an axum handler.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub VisiCountError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            VisiCountError::BadRequest(_) => StatusCode::BAD_REQUEST,
            VisiCountError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            VisiCountError::UnsupportedVersion
            | VisiCountError::CorruptRecord(_)
            | VisiCountError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        let mut res = (self.status(), body).into_response();
        apply_fixed_headers(&mut res);
        res
    }
}
