//! Transport layer (HTTP).
//!
//! Boundary adapters that translate axum requests or raw gateway events into
//! a resolved method, and counter replies back into HTTP responses.

pub mod http;
