//! visicount core: transport-agnostic contracts for the visitor counter.
//!
//! This crate defines the counter record, the inbound gateway event model and
//! its method resolver, the outbound response envelope, and the error surface
//! shared by the gateway and its tests. It carries no transport, store, or
//! runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `VisiCountError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod event;
pub mod record;
pub mod response;

/// Shared result type.
pub use error::{Result, VisiCountError};
pub use event::{resolve_method, GatewayEvent};
pub use record::{CounterRecord, COUNTER_KEY};
pub use response::{Reply, ReplyBody, ResponseEnvelope};
