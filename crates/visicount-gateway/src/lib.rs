//! visicount gateway library entry.
//!
//! Wires config, the counter store, the counter service, and the HTTP
//! transport into one stack. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod counter;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
pub mod transport;
