//! Counter service: method -> store operation -> reply.

pub mod service;

pub use service::{CounterAction, CounterService};
