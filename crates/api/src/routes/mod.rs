//! HTTP route handlers.

pub mod diagram;
pub mod health;
pub mod hello;
pub mod metrics;
