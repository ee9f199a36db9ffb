//! HTTP handlers for foo-service.

pub mod error;
pub mod foo;
pub mod health;

pub use error::FooApiError;
pub use health::{health_check, metrics_endpoint, readiness_check};
