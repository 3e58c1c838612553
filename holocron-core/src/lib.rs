//! # holocron-core
//!
//! Shared runtime for the Holocron service: layered YAML/env configuration,
//! the JSON [`HttpError`] type, the default tower layers, a health-check
//! router and the graceful-shutdown server loop.

pub mod config;
pub mod error;
pub mod health;
pub mod layers;
pub mod server;

pub use config::{ConfigError, ConfigValue, FromConfigValue, HolocronConfig};
pub use error::{error_response, HttpError};
pub use health::{HealthBuilder, HealthIndicator, HealthStatus};
pub use layers::{catch_panic_layer, default_cors, default_trace, init_tracing};
pub use server::serve;
