//! Health checks.
//!
//! | Path             | Description                                  |
//! |------------------|----------------------------------------------|
//! | `GET /health`    | Aggregated status: 200 if UP, 503 if DOWN    |
//! | `GET /health/live` | Liveness probe, always 200                 |

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

/// Result of a single health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Up,
    Down(String),
}

/// A named health indicator, e.g. a database ping.
pub trait HealthIndicator: Send + Sync + 'static {
    fn name(&self) -> &str;

    fn check(&self) -> impl Future<Output = HealthStatus> + Send;
}

trait HealthIndicatorErased: Send + Sync + 'static {
    fn name(&self) -> &str;
    fn check(&self) -> Pin<Box<dyn Future<Output = HealthStatus> + Send + '_>>;
}

impl<T: HealthIndicator> HealthIndicatorErased for T {
    fn name(&self) -> &str {
        HealthIndicator::name(self)
    }

    fn check(&self) -> Pin<Box<dyn Future<Output = HealthStatus> + Send + '_>> {
        Box::pin(HealthIndicator::check(self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthCheckStatus {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthCheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub duration_ms: u64,
}

/// Aggregated health response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: HealthCheckStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<HealthCheck>,
    pub uptime_seconds: u64,
}

/// Builder for the `/health` routes.
#[derive(Default)]
pub struct HealthBuilder {
    checks: Vec<Box<dyn HealthIndicatorErased>>,
}

impl HealthBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a health check.
    pub fn check<H: HealthIndicator>(mut self, indicator: H) -> Self {
        self.checks.push(Box::new(indicator));
        self
    }

    /// Build a stateless router exposing `/health` and `/health/live`.
    pub fn into_router<S: Clone + Send + Sync + 'static>(self) -> Router<S> {
        let state = Arc::new(HealthState {
            checks: self.checks,
            start_time: Instant::now(),
        });
        Router::new()
            .route("/health", get(health_handler).with_state(state))
            .route("/health/live", get(liveness_handler))
    }
}

struct HealthState {
    checks: Vec<Box<dyn HealthIndicatorErased>>,
    start_time: Instant,
}

impl HealthState {
    async fn aggregate(&self) -> HealthResponse {
        let mut checks = Vec::with_capacity(self.checks.len());
        let mut all_up = true;

        for indicator in &self.checks {
            let start = Instant::now();
            let status = indicator.check().await;
            let duration_ms = start.elapsed().as_millis() as u64;

            let (status, reason) = match status {
                HealthStatus::Up => (HealthCheckStatus::Up, None),
                HealthStatus::Down(reason) => {
                    all_up = false;
                    tracing::warn!(check = indicator.name(), %reason, "Health check is down");
                    (HealthCheckStatus::Down, Some(reason))
                }
            };
            checks.push(HealthCheck {
                name: indicator.name().to_string(),
                status,
                reason,
                duration_ms,
            });
        }

        HealthResponse {
            status: if all_up {
                HealthCheckStatus::Up
            } else {
                HealthCheckStatus::Down
            },
            checks,
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

async fn health_handler(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    let response = state.aggregate().await;
    let status_code = match response.status {
        HealthCheckStatus::Up => StatusCode::OK,
        HealthCheckStatus::Down => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status_code, Json(response))
}

async fn liveness_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
