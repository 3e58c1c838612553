use axum::http::StatusCode;
use axum::response::IntoResponse;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Initialise the global `tracing` subscriber.
///
/// Honours `RUST_LOG`; falls back to `info,tower_http=debug`. Calling it more
/// than once (e.g. from several tests) is a no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .try_init();
}

/// Permissive CORS layer: any origin, method and header.
pub fn default_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// HTTP request/response tracing at the `DEBUG` level.
pub fn default_trace() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// Converts handler panics into JSON 500 responses.
pub fn catch_panic_layer(
) -> CatchPanicLayer<fn(Box<dyn std::any::Any + Send>) -> axum::response::Response> {
    CatchPanicLayer::custom(panic_handler as fn(_) -> _)
}

fn panic_handler(_err: Box<dyn std::any::Any + Send>) -> axum::response::Response {
    tracing::error!("Handler panicked");
    let body = serde_json::json!({ "error": "Internal server error" });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}
