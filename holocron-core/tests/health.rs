use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use holocron_core::{HealthBuilder, HealthIndicator, HealthStatus};
use http_body_util::BodyExt;
use tower::ServiceExt;

struct Fixed(HealthStatus);

impl HealthIndicator for Fixed {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn check(&self) -> HealthStatus {
        self.0.clone()
    }
}

async fn get(router: Router, path: &str) -> (StatusCode, serde_json::Value) {
    let resp = router
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health_up_without_checks() {
    let router: Router = HealthBuilder::new().into_router();
    let (status, body) = get(router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "UP");
    assert!(body.get("checks").is_none());
}

#[tokio::test]
async fn test_health_reports_down_check() {
    let router: Router = HealthBuilder::new()
        .check(Fixed(HealthStatus::Up))
        .check(Fixed(HealthStatus::Down("database is locked".into())))
        .into_router();
    let (status, body) = get(router, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "DOWN");
    assert_eq!(body["checks"].as_array().unwrap().len(), 2);
    assert_eq!(body["checks"][1]["reason"], "database is locked");
}

#[tokio::test]
async fn test_liveness_ignores_checks() {
    let router: Router = HealthBuilder::new()
        .check(Fixed(HealthStatus::Down("nope".into())))
        .into_router();
    let (status, _) = get(router, "/health/live").await;
    assert_eq!(status, StatusCode::OK);
}
