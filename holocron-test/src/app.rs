use axum::body::Body;
use axum::Router;
use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, IntoHeaderName, CONTENT_TYPE};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tower::util::ServiceExt;

/// In-process HTTP test client wrapping an Axum `Router`.
///
/// Uses `tower::ServiceExt::oneshot` to dispatch requests without binding
/// to a TCP port.
#[derive(Clone)]
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub fn get(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::GET, path)
    }

    pub fn post(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::POST, path)
    }

    pub fn delete(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::DELETE, path)
    }

    pub fn request(&self, method: Method, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, method, path)
    }
}

/// Builder for constructing and sending a test HTTP request.
pub struct TestRequest<'a> {
    app: &'a TestApp,
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl<'a> TestRequest<'a> {
    fn new(app: &'a TestApp, method: Method, path: &str) -> Self {
        Self {
            app,
            method,
            path: path.to_string(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl IntoHeaderName, value: impl AsRef<str>) -> Self {
        self.headers
            .insert(name, value.as_ref().parse().expect("invalid header value"));
        self
    }

    /// Set the request body as JSON. Also sets Content-Type to `application/json`.
    pub fn json(mut self, body: &impl Serialize) -> Self {
        self.body = Some(serde_json::to_vec(body).expect("failed to serialize JSON body"));
        self.headers
            .insert(CONTENT_TYPE, "application/json".parse().expect("static header"));
        self
    }

    /// Set a raw request body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub async fn send(self) -> TestResponse {
        let body = match self.body {
            Some(b) => Body::from(b),
            None => Body::empty(),
        };

        let mut builder = Request::builder().method(self.method).uri(&self.path);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        let request = builder.body(body).expect("failed to build request");

        let response = self
            .app
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response wrapper with status assertions, JSON assertions, and body helpers.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn assert_ok(self) -> Self {
        self.assert_status(StatusCode::OK)
    }

    pub fn assert_bad_request(self) -> Self {
        self.assert_status(StatusCode::BAD_REQUEST)
    }

    pub fn assert_not_found(self) -> Self {
        self.assert_status(StatusCode::NOT_FOUND)
    }

    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected {expected}, got {}\nBody: {}",
            self.status,
            self.text()
        );
        self
    }

    /// Assert that a dot-separated JSON path (`"[0].name"`, `"error"`,
    /// `"characters[1].character_id"`) resolves to `expected`.
    pub fn assert_json_path(self, path: &str, expected: impl Into<Value>) -> Self {
        let root: Value = self.json();
        let actual = resolve_path(&root, path);
        let expected = expected.into();
        assert_eq!(
            actual, expected,
            "JSON path \"{path}\" assertion failed\n  Expected: {expected}\n  Actual:   {actual}\n  Body: {root}",
        );
        self
    }

    /// Assert the whole body equals `expected`.
    pub fn assert_json(self, expected: Value) -> Self {
        let actual: Value = self.json();
        assert_eq!(actual, expected, "JSON body mismatch");
        self
    }

    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        let name: HeaderName = name.as_ref().parse().ok()?;
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Deserialize the entire response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("Failed to parse JSON: {e}\nBody: {}", self.text()))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

fn resolve_path(root: &Value, path: &str) -> Value {
    let mut current = root;
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        let (field, indices) = match segment.find('[') {
            Some(pos) => (&segment[..pos], &segment[pos..]),
            None => (segment, ""),
        };
        if !field.is_empty() {
            current = match current.get(field) {
                Some(v) => v,
                None => return Value::Null,
            };
        }
        for index in indices
            .split(|c: char| c == '[' || c == ']')
            .filter(|s| !s.is_empty())
        {
            let index: usize = index
                .parse()
                .unwrap_or_else(|_| panic!("non-numeric array index in JSON path: {path}"));
            current = match current.get(index) {
                Some(v) => v,
                None => return Value::Null,
            };
        }
    }
    current.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_fields_and_indices() {
        let root = json!({ "characters": [{ "character_id": 5 }, { "character_id": 7 }] });
        assert_eq!(resolve_path(&root, "characters[1].character_id"), json!(7));
        assert_eq!(resolve_path(&root, "characters[2]"), Value::Null);
        assert_eq!(resolve_path(&root, "missing.field"), Value::Null);
    }

    #[test]
    fn resolves_top_level_arrays() {
        let root = json!([{ "name": "Luke" }]);
        assert_eq!(resolve_path(&root, "[0].name"), json!("Luke"));
    }

    #[tokio::test]
    async fn dispatches_through_router() {
        let router = Router::new().route(
            "/ping",
            axum::routing::post(|body: String| async move { body }),
        );
        let app = TestApp::new(router);
        let resp = app.post("/ping").body("pong").send().await.assert_ok();
        assert_eq!(resp.text(), "pong");
        app.get("/ping")
            .send()
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
