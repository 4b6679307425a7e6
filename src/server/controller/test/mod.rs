//! HTTP tests driving the full router, middleware included.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::util::ServiceExt;

use crate::server::{
    router::router,
    service::auth::{
        password::PasswordHasher,
        token::{JwtConfig, JwtManager},
    },
    state::AppState,
};


struct TestApp {
    app: Router,
    token: String,
    context: TestContext,
}

impl TestApp {
    /// Builds the router over a fresh database and registers a user for the token.
    async fn new() -> Self {
        let context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();

        let app = router(state(db));
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "email": "tester@example.com",
                "password": "tester-password",
                "role": "USER"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let token = body["data"]["token"].as_str().unwrap().to_string();

        Self {
            app,
            token,
            context,
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.context.db.as_ref().unwrap()
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        send(&self.app, Method::GET, uri, Some(&self.token), None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        send(&self.app, Method::POST, uri, Some(&self.token), Some(body)).await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        send(&self.app, Method::PUT, uri, Some(&self.token), Some(body)).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        send(&self.app, Method::DELETE, uri, Some(&self.token), None).await
    }
}

fn state(db: DatabaseConnection) -> AppState {
    AppState::new(
        db,
        JwtManager::new(JwtConfig::new("controller-test-secret")).unwrap(),
        PasswordHasher::new(4),
    )
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Asserts the envelope fields shared by every response.
fn assert_envelope(body: &Value, message: &str, success: bool, status: &str) {
    assert_eq!(body["message"], message, "unexpected body {}", body);
    assert_eq!(body["success"], success, "unexpected body {}", body);
    assert_eq!(body["status"], status, "unexpected body {}", body);
}
