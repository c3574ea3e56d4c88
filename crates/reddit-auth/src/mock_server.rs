//! Local stand-in for Reddit's token endpoint and OAuth API

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::Form;
use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tokio::net::TcpListener;

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
pub const USERNAME: &str = "test-user";
pub const PASSWORD: &str = "test-password";
pub const USER_AGENT: &str = "reddit-auth-check/0.1 by test-user";
pub const ACCESS_TOKEN: &str = "at_mock";

/// `test-client:test-secret` in Basic auth encoding
const BASIC_AUTH: &str = "Basic dGVzdC1jbGllbnQ6dGVzdC1zZWNyZXQ=";

/// Start the mock on an ephemeral port, returning its base URL.
pub async fn start() -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{addr}");

    let app = Router::new()
        .route("/api/v1/access_token", post(token))
        .route("/api/v1/me", get(me))
        .route("/r/{name}/about", get(about));

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (url, handle)
}

/// An address nothing is listening on.
pub fn unused_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

fn header_is(headers: &HeaderMap, name: header::HeaderName, expected: &str) -> bool {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected)
}

async fn token(headers: HeaderMap, Form(form): Form<HashMap<String, String>>) -> Response {
    // Reddit throttles requests without a descriptive User-Agent
    if !header_is(&headers, header::USER_AGENT, USER_AGENT) {
        return (StatusCode::TOO_MANY_REQUESTS, "Too Many Requests").into_response();
    }
    if !header_is(&headers, header::AUTHORIZATION, BASIC_AUTH) {
        return (StatusCode::UNAUTHORIZED, Json(serde_json::json!({"message": "Unauthorized", "error": 401})))
            .into_response();
    }
    let valid = form.get("grant_type").map(String::as_str) == Some("password")
        && form.get("username").map(String::as_str) == Some(USERNAME)
        && form.get("password").map(String::as_str) == Some(PASSWORD);
    if !valid {
        return Json(serde_json::json!({"error": "invalid_grant"})).into_response();
    }
    Json(serde_json::json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "bearer",
        "expires_in": 86400,
        "scope": "*",
    }))
    .into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    header_is(headers, header::AUTHORIZATION, &format!("Bearer {ACCESS_TOKEN}"))
}

async fn me(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(serde_json::json!({"name": USERNAME, "link_karma": 1})).into_response()
}

async fn about(headers: HeaderMap, Path(name): Path<String>) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match name.as_str() {
        "private" => (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({"reason": "private", "message": "Forbidden", "error": 403})),
        )
            .into_response(),
        "missing" => (
            StatusCode::FOUND,
            [(header::LOCATION, "/subreddits/search.json?q=missing")],
        )
            .into_response(),
        "broken" => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => Json(serde_json::json!({
            "kind": "t5",
            "data": {"display_name": name, "subscribers": 12345},
        }))
        .into_response(),
    }
}
