//! Router wiring and request helpers.

use std::sync::Arc;

use api_adapters::AppState;
use auth_adapters::{AccessClaims, JwtAccessTokenVerifier};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use crate::TestForum;

pub const ACCESS_KEY: &str = "integration-access-key";

impl TestForum {
    pub fn router(&self) -> Router {
        api_adapters::router(AppState {
            threads: self.threads.clone(),
            comments: self.comments.clone(),
            replies: self.replies.clone(),
            likes: self.likes.clone(),
            tokens: Arc::new(JwtAccessTokenVerifier::new(&SecretString::from(
                ACCESS_KEY.to_string(),
            ))),
        })
    }
}

/// Mints a one-hour access token for `user_id` signed with [`ACCESS_KEY`].
pub fn access_token(user_id: &str) -> String {
    let claims = AccessClaims {
        id: user_id.to_string(),
        exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(ACCESS_KEY.as_bytes()),
    )
    .expect("HS256 encoding with a static key")
}

/// Sends one request through `router` and returns the status and JSON body
/// (`Value::Null` for an empty body).
pub async fn call(
    router: &Router,
    method: Method,
    uri: &str,
    user: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    call_raw(router, method, uri, user, body.map(|b| b.to_string())).await
}

/// Like [`call`], but sends `body` verbatim as `application/json`.
pub async fn call_raw(
    router: &Router,
    method: Method,
    uri: &str,
    user: Option<&str>,
    body: Option<String>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", access_token(user)));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body)),
        None => builder.body(Body::empty()),
    }
    .expect("valid test request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, json)
}
