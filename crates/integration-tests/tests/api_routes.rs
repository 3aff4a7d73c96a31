//! Status codes and envelopes of every forum route.

use axum::http::{Method, StatusCode};
use axum::Router;
use integration_tests::{call, call_raw, TestForum};
use serde_json::json;

fn app() -> Router {
    TestForum::new().router()
}

async fn create_thread(app: &Router) -> String {
    let (status, body) = call(
        app,
        Method::POST,
        "/threads",
        Some("user-1"),
        Some(json!({ "title": "sebuah thread", "body": "sebuah body thread" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["addedThread"]["id"].as_str().unwrap().to_string()
}

async fn create_comment(app: &Router, thread_id: &str, user: &str) -> String {
    let (status, body) = call(
        app,
        Method::POST,
        &format!("/threads/{thread_id}/comments"),
        Some(user),
        Some(json!({ "content": "sebuah komentar" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["addedComment"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn post_thread_returns_added_thread() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/threads",
        Some("user-1"),
        Some(json!({ "title": "sebuah thread", "body": "sebuah body thread" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["addedThread"]["title"], "sebuah thread");
    assert_eq!(body["data"]["addedThread"]["owner"], "user-1");
}

#[tokio::test]
async fn post_thread_without_token_is_401() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/threads",
        None,
        Some(json!({ "title": "t", "body": "b" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing authentication");
}

#[tokio::test]
async fn post_thread_with_bad_payload_is_400() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/threads",
        Some("user-1"),
        Some(json!({ "title": "A thread", "body": ["not", "a", "string"] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "tipe data pada thread tidak valid");
}

#[tokio::test]
async fn malformed_json_body_is_400() {
    let app = app();
    let (status, body) = call_raw(
        &app,
        Method::POST,
        "/threads",
        Some("user-1"),
        Some("{not json".to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn comment_on_missing_thread_is_404() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/threads/thread-404/comments",
        Some("user-1"),
        Some(json!({ "content": "halo" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "thread tidak ditemukan");
}

#[tokio::test]
async fn comment_with_numeric_content_is_400() {
    let app = app();
    let thread_id = create_thread(&app).await;
    let (status, body) = call(
        &app,
        Method::POST,
        &format!("/threads/{thread_id}/comments"),
        Some("user-1"),
        Some(json!({ "content": 400 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "tipe data pada comment tidak valid");
}

#[tokio::test]
async fn deleting_someone_elses_comment_is_403() {
    let app = app();
    let thread_id = create_thread(&app).await;
    let comment_id = create_comment(&app, &thread_id, "user-1").await;

    let (status, body) = call(
        &app,
        Method::DELETE,
        &format!("/threads/{thread_id}/comments/{comment_id}"),
        Some("user-2"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "anda tidak dapat mengakses resource ini");
}

#[tokio::test]
async fn deleting_unknown_comment_is_404() {
    let app = app();
    let thread_id = create_thread(&app).await;

    let (status, body) = call(
        &app,
        Method::DELETE,
        &format!("/threads/{thread_id}/comments/comment-404"),
        Some("user-1"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "komentar tidak ditemukan");
}

#[tokio::test]
async fn owner_can_delete_comment_and_detail_masks_it() {
    let app = app();
    let thread_id = create_thread(&app).await;
    let comment_id = create_comment(&app, &thread_id, "user-1").await;

    let (status, body) = call(
        &app,
        Method::DELETE,
        &format!("/threads/{thread_id}/comments/{comment_id}"),
        Some("user-1"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success" }));

    let (status, body) = call(&app, Method::GET, &format!("/threads/{thread_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["thread"]["comments"][0]["content"], "**komentar telah dihapus**");
}

#[tokio::test]
async fn reply_lifecycle_and_like_toggle() {
    let app = app();
    let thread_id = create_thread(&app).await;
    let comment_id = create_comment(&app, &thread_id, "user-1").await;

    let (status, body) = call(
        &app,
        Method::POST,
        &format!("/threads/{thread_id}/comments/{comment_id}/replies"),
        Some("user-2"),
        Some(json!({ "content": "sebuah balasan" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["addedReply"]["owner"], "user-2");
    let reply_id = body["data"]["addedReply"]["id"].as_str().unwrap().to_string();

    let like_uri = format!("/threads/{thread_id}/comments/{comment_id}/likes");
    let (status, _) = call(&app, Method::PUT, &like_uri, Some("user-2"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, Method::GET, &format!("/threads/{thread_id}"), None, None).await;
    let comment = &body["data"]["thread"]["comments"][0];
    assert_eq!(comment["likeCount"], 1);
    assert_eq!(comment["replies"][0]["content"], "sebuah balasan");
    assert_eq!(comment["replies"][0]["username"], "johndoe");

    let (status, _) = call(
        &app,
        Method::DELETE,
        &format!("/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}"),
        Some("user-2"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call(&app, Method::PUT, &like_uri, Some("user-2"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, Method::GET, &format!("/threads/{thread_id}"), None, None).await;
    let comment = &body["data"]["thread"]["comments"][0];
    assert_eq!(comment["likeCount"], 0);
    assert_eq!(comment["replies"][0]["content"], "**balasan telah dihapus**");
}

#[tokio::test]
async fn like_without_token_is_401() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::PUT,
        "/threads/thread-123/comments/comment-123/likes",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn unknown_thread_detail_is_404() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/threads/thread-123", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "thread tidak ditemukan");
}
