//! # Handlers
//!
//! This module coordinates the flow between HTTP requests and the services.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiError;
use crate::extract::{AuthUser, JsonPayload};
use crate::response::{AddedCommentData, AddedReplyData, AddedThreadData, ApiResponse, ThreadData};
use crate::state::AppState;

type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// `POST /threads`
pub async fn add_thread(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<AddedThreadData> {
    let added_thread = state.threads.add_thread(&payload, &owner).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedThreadData { added_thread })),
    ))
}

/// `GET /threads/{thread_id}` (public)
pub async fn thread_detail(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> ApiResult<ThreadData> {
    let thread = state.threads.thread_detail(&thread_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(ThreadData { thread }))))
}

/// `POST /threads/{thread_id}/comments`
pub async fn add_comment(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
    AuthUser(owner): AuthUser,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<AddedCommentData> {
    let added_comment = state.comments.add_comment(&thread_id, &payload, &owner).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedCommentData { added_comment })),
    ))
}

/// `DELETE /threads/{thread_id}/comments/{comment_id}`
pub async fn delete_comment(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<()> {
    state.comments.delete_comment(&thread_id, &comment_id, &user_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok())))
}

/// `POST /threads/{thread_id}/comments/{comment_id}/replies`
pub async fn add_reply(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    AuthUser(owner): AuthUser,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<AddedReplyData> {
    let added_reply = state
        .replies
        .add_reply(&thread_id, &comment_id, &payload, &owner)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedReplyData { added_reply })),
    ))
}

/// `DELETE /threads/{thread_id}/comments/{comment_id}/replies/{reply_id}`
pub async fn delete_reply(
    State(state): State<AppState>,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<()> {
    state
        .replies
        .delete_reply(&thread_id, &comment_id, &reply_id, &user_id)
        .await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok())))
}

/// `PUT /threads/{thread_id}/comments/{comment_id}/likes`
///
/// Single toggle endpoint: likes on the first call, unlikes on the next.
pub async fn toggle_like(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    AuthUser(owner): AuthUser,
) -> ApiResult<()> {
    state.likes.toggle_like(&thread_id, &comment_id, &owner).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok())))
}
