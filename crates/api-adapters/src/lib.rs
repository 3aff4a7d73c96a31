//! # api-adapters
//!
//! The HTTP routing and orchestration layer of the forum. Handlers translate
//! requests into service calls and map `DomainError` kinds onto status codes.

#[cfg(feature = "web-axum")]
pub mod error;
#[cfg(feature = "web-axum")]
pub mod extract;
#[cfg(feature = "web-axum")]
pub mod handlers;
#[cfg(feature = "web-axum")]
pub mod middleware;
pub mod response;
#[cfg(feature = "web-axum")]
pub mod state;

#[cfg(feature = "web-axum")]
pub use state::AppState;

#[cfg(feature = "web-axum")]
use axum::{
    routing::{delete, get, post, put},
    Router,
};

/// Builds the forum router.
///
/// Mounted at the root by the binary; nest it under a prefix (e.g. `/api`)
/// with `Router::nest` if needed.
#[cfg(feature = "web-axum")]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/threads", post(handlers::add_thread))
        .route("/threads/{thread_id}", get(handlers::thread_detail))
        .route("/threads/{thread_id}/comments", post(handlers::add_comment))
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(handlers::delete_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(handlers::add_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(handlers::delete_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/likes",
            put(handlers::toggle_like),
        )
        .layer(middleware::cors_policy())
        .layer(middleware::trace_layer())
        .with_state(state)
}
