use std::sync::Arc;

use domains::AccessTokenVerifier;
use services::{CommentService, LikeService, ReplyService, ThreadService};

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub threads: Arc<ThreadService>,
    pub comments: Arc<CommentService>,
    pub replies: Arc<ReplyService>,
    pub likes: Arc<LikeService>,
    pub tokens: Arc<dyn AccessTokenVerifier>,
}
