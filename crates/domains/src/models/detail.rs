//! The composed read model for `GET /threads/{id}`.

use serde::Serialize;

use super::comment::ModelComment;
use super::reply::ModelReply;
use super::thread::Thread;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetail {
    #[serde(flatten)]
    pub comment: ModelComment,
    pub like_count: u64,
    pub replies: Vec<ModelReply>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    #[serde(flatten)]
    pub thread: Thread,
    pub comments: Vec<CommentDetail>,
}
