//! JSON envelopes shared by every endpoint.
//!
//! Success: `{"status":"success","data":{...}}` (no `data` for bare
//! acknowledgements). Failure: `{"status":"fail"|"error","message":"..."}`.

use domains::{AddedComment, AddedReply, AddedThread, ThreadDetail};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn ok() -> Self {
        Self {
            status: "success",
            data: None,
            message: None,
        }
    }

    /// Client-side failure (4xx).
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "fail",
            data: None,
            message: Some(message.into()),
        }
    }

    /// Server-side failure (5xx).
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            data: None,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadData {
    pub added_thread: AddedThread,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentData {
    pub added_comment: AddedComment,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedReplyData {
    pub added_reply: AddedReply,
}

#[derive(Debug, Serialize)]
pub struct ThreadData {
    pub thread: ThreadDetail,
}
