use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::payload::{require_present, required_strings, PayloadMessages};
use super::visibility::{visible_content, DELETED_COMMENT_PLACEHOLDER};
use crate::error::Result;

const NEW_COMMENT_MESSAGES: PayloadMessages = PayloadMessages {
    missing: "harus mengirimkan content",
    wrong_type: "tipe data pada comment tidak valid",
};

const COMMENT_MISSING: &str = "komentar tidak memiliki properti yang dibutuhkan";

/// A validated request to comment on a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
}

impl NewComment {
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let content = required_strings(payload, &["content"], &NEW_COMMENT_MESSAGES)?
            .into_iter()
            .next()
            .unwrap_or_default();
        Ok(Self { content })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    pub fn new(id: impl Into<String>, content: impl Into<String>, owner: impl Into<String>) -> Result<Self> {
        let (id, content, owner) = (id.into(), content.into(), owner.into());
        require_present(&[&id, &content, &owner], COMMENT_MISSING)?;
        Ok(Self { id, content, owner })
    }
}

/// Read-time projection of a comment.
///
/// The visibility transform runs inside [`ModelComment::new`]; once built, the
/// original text of a soft-deleted comment is gone for good.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelComment {
    id: String,
    username: String,
    date: DateTime<Utc>,
    content: String,
    #[serde(skip)]
    is_deleted: bool,
}

impl ModelComment {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        date: DateTime<Utc>,
        content: impl Into<String>,
        is_deleted: bool,
    ) -> Result<Self> {
        let (id, username, content) = (id.into(), username.into(), content.into());
        require_present(&[&id, &username, &content], COMMENT_MISSING)?;
        Ok(Self {
            id,
            username,
            date,
            content: visible_content(content, is_deleted, DELETED_COMMENT_PLACEHOLDER),
            is_deleted,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}
