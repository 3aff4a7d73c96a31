use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::payload::{require_present, required_strings, PayloadMessages};
use super::visibility::{visible_content, DELETED_REPLY_PLACEHOLDER};
use crate::error::Result;

const NEW_REPLY_MESSAGES: PayloadMessages = PayloadMessages {
    missing: "harus mengirimkan content balasan",
    wrong_type: "tipe data pada balasan tidak valid",
};

const REPLY_MISSING: &str = "balasan tidak memiliki properti yang dibutuhkan";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub content: String,
}

impl NewReply {
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let content = required_strings(payload, &["content"], &NEW_REPLY_MESSAGES)?
            .into_iter()
            .next()
            .unwrap_or_default();
        Ok(Self { content })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedReply {
    pub fn new(id: impl Into<String>, content: impl Into<String>, owner: impl Into<String>) -> Result<Self> {
        let (id, content, owner) = (id.into(), content.into(), owner.into());
        require_present(&[&id, &content, &owner], REPLY_MISSING)?;
        Ok(Self { id, content, owner })
    }
}

/// Read-time projection of a reply; same masking contract as `ModelComment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelReply {
    id: String,
    username: String,
    date: DateTime<Utc>,
    content: String,
    #[serde(skip)]
    is_deleted: bool,
}

impl ModelReply {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        date: DateTime<Utc>,
        content: impl Into<String>,
        is_deleted: bool,
    ) -> Result<Self> {
        let (id, username, content) = (id.into(), username.into(), content.into());
        require_present(&[&id, &username, &content], REPLY_MISSING)?;
        Ok(Self {
            id,
            username,
            date,
            content: visible_content(content, is_deleted, DELETED_REPLY_PLACEHOLDER),
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
