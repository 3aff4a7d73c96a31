use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::payload::{require_present, required_strings, PayloadMessages};
use crate::error::Result;

const NEW_THREAD_MESSAGES: PayloadMessages = PayloadMessages {
    missing: "harus mengirimkan title dan body",
    wrong_type: "tipe data pada thread tidak valid",
};

const ADDED_THREAD_MISSING: &str = "thread baru tidak memiliki properti yang dibutuhkan";

/// A validated request to open a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
}

impl NewThread {
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let mut fields = required_strings(payload, &["title", "body"], &NEW_THREAD_MESSAGES)?;
        let body = fields.pop().unwrap_or_default();
        let title = fields.pop().unwrap_or_default();
        Ok(Self { title, body })
    }
}

/// The thread as acknowledged by the store right after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    pub fn new(id: impl Into<String>, title: impl Into<String>, owner: impl Into<String>) -> Result<Self> {
        let (id, title, owner) = (id.into(), title.into(), owner.into());
        require_present(&[&id, &title, &owner], ADDED_THREAD_MISSING)?;
        Ok(Self { id, title, owner })
    }
}

/// A thread as read back, with the owner's username denormalized in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}
