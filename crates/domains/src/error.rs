//! # DomainError
//!
//! Centralized error handling for the forum core.
//! Every use case fails with one of these kinds; the transport layer maps
//! each kind to a status code.

use thiserror::Error;

pub const THREAD_NOT_FOUND: &str = "thread tidak ditemukan";
pub const COMMENT_NOT_FOUND: &str = "komentar tidak ditemukan";
pub const COMMENT_NOT_IN_THREAD: &str = "komentar tidak ditemukan pada thread ini";
pub const REPLY_NOT_FOUND: &str = "balasan tidak ditemukan";
pub const REPLY_NOT_IN_COMMENT: &str = "balasan tidak ditemukan pada komentar ini";
pub const ACCESS_DENIED: &str = "anda tidak dapat mengakses resource ini";
pub const MISSING_AUTHENTICATION: &str = "Missing authentication";

/// The primary error type for all forum operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed, missing or mistyped input (e.g., a comment without content)
    #[error("{0}")]
    Payload(String),

    /// Referenced entity is absent or does not belong to the claimed parent
    #[error("{0}")]
    NotFound(String),

    /// Authenticated, but not the owner of the resource
    #[error("{0}")]
    Authorization(String),

    /// Missing or invalid access token
    #[error("{0}")]
    Authentication(String),

    /// Infrastructure failure (e.g., DB down). Never retried at this layer.
    #[error("internal service error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn thread_not_found() -> Self {
        Self::NotFound(THREAD_NOT_FOUND.to_string())
    }

    pub fn comment_not_found() -> Self {
        Self::NotFound(COMMENT_NOT_FOUND.to_string())
    }

    pub fn comment_not_in_thread() -> Self {
        Self::NotFound(COMMENT_NOT_IN_THREAD.to_string())
    }

    pub fn reply_not_found() -> Self {
        Self::NotFound(REPLY_NOT_FOUND.to_string())
    }

    pub fn reply_not_in_comment() -> Self {
        Self::NotFound(REPLY_NOT_IN_COMMENT.to_string())
    }

    pub fn access_denied() -> Self {
        Self::Authorization(ACCESS_DENIED.to_string())
    }

    pub fn missing_authentication() -> Self {
        Self::Authentication(MISSING_AUTHENTICATION.to_string())
    }
}

/// A specialized Result type for forum logic.
pub type Result<T> = std::result::Result<T, DomainError>;
