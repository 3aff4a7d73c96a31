//! # Core Traits (Ports)
//!
//! Any storage or auth adapter must implement these traits to be used by the
//! services. Every call is assumed atomic; adapters own transactional
//! guarantees.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    AddedComment, AddedReply, AddedThread, ModelComment, ModelReply, NewComment, NewReply,
    NewThread, Thread,
};

/// Persistence contract for threads.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, new_thread: NewThread, owner: &str) -> Result<AddedThread>;

    /// Fails with `NotFound("thread tidak ditemukan")` when absent.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Thread>;

    /// Existence check only; same failure as `get_thread_by_id`.
    async fn verify_thread(&self, thread_id: &str) -> Result<()>;
}

/// Persistence contract for comments.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment_to_thread(
        &self,
        thread_id: &str,
        new_comment: NewComment,
        owner: &str,
    ) -> Result<AddedComment>;

    /// `NotFound` when the comment is absent, `Authorization` when `user_id`
    /// is not its owner.
    async fn verify_comment_access(&self, comment_id: &str, user_id: &str) -> Result<()>;

    /// Runs `verify_comment_access`, then flips `is_deleted`.
    async fn delete_comment_by_id(&self, comment_id: &str, user_id: &str) -> Result<()>;

    /// All comments of the thread in ascending creation order, deleted ones
    /// included but masked.
    async fn comments_from_thread(&self, thread_id: &str) -> Result<Vec<ModelComment>>;

    /// `NotFound("komentar tidak ditemukan")` when absent,
    /// `NotFound("komentar tidak ditemukan pada thread ini")` when it lives
    /// under another thread.
    async fn verify_comment_location(&self, comment_id: &str, thread_id: &str) -> Result<()>;
}

/// Persistence contract for replies. Mirrors [`CommentRepository`].
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply_to_comment(
        &self,
        comment_id: &str,
        new_reply: NewReply,
        owner: &str,
    ) -> Result<AddedReply>;

    async fn verify_reply_access(&self, reply_id: &str, user_id: &str) -> Result<()>;

    /// Runs `verify_reply_access`, then flips `is_deleted`.
    async fn delete_reply(&self, reply_id: &str, user_id: &str) -> Result<()>;

    async fn replies_from_comment(&self, comment_id: &str) -> Result<Vec<ModelReply>>;

    /// `NotFound` when the reply is absent or hangs under another comment.
    async fn verify_reply_location(&self, reply_id: &str, comment_id: &str) -> Result<()>;
}

/// Persistence contract for comment likes. A (comment, owner) pair is either
/// present or absent; there is no counter to increment.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn is_comment_liked(&self, comment_id: &str, owner: &str) -> Result<bool>;
    async fn add_like(&self, comment_id: &str, owner: &str) -> Result<()>;
    async fn remove_like(&self, comment_id: &str, owner: &str) -> Result<()>;
    async fn like_count(&self, comment_id: &str) -> Result<u64>;
}

/// Identity contract: turns a bearer access token into a user id.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AccessTokenVerifier: Send + Sync {
    /// Fails with `Authentication` for expired, forged or malformed tokens.
    fn verify(&self, token: &str) -> Result<String>;
}
