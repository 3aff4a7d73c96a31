//! # In-memory store
//!
//! `DashMap`-backed implementation of every repository port. Rows are kept
//! raw (content plus deletion flag) and only projected through the
//! visibility transform on the way out, exactly like the SQL adapter.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use domains::{
    AddedComment, AddedReply, AddedThread, CommentRepository, DomainError, Like, LikeRepository,
    ModelComment, ModelReply, NewComment, NewReply, NewThread, ReplyRepository, Result, Thread,
    ThreadRepository,
};
use tracing::debug;

use crate::new_id;

#[derive(Debug, Clone)]
struct ThreadRow {
    id: String,
    title: String,
    body: String,
    owner: String,
    date: DateTime<Utc>,
}

/// Shared row shape for comments (parent = thread) and replies (parent = comment).
#[derive(Debug, Clone)]
struct PostRow {
    id: String,
    parent_id: String,
    content: String,
    owner: String,
    date: DateTime<Utc>,
    is_deleted: bool,
    seq: u64,
}

#[derive(Default)]
pub struct InMemoryForumStore {
    users: DashMap<String, String>,
    threads: DashMap<String, ThreadRow>,
    comments: DashMap<String, PostRow>,
    replies: DashMap<String, PostRow>,
    /// Keyed by (comment id, owner) so a pair can only exist once.
    likes: DashMap<(String, String), Like>,
    seq: AtomicU64,
}

impl InMemoryForumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `username` resolvable for rows owned by `user_id`.
    pub fn register_user(&self, user_id: impl Into<String>, username: impl Into<String>) {
        self.users.insert(user_id.into(), username.into());
    }

    /// Unknown owners fall back to their id, like a `LEFT JOIN users` miss.
    fn username_of(&self, user_id: &str) -> String {
        self.users
            .get(user_id)
            .map(|u| u.value().clone())
            .unwrap_or_else(|| user_id.to_string())
    }

    fn new_post(&self, prefix: &str, parent_id: &str, content: String, owner: &str) -> PostRow {
        PostRow {
            id: new_id(prefix),
            parent_id: parent_id.to_string(),
            content,
            owner: owner.to_string(),
            date: Utc::now(),
            is_deleted: false,
            seq: self.seq.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Children of `parent_id` in ascending (date, insertion) order.
    fn children_of(rows: &DashMap<String, PostRow>, parent_id: &str) -> Vec<PostRow> {
        let mut children: Vec<PostRow> = rows
            .iter()
            .filter(|r| r.parent_id == parent_id)
            .map(|r| r.value().clone())
            .collect();
        children.sort_by_key(|r| (r.date, r.seq));
        children
    }

    fn verify_access(
        rows: &DashMap<String, PostRow>,
        id: &str,
        user_id: &str,
        not_found: fn() -> DomainError,
    ) -> Result<()> {
        let row = rows.get(id).ok_or_else(not_found)?;
        if row.owner != user_id {
            return Err(DomainError::access_denied());
        }
        Ok(())
    }

    fn mark_deleted(rows: &DashMap<String, PostRow>, id: &str) {
        if let Some(mut row) = rows.get_mut(id) {
            row.is_deleted = true;
        }
    }
}

#[async_trait]
impl ThreadRepository for InMemoryForumStore {
    async fn add_thread(&self, new_thread: NewThread, owner: &str) -> Result<AddedThread> {
        let row = ThreadRow {
            id: new_id("thread"),
            title: new_thread.title,
            body: new_thread.body,
            owner: owner.to_string(),
            date: Utc::now(),
        };
        let added = AddedThread::new(row.id.clone(), row.title.clone(), row.owner.clone())?;
        self.threads.insert(row.id.clone(), row);
        Ok(added)
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Thread> {
        let row = self
            .threads
            .get(thread_id)
            .map(|r| r.value().clone())
            .ok_or_else(DomainError::thread_not_found)?;
        Ok(Thread {
            username: self.username_of(&row.owner),
            id: row.id,
            title: row.title,
            body: row.body,
            date: row.date,
        })
    }

    async fn verify_thread(&self, thread_id: &str) -> Result<()> {
        if !self.threads.contains_key(thread_id) {
            return Err(DomainError::thread_not_found());
        }
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryForumStore {
    async fn add_comment_to_thread(
        &self,
        thread_id: &str,
        new_comment: NewComment,
        owner: &str,
    ) -> Result<AddedComment> {
        let row = self.new_post("comment", thread_id, new_comment.content, owner);
        let added = AddedComment::new(row.id.clone(), row.content.clone(), row.owner.clone())?;
        self.comments.insert(row.id.clone(), row);
        Ok(added)
    }

    async fn verify_comment_access(&self, comment_id: &str, user_id: &str) -> Result<()> {
        Self::verify_access(&self.comments, comment_id, user_id, DomainError::comment_not_found)
    }

    async fn delete_comment_by_id(&self, comment_id: &str, user_id: &str) -> Result<()> {
        self.verify_comment_access(comment_id, user_id).await?;
        Self::mark_deleted(&self.comments, comment_id);
        debug!(comment_id, "comment flagged as deleted");
        Ok(())
    }

    async fn comments_from_thread(&self, thread_id: &str) -> Result<Vec<ModelComment>> {
        Self::children_of(&self.comments, thread_id)
            .into_iter()
            .map(|r| ModelComment::new(r.id, self.username_of(&r.owner), r.date, r.content, r.is_deleted))
            .collect()
    }

    async fn verify_comment_location(&self, comment_id: &str, thread_id: &str) -> Result<()> {
        let row = self
            .comments
            .get(comment_id)
            .ok_or_else(DomainError::comment_not_found)?;
        if row.parent_id != thread_id {
            return Err(DomainError::comment_not_in_thread());
        }
        Ok(())
    }
}

#[async_trait]
impl ReplyRepository for InMemoryForumStore {
    async fn add_reply_to_comment(
        &self,
        comment_id: &str,
        new_reply: NewReply,
        owner: &str,
    ) -> Result<AddedReply> {
        let row = self.new_post("reply", comment_id, new_reply.content, owner);
        let added = AddedReply::new(row.id.clone(), row.content.clone(), row.owner.clone())?;
        self.replies.insert(row.id.clone(), row);
        Ok(added)
    }

    async fn verify_reply_access(&self, reply_id: &str, user_id: &str) -> Result<()> {
        Self::verify_access(&self.replies, reply_id, user_id, DomainError::reply_not_found)
    }

    async fn delete_reply(&self, reply_id: &str, user_id: &str) -> Result<()> {
        self.verify_reply_access(reply_id, user_id).await?;
        Self::mark_deleted(&self.replies, reply_id);
        debug!(reply_id, "reply flagged as deleted");
        Ok(())
    }

    async fn replies_from_comment(&self, comment_id: &str) -> Result<Vec<ModelReply>> {
        Self::children_of(&self.replies, comment_id)
            .into_iter()
            .map(|r| ModelReply::new(r.id, self.username_of(&r.owner), r.date, r.content, r.is_deleted))
            .collect()
    }

    async fn verify_reply_location(&self, reply_id: &str, comment_id: &str) -> Result<()> {
        let row = self.replies.get(reply_id).ok_or_else(DomainError::reply_not_found)?;
        if row.parent_id != comment_id {
            return Err(DomainError::reply_not_in_comment());
        }
        Ok(())
    }
}

#[async_trait]
impl LikeRepository for InMemoryForumStore {
    async fn is_comment_liked(&self, comment_id: &str, owner: &str) -> Result<bool> {
        Ok(self
            .likes
            .contains_key(&(comment_id.to_string(), owner.to_string())))
    }

    async fn add_like(&self, comment_id: &str, owner: &str) -> Result<()> {
        let key = (comment_id.to_string(), owner.to_string());
        self.likes.entry(key).or_insert_with(|| Like {
            id: new_id("like"),
            comment_id: comment_id.to_string(),
            owner: owner.to_string(),
        });
        Ok(())
    }

    async fn remove_like(&self, comment_id: &str, owner: &str) -> Result<()> {
        self.likes.remove(&(comment_id.to_string(), owner.to_string()));
        Ok(())
    }

    async fn like_count(&self, comment_id: &str) -> Result<u64> {
        Ok(self.likes.iter().filter(|l| l.comment_id == comment_id).count() as u64)
    }
}
