//! # Postgres store
//!
//! Maps the relational model onto the domain models with runtime-checked
//! `sqlx` queries. Creating the schema is outside this crate; the queries
//! expect:
//!
//! ```sql
//! CREATE TABLE users    (id TEXT PRIMARY KEY, username TEXT NOT NULL UNIQUE);
//! CREATE TABLE threads  (id TEXT PRIMARY KEY, title TEXT NOT NULL, body TEXT NOT NULL,
//!                        owner TEXT NOT NULL REFERENCES users(id),
//!                        date TIMESTAMPTZ NOT NULL DEFAULT now());
//! CREATE TABLE comments (id TEXT PRIMARY KEY, thread_id TEXT NOT NULL REFERENCES threads(id),
//!                        content TEXT NOT NULL, owner TEXT NOT NULL REFERENCES users(id),
//!                        date TIMESTAMPTZ NOT NULL DEFAULT now(),
//!                        is_deleted BOOLEAN NOT NULL DEFAULT FALSE);
//! CREATE TABLE replies  (id TEXT PRIMARY KEY, comment_id TEXT NOT NULL REFERENCES comments(id),
//!                        content TEXT NOT NULL, owner TEXT NOT NULL REFERENCES users(id),
//!                        date TIMESTAMPTZ NOT NULL DEFAULT now(),
//!                        is_deleted BOOLEAN NOT NULL DEFAULT FALSE);
//! CREATE TABLE comment_likes (id TEXT PRIMARY KEY, comment_id TEXT NOT NULL REFERENCES comments(id),
//!                        owner TEXT NOT NULL REFERENCES users(id), UNIQUE (comment_id, owner));
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domains::{
    AddedComment, AddedReply, AddedThread, CommentRepository, DomainError, LikeRepository,
    ModelComment, ModelReply, NewComment, NewReply, NewThread, ReplyRepository, Result, Thread,
    ThreadRepository,
};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::{debug, error};

use crate::new_id;

pub struct PostgresForumStore {
    pool: PgPool,
}

/// Any driver failure surfaces as an internal error; the detail is logged here
/// and never shown to clients.
fn db_error(e: sqlx::Error) -> DomainError {
    error!(error = %e, "database query failed");
    DomainError::Internal(e.to_string())
}

/// `LEFT JOIN users` yields NULL for unknown owners; fall back to the owner id.
fn username_or_owner(row: &PgRow) -> Result<String> {
    let username: Option<String> = row.try_get("username").map_err(db_error)?;
    match username {
        Some(name) => Ok(name),
        None => row.try_get("owner").map_err(db_error),
    }
}

impl PostgresForumStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(db_error)?;
        Ok(Self::new(pool))
    }

    fn model_comment(row: &PgRow) -> Result<ModelComment> {
        ModelComment::new(
            row.try_get::<String, _>("id").map_err(db_error)?,
            username_or_owner(row)?,
            row.try_get::<DateTime<Utc>, _>("date").map_err(db_error)?,
            row.try_get::<String, _>("content").map_err(db_error)?,
            row.try_get::<bool, _>("is_deleted").map_err(db_error)?,
        )
    }

    fn model_reply(row: &PgRow) -> Result<ModelReply> {
        ModelReply::new(
            row.try_get::<String, _>("id").map_err(db_error)?,
            username_or_owner(row)?,
            row.try_get::<DateTime<Utc>, _>("date").map_err(db_error)?,
            row.try_get::<String, _>("content").map_err(db_error)?,
            row.try_get::<bool, _>("is_deleted").map_err(db_error)?,
        )
    }

    /// Shared owner check for the `comments` and `replies` tables.
    async fn verify_owner(
        &self,
        query: &'static str,
        id: &str,
        user_id: &str,
        not_found: fn() -> DomainError,
    ) -> Result<()> {
        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .ok_or_else(not_found)?;

        let owner: String = row.try_get("owner").map_err(db_error)?;
        if owner != user_id {
            return Err(DomainError::access_denied());
        }
        Ok(())
    }

    /// Shared parent check: `NotFound` when absent, `misplaced` when the parent differs.
    async fn verify_parent(
        &self,
        query: &'static str,
        id: &str,
        parent_id: &str,
        not_found: fn() -> DomainError,
        misplaced: fn() -> DomainError,
    ) -> Result<()> {
        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .ok_or_else(not_found)?;

        let actual: String = row.try_get("parent_id").map_err(db_error)?;
        if actual != parent_id {
            return Err(misplaced());
        }
        Ok(())
    }
}

#[async_trait]
impl ThreadRepository for PostgresForumStore {
    async fn add_thread(&self, new_thread: NewThread, owner: &str) -> Result<AddedThread> {
        let row = sqlx::query(
            "INSERT INTO threads (id, title, body, owner) VALUES ($1, $2, $3, $4) RETURNING id, title, owner",
        )
        .bind(new_id("thread"))
        .bind(new_thread.title)
        .bind(new_thread.body)
        .bind(owner)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        AddedThread::new(
            row.try_get::<String, _>("id").map_err(db_error)?,
            row.try_get::<String, _>("title").map_err(db_error)?,
            row.try_get::<String, _>("owner").map_err(db_error)?,
        )
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Thread> {
        let row = sqlx::query(
            "SELECT threads.id, threads.title, threads.body, threads.date, threads.owner, users.username
             FROM threads LEFT JOIN users ON threads.owner = users.id
             WHERE threads.id = $1",
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?
        .ok_or_else(DomainError::thread_not_found)?;

        Ok(Thread {
            id: row.try_get("id").map_err(db_error)?,
            title: row.try_get("title").map_err(db_error)?,
            body: row.try_get("body").map_err(db_error)?,
            date: row.try_get("date").map_err(db_error)?,
            username: username_or_owner(&row)?,
        })
    }

    async fn verify_thread(&self, thread_id: &str) -> Result<()> {
        sqlx::query("SELECT id FROM threads WHERE id = $1")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .map(|_| ())
            .ok_or_else(DomainError::thread_not_found)
    }
}

#[async_trait]
impl CommentRepository for PostgresForumStore {
    async fn add_comment_to_thread(
        &self,
        thread_id: &str,
        new_comment: NewComment,
        owner: &str,
    ) -> Result<AddedComment> {
        let row = sqlx::query(
            "INSERT INTO comments (id, thread_id, content, owner) VALUES ($1, $2, $3, $4)
             RETURNING id, content, owner",
        )
        .bind(new_id("comment"))
        .bind(thread_id)
        .bind(new_comment.content)
        .bind(owner)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        AddedComment::new(
            row.try_get::<String, _>("id").map_err(db_error)?,
            row.try_get::<String, _>("content").map_err(db_error)?,
            row.try_get::<String, _>("owner").map_err(db_error)?,
        )
    }

    async fn verify_comment_access(&self, comment_id: &str, user_id: &str) -> Result<()> {
        self.verify_owner(
            "SELECT owner FROM comments WHERE id = $1",
            comment_id,
            user_id,
            DomainError::comment_not_found,
        )
        .await
    }

    async fn delete_comment_by_id(&self, comment_id: &str, user_id: &str) -> Result<()> {
        self.verify_comment_access(comment_id, user_id).await?;

        sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        debug!(comment_id, "comment flagged as deleted");
        Ok(())
    }

    async fn comments_from_thread(&self, thread_id: &str) -> Result<Vec<ModelComment>> {
        sqlx::query(
            "SELECT comments.id, comments.owner, users.username, comments.date,
                    comments.content, comments.is_deleted
             FROM comments LEFT JOIN users ON comments.owner = users.id
             WHERE comments.thread_id = $1
             ORDER BY comments.date ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?
        .iter()
        .map(Self::model_comment)
        .collect()
    }

    async fn verify_comment_location(&self, comment_id: &str, thread_id: &str) -> Result<()> {
        self.verify_parent(
            "SELECT thread_id AS parent_id FROM comments WHERE id = $1",
            comment_id,
            thread_id,
            DomainError::comment_not_found,
            DomainError::comment_not_in_thread,
        )
        .await
    }
}

#[async_trait]
impl ReplyRepository for PostgresForumStore {
    async fn add_reply_to_comment(
        &self,
        comment_id: &str,
        new_reply: NewReply,
        owner: &str,
    ) -> Result<AddedReply> {
        let row = sqlx::query(
            "INSERT INTO replies (id, comment_id, content, owner) VALUES ($1, $2, $3, $4)
             RETURNING id, content, owner",
        )
        .bind(new_id("reply"))
        .bind(comment_id)
        .bind(new_reply.content)
        .bind(owner)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        AddedReply::new(
            row.try_get::<String, _>("id").map_err(db_error)?,
            row.try_get::<String, _>("content").map_err(db_error)?,
            row.try_get::<String, _>("owner").map_err(db_error)?,
        )
    }

    async fn verify_reply_access(&self, reply_id: &str, user_id: &str) -> Result<()> {
        self.verify_owner(
            "SELECT owner FROM replies WHERE id = $1",
            reply_id,
            user_id,
            DomainError::reply_not_found,
        )
        .await
    }

    async fn delete_reply(&self, reply_id: &str, user_id: &str) -> Result<()> {
        self.verify_reply_access(reply_id, user_id).await?;

        sqlx::query("UPDATE replies SET is_deleted = TRUE WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        debug!(reply_id, "reply flagged as deleted");
        Ok(())
    }

    async fn replies_from_comment(&self, comment_id: &str) -> Result<Vec<ModelReply>> {
        sqlx::query(
            "SELECT replies.id, replies.owner, users.username, replies.date,
                    replies.content, replies.is_deleted
             FROM replies LEFT JOIN users ON replies.owner = users.id
             WHERE replies.comment_id = $1
             ORDER BY replies.date ASC",
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?
        .iter()
        .map(Self::model_reply)
        .collect()
    }

    async fn verify_reply_location(&self, reply_id: &str, comment_id: &str) -> Result<()> {
        self.verify_parent(
            "SELECT comment_id AS parent_id FROM replies WHERE id = $1",
            reply_id,
            comment_id,
            DomainError::reply_not_found,
            DomainError::reply_not_in_comment,
        )
        .await
    }
}

#[async_trait]
impl LikeRepository for PostgresForumStore {
    async fn is_comment_liked(&self, comment_id: &str, owner: &str) -> Result<bool> {
        let row = sqlx::query("SELECT id FROM comment_likes WHERE comment_id = $1 AND owner = $2")
            .bind(comment_id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(row.is_some())
    }

    async fn add_like(&self, comment_id: &str, owner: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO comment_likes (id, comment_id, owner) VALUES ($1, $2, $3)
             ON CONFLICT (comment_id, owner) DO NOTHING",
        )
        .bind(new_id("like"))
        .bind(comment_id)
        .bind(owner)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;
        Ok(())
    }

    async fn remove_like(&self, comment_id: &str, owner: &str) -> Result<()> {
        sqlx::query("DELETE FROM comment_likes WHERE comment_id = $1 AND owner = $2")
            .bind(comment_id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn like_count(&self, comment_id: &str) -> Result<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS like_count FROM comment_likes WHERE comment_id = $1")
            .bind(comment_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;
        let count: i64 = row.try_get("like_count").map_err(db_error)?;
        u64::try_from(count).map_err(|e| DomainError::Internal(e.to_string()))
    }
}
