//! Thread creation and the thread-detail aggregator.

use std::sync::Arc;

use domains::{
    AddedThread, CommentDetail, CommentRepository, LikeRepository, ModelComment, NewThread,
    ReplyRepository, Result, ThreadDetail, ThreadRepository,
};
use futures::future::try_join_all;
use serde_json::Value;
use tracing::{debug, info, instrument};

pub struct ThreadService {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
    replies: Arc<dyn ReplyRepository>,
    likes: Arc<dyn LikeRepository>,
}

impl ThreadService {
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        replies: Arc<dyn ReplyRepository>,
        likes: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            threads,
            comments,
            replies,
            likes,
        }
    }

    #[instrument(skip(self, payload))]
    pub async fn add_thread(&self, payload: &Value, owner: &str) -> Result<AddedThread> {
        let new_thread = NewThread::from_payload(payload)?;
        let added = self.threads.add_thread(new_thread, owner).await?;
        info!(thread_id = %added.id, "thread created");
        Ok(added)
    }

    /// Assembles a thread with its comments, each comment's replies and like
    /// count.
    ///
    /// Comments keep the chronological order returned by the store. The
    /// per-comment lookups run concurrently; the first failure aborts the
    /// whole read.
    #[instrument(skip(self))]
    pub async fn thread_detail(&self, thread_id: &str) -> Result<ThreadDetail> {
        let thread = self.threads.get_thread_by_id(thread_id).await?;
        let comments = self.comments.comments_from_thread(thread_id).await?;
        debug!(count = comments.len(), "fetching replies and likes per comment");

        let comments = try_join_all(comments.into_iter().map(|c| self.comment_detail(c))).await?;

        Ok(ThreadDetail { thread, comments })
    }

    async fn comment_detail(&self, comment: ModelComment) -> Result<CommentDetail> {
        let (replies, like_count) = futures::try_join!(
            self.replies.replies_from_comment(comment.id()),
            self.likes.like_count(comment.id()),
        )?;
        Ok(CommentDetail {
            comment,
            like_count,
            replies,
        })
    }
}
