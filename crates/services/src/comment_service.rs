use std::sync::Arc;

use domains::{AddedComment, CommentRepository, NewComment, Result, ThreadRepository};
use serde_json::Value;
use tracing::{info, instrument};

pub struct CommentService {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(threads: Arc<dyn ThreadRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { threads, comments }
    }

    #[instrument(skip(self, payload))]
    pub async fn add_comment(&self, thread_id: &str, payload: &Value, owner: &str) -> Result<AddedComment> {
        let new_comment = NewComment::from_payload(payload)?;
        self.threads.verify_thread(thread_id).await?;

        let added = self.comments.add_comment_to_thread(thread_id, new_comment, owner).await?;
        info!(comment_id = %added.id, "comment added");
        Ok(added)
    }

    /// Soft-deletes a comment. The comment must sit under `thread_id`;
    /// ownership is checked by the store before the flag flips.
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, thread_id: &str, comment_id: &str, user_id: &str) -> Result<()> {
        self.threads.verify_thread(thread_id).await?;
        self.comments.verify_comment_location(comment_id, thread_id).await?;
        self.comments.delete_comment_by_id(comment_id, user_id).await?;
        info!("comment soft-deleted");
        Ok(())
    }
}
