use std::sync::Arc;

use domains::{AddedReply, CommentRepository, NewReply, ReplyRepository, Result, ThreadRepository};
use serde_json::Value;
use tracing::{info, instrument};

pub struct ReplyService {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
    replies: Arc<dyn ReplyRepository>,
}

impl ReplyService {
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        replies: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            threads,
            comments,
            replies,
        }
    }

    #[instrument(skip(self, payload))]
    pub async fn add_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        payload: &Value,
        owner: &str,
    ) -> Result<AddedReply> {
        let new_reply = NewReply::from_payload(payload)?;
        self.threads.verify_thread(thread_id).await?;
        self.comments.verify_comment_location(comment_id, thread_id).await?;

        let added = self.replies.add_reply_to_comment(comment_id, new_reply, owner).await?;
        info!(reply_id = %added.id, "reply added");
        Ok(added)
    }

    #[instrument(skip(self))]
    pub async fn delete_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
        user_id: &str,
    ) -> Result<()> {
        self.threads.verify_thread(thread_id).await?;
        self.comments.verify_comment_location(comment_id, thread_id).await?;
        self.replies.verify_reply_location(reply_id, comment_id).await?;
        self.replies.delete_reply(reply_id, user_id).await?;
        info!("reply soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::{DomainError, MockCommentRepository, MockReplyRepository, MockThreadRepository};
    use mockall::Sequence;
    use serde_json::json;

    fn service(
        threads: MockThreadRepository,
        comments: MockCommentRepository,
        replies: MockReplyRepository,
    ) -> ReplyService {
        ReplyService::new(Arc::new(threads), Arc::new(comments), Arc::new(replies))
    }

    #[tokio::test]
    async fn add_reply_checks_thread_then_comment_location() {
        let mut seq = Sequence::new();
        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_thread()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let mut comments = MockCommentRepository::new();
        comments
            .expect_verify_comment_location()
            .withf(|comment_id, thread_id| comment_id == "comment-123" && thread_id == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        let mut replies = MockReplyRepository::new();
        replies
            .expect_add_reply_to_comment()
            .withf(|comment_id, r, owner| comment_id == "comment-123" && r.content == "sebuah balasan" && owner == "user-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, r, owner| AddedReply::new("reply-123", r.content, owner));

        let added = service(threads, comments, replies)
            .add_reply("thread-123", "comment-123", &json!({ "content": "sebuah balasan" }), "user-123")
            .await
            .unwrap();

        assert_eq!(added, AddedReply::new("reply-123", "sebuah balasan", "user-123").unwrap());
    }

    #[tokio::test]
    async fn add_reply_under_comment_of_other_thread_is_not_found() {
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_thread().returning(|_| Ok(()));
        let mut comments = MockCommentRepository::new();
        comments
            .expect_verify_comment_location()
            .returning(|_, _| Err(DomainError::comment_not_in_thread()));
        let mut replies = MockReplyRepository::new();
        replies.expect_add_reply_to_comment().never();

        let err = service(threads, comments, replies)
            .add_reply("thread-123", "comment-999", &json!({ "content": "x" }), "user-123")
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::NotFound("komentar tidak ditemukan pada thread ini".into()));
    }

    #[tokio::test]
    async fn add_reply_rejects_bad_payload() {
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_thread().never();

        let err = service(threads, MockCommentRepository::new(), MockReplyRepository::new())
            .add_reply("thread-123", "comment-123", &json!({ "content": 1 }), "user-123")
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::Payload("tipe data pada balasan tidak valid".into()));
    }

    #[tokio::test]
    async fn delete_reply_runs_checks_outer_scope_first() {
        let mut seq = Sequence::new();
        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_thread()
            .withf(|id| id == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let mut comments = MockCommentRepository::new();
        comments
            .expect_verify_comment_location()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        let mut replies = MockReplyRepository::new();
        replies
            .expect_verify_reply_location()
            .withf(|reply_id, comment_id| reply_id == "reply-123" && comment_id == "comment-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        replies
            .expect_delete_reply()
            .withf(|reply_id, user_id| reply_id == "reply-123" && user_id == "user-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        service(threads, comments, replies)
            .delete_reply("thread-123", "comment-123", "reply-123", "user-123")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_reply_on_missing_thread_skips_inner_checks() {
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_thread().returning(|_| Err(DomainError::thread_not_found()));
        let mut comments = MockCommentRepository::new();
        comments.expect_verify_comment_location().never();
        let mut replies = MockReplyRepository::new();
        replies.expect_verify_reply_location().never();
        replies.expect_delete_reply().never();

        let err = service(threads, comments, replies)
            .delete_reply("thread-404", "comment-404", "reply-404", "user-123")
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::thread_not_found());
    }

    #[tokio::test]
    async fn delete_reply_by_non_owner_is_forbidden() {
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_thread().returning(|_| Ok(()));
        let mut comments = MockCommentRepository::new();
        comments.expect_verify_comment_location().returning(|_, _| Ok(()));
        let mut replies = MockReplyRepository::new();
        replies.expect_verify_reply_location().returning(|_, _| Ok(()));
        replies.expect_delete_reply().returning(|_, _| Err(DomainError::access_denied()));

        let err = service(threads, comments, replies)
            .delete_reply("thread-123", "comment-123", "reply-123", "user-456")
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::access_denied());
    }
}
