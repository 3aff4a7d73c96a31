use std::sync::Arc;

use domains::{CommentRepository, LikeRepository, LikeStatus, Result, ThreadRepository};
use tracing::{info, instrument};

pub struct LikeService {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
    likes: Arc<dyn LikeRepository>,
}

impl LikeService {
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        likes: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            threads,
            comments,
            likes,
        }
    }

    /// Likes the comment if `owner` has not liked it yet, otherwise takes the
    /// like back.
    ///
    /// The presence check and the write are two separate store calls;
    /// simultaneous toggles by the same user may interleave.
    #[instrument(skip(self))]
    pub async fn toggle_like(&self, thread_id: &str, comment_id: &str, owner: &str) -> Result<LikeStatus> {
        self.threads.verify_thread(thread_id).await?;
        self.comments.verify_comment_location(comment_id, thread_id).await?;

        let status = if self.likes.is_comment_liked(comment_id, owner).await? {
            self.likes.remove_like(comment_id, owner).await?;
            LikeStatus::Unliked
        } else {
            self.likes.add_like(comment_id, owner).await?;
            LikeStatus::Liked
        };

        info!(?status, "like toggled");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::{DomainError, MockCommentRepository, MockLikeRepository, MockThreadRepository};

    fn scope_ok() -> (MockThreadRepository, MockCommentRepository) {
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_thread().returning(|_| Ok(()));
        let mut comments = MockCommentRepository::new();
        comments.expect_verify_comment_location().returning(|_, _| Ok(()));
        (threads, comments)
    }

    #[tokio::test]
    async fn first_toggle_adds_a_like() {
        let (threads, comments) = scope_ok();
        let mut likes = MockLikeRepository::new();
        likes
            .expect_is_comment_liked()
            .withf(|comment_id, owner| comment_id == "comment-123" && owner == "user-123")
            .returning(|_, _| Ok(false));
        likes.expect_add_like().times(1).returning(|_, _| Ok(()));
        likes.expect_remove_like().never();

        let status = LikeService::new(Arc::new(threads), Arc::new(comments), Arc::new(likes))
            .toggle_like("thread-123", "comment-123", "user-123")
            .await
            .unwrap();

        assert_eq!(status, LikeStatus::Liked);
    }

    #[tokio::test]
    async fn second_toggle_removes_the_like() {
        let (threads, comments) = scope_ok();
        let mut likes = MockLikeRepository::new();
        likes.expect_is_comment_liked().returning(|_, _| Ok(true));
        likes.expect_add_like().never();
        likes.expect_remove_like().times(1).returning(|_, _| Ok(()));

        let status = LikeService::new(Arc::new(threads), Arc::new(comments), Arc::new(likes))
            .toggle_like("thread-123", "comment-123", "user-123")
            .await
            .unwrap();

        assert_eq!(status, LikeStatus::Unliked);
    }

    #[tokio::test]
    async fn toggle_on_missing_thread_touches_no_likes() {
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_thread().returning(|_| Err(DomainError::thread_not_found()));
        let mut comments = MockCommentRepository::new();
        comments.expect_verify_comment_location().never();
        let mut likes = MockLikeRepository::new();
        likes.expect_is_comment_liked().never();

        let err = LikeService::new(Arc::new(threads), Arc::new(comments), Arc::new(likes))
            .toggle_like("thread-404", "comment-123", "user-123")
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::thread_not_found());
    }

    #[tokio::test]
    async fn toggle_on_missing_comment_is_not_found() {
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_thread().returning(|_| Ok(()));
        let mut comments = MockCommentRepository::new();
        comments
            .expect_verify_comment_location()
            .returning(|_, _| Err(DomainError::comment_not_found()));

        let err = LikeService::new(Arc::new(threads), Arc::new(comments), Arc::new(MockLikeRepository::new()))
            .toggle_like("thread-123", "comment-404", "user-123")
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::comment_not_found());
    }
}
