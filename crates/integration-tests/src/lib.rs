//! Shared fixtures for the end-to-end forum tests.
//!
//! `TestForum` wires every service over one `InMemoryForumStore`; the `http`
//! module exposes the same wiring as an axum router with real JWT
//! verification.

use std::sync::Arc;

use services::{CommentService, LikeService, ReplyService, ThreadService};
use storage_adapters::InMemoryForumStore;

#[cfg(feature = "web-axum")]
pub mod http;

#[cfg(feature = "web-axum")]
pub use http::{access_token, call, call_raw, ACCESS_KEY};

/// (user id, username) pairs registered on every fresh forum.
pub const USERS: [(&str, &str); 3] = [
    ("user-1", "dicoding"),
    ("user-2", "johndoe"),
    ("user-3", "janedoe"),
];

pub struct TestForum {
    pub store: Arc<InMemoryForumStore>,
    pub threads: Arc<ThreadService>,
    pub comments: Arc<CommentService>,
    pub replies: Arc<ReplyService>,
    pub likes: Arc<LikeService>,
}

impl TestForum {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryForumStore::new());
        for (id, username) in USERS {
            store.register_user(id, username);
        }

        Self {
            threads: Arc::new(ThreadService::new(
                store.clone(),
                store.clone(),
                store.clone(),
                store.clone(),
            )),
            comments: Arc::new(CommentService::new(store.clone(), store.clone())),
            replies: Arc::new(ReplyService::new(store.clone(), store.clone(), store.clone())),
            likes: Arc::new(LikeService::new(store.clone(), store.clone(), store.clone())),
            store,
        }
    }
}

impl Default for TestForum {
    fn default() -> Self {
        Self::new()
    }
}
