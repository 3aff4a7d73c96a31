//! # services
//!
//! Use cases of the forum. Each service verifies the enclosing scope
//! outer-first (thread, then comment, then reply) before touching storage, so
//! the first failing check decides the error and nothing is written.

pub mod comment_service;
pub mod like_service;
pub mod reply_service;
pub mod thread_service;

pub use comment_service::CommentService;
pub use like_service::LikeService;
pub use reply_service::ReplyService;
pub use thread_service::ThreadService;
