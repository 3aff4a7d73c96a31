//! # Domain Models
//!
//! These structs represent the core entities of the forum: threads, their
//! comments, replies to comments, and comment likes. Request payloads enter
//! through the `New*` constructors; rows leave storage through the `Model*`
//! projections, which already carry visibility-masked content.

mod payload;

pub mod comment;
pub mod detail;
pub mod like;
pub mod reply;
pub mod thread;
pub mod visibility;

pub use comment::{AddedComment, ModelComment, NewComment};
pub use detail::{CommentDetail, ThreadDetail};
pub use like::{Like, LikeStatus};
pub use reply::{AddedReply, ModelReply, NewReply};
pub use thread::{AddedThread, NewThread, Thread};
pub use visibility::{visible_content, DELETED_COMMENT_PLACEHOLDER, DELETED_REPLY_PLACEHOLDER};
