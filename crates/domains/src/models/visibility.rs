//! The visibility transform applied to soft-deleted rows at read time.

pub const DELETED_COMMENT_PLACEHOLDER: &str = "**komentar telah dihapus**";
pub const DELETED_REPLY_PLACEHOLDER: &str = "**balasan telah dihapus**";

/// Returns `content` unchanged for live rows and `placeholder` once the row is
/// soft-deleted. The original text of a deleted row never leaves this function.
pub fn visible_content(content: String, is_deleted: bool, placeholder: &str) -> String {
    if is_deleted {
        placeholder.to_string()
    } else {
        content
    }
}
