use serde::Serialize;

/// A single like of a comment by a user. Never exposed in thread detail,
/// only counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Like {
    pub id: String,
    pub comment_id: String,
    pub owner: String,
}

/// State of a (comment, user) pair after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeStatus {
    Liked,
    Unliked,
}
