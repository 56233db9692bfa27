use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::{PaginationParams, SortParams};

/// A comment attached to a task within an account.
///
/// The soft-delete flag lives only in the store row; inactive comments are
/// filtered out by every query and never reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub task_id: String,
    pub account_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Scope triple identifying a single comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCommentParams {
    pub account_id: String,
    pub task_id: String,
    pub comment_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPaginatedCommentsParams {
    pub account_id: String,
    pub task_id: String,
    pub pagination_params: PaginationParams,
    #[serde(default)]
    pub sort_params: Option<SortParams>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentParams {
    pub account_id: String,
    pub task_id: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCommentParams {
    pub account_id: String,
    pub task_id: String,
    pub comment_id: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCommentParams {
    pub account_id: String,
    pub task_id: String,
    pub comment_id: String,
}

/// Outcome of a soft-delete. The HTTP layer discards this and answers 204;
/// other callers get the id and the deletion timestamp back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDeletionResult {
    pub comment_id: String,
    pub deleted_at: DateTime<Utc>,
    pub success: bool,
}
