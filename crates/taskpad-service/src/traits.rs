use async_trait::async_trait;
use taskpad_core::comment::{
    Comment, CommentDeletionResult, CreateCommentParams, DeleteCommentParams, GetCommentParams,
    GetPaginatedCommentsParams, UpdateCommentParams,
};
use taskpad_core::error::code;
use taskpad_core::pagination::PaginationResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Stable wire code, matched by clients instead of the message text.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => code::COMMENT_NOT_FOUND,
            ServiceError::InvalidInput(_) => code::COMMENT_BAD_REQUEST,
            ServiceError::Internal(_) => code::INTERNAL,
        }
    }
}

/// Single call surface for comment operations.
///
/// The HTTP layer programs against this trait; `LocalService` wraps the
/// store-backed reader and writer. Keeping the read/write split behind one
/// facade lets tests substitute implementations wholesale.
#[async_trait]
pub trait CommentService: Send + Sync {
    async fn create_comment(&self, params: &CreateCommentParams) -> Result<Comment, ServiceError>;

    async fn get_comment(&self, params: &GetCommentParams) -> Result<Comment, ServiceError>;

    async fn get_paginated_comments(
        &self,
        params: &GetPaginatedCommentsParams,
    ) -> Result<PaginationResult<Comment>, ServiceError>;

    async fn update_comment(&self, params: &UpdateCommentParams) -> Result<Comment, ServiceError>;

    async fn delete_comment(
        &self,
        params: &DeleteCommentParams,
    ) -> Result<CommentDeletionResult, ServiceError>;
}
