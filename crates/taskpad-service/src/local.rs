use async_trait::async_trait;
use taskpad_core::comment::{
    Comment, CommentDeletionResult, CreateCommentParams, DeleteCommentParams, GetCommentParams,
    GetPaginatedCommentsParams, UpdateCommentParams,
};
use taskpad_core::pagination::PaginationResult;
use taskpad_db::{Db, DbError};

use crate::{CommentReader, CommentService, CommentWriter, ServiceError};

/// Store-backed implementation of [`CommentService`]: a stateless
/// pass-through to the reader and writer.
pub struct LocalService {
    reader: CommentReader,
    writer: CommentWriter,
}

impl LocalService {
    pub fn new(db: Db) -> Self {
        Self {
            reader: CommentReader::new(db.clone()),
            writer: CommentWriter::new(db),
        }
    }
}

impl From<DbError> for ServiceError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound(msg) => ServiceError::NotFound(msg),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

#[async_trait]
impl CommentService for LocalService {
    async fn create_comment(&self, params: &CreateCommentParams) -> Result<Comment, ServiceError> {
        self.writer.create(params)
    }

    async fn get_comment(&self, params: &GetCommentParams) -> Result<Comment, ServiceError> {
        self.reader.get(params)
    }

    async fn get_paginated_comments(
        &self,
        params: &GetPaginatedCommentsParams,
    ) -> Result<PaginationResult<Comment>, ServiceError> {
        self.reader.get_paginated(params)
    }

    async fn update_comment(&self, params: &UpdateCommentParams) -> Result<Comment, ServiceError> {
        self.writer.update(params)
    }

    async fn delete_comment(
        &self,
        params: &DeleteCommentParams,
    ) -> Result<CommentDeletionResult, ServiceError> {
        self.writer.delete(params)
    }
}
