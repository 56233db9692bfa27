use chrono::Utc;
use taskpad_core::comment::{
    Comment, CommentDeletionResult, CreateCommentParams, DeleteCommentParams, GetCommentParams,
    UpdateCommentParams,
};
use taskpad_db::Db;

use crate::{CommentReader, ServiceError};

/// Write side of the comment module: create, content update, soft-delete.
#[derive(Clone)]
pub struct CommentWriter {
    db: Db,
    reader: CommentReader,
}

impl CommentWriter {
    pub fn new(db: Db) -> Self {
        let reader = CommentReader::new(db.clone());
        Self { db, reader }
    }

    pub fn create(&self, params: &CreateCommentParams) -> Result<Comment, ServiceError> {
        Ok(self.db.insert_comment(params)?)
    }

    /// Replace the content of an active comment in one conditional statement.
    /// A concurrent delete wins the race by flipping `active` first, in which
    /// case this reports `NotFound`.
    pub fn update(&self, params: &UpdateCommentParams) -> Result<Comment, ServiceError> {
        Ok(self.db.update_comment_content(params)?)
    }

    /// Soft-delete: the reader proves existence and ownership, then the
    /// mutation is keyed only by the primary key.
    pub fn delete(&self, params: &DeleteCommentParams) -> Result<CommentDeletionResult, ServiceError> {
        let comment = self.reader.get(&GetCommentParams {
            account_id: params.account_id.clone(),
            task_id: params.task_id.clone(),
            comment_id: params.comment_id.clone(),
        })?;

        let deleted_at = Utc::now();
        self.db.soft_delete_comment(&comment.id, deleted_at)?;

        Ok(CommentDeletionResult {
            comment_id: params.comment_id.clone(),
            deleted_at,
            success: true,
        })
    }
}
