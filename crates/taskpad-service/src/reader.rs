use taskpad_core::comment::{Comment, GetCommentParams, GetPaginatedCommentsParams};
use taskpad_core::pagination::PaginationResult;
use taskpad_db::Db;

use crate::ServiceError;

/// Read side of the comment module: single scoped lookups and paginated
/// listings of active comments.
#[derive(Clone)]
pub struct CommentReader {
    db: Db,
}

impl CommentReader {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Fetch one comment by id within the (account, task) scope. Wrong id,
    /// wrong scope and soft-deleted all surface as the same `NotFound`.
    pub fn get(&self, params: &GetCommentParams) -> Result<Comment, ServiceError> {
        Ok(self.db.get_comment(params)?)
    }

    /// Fetch a page of active comments for the scope, newest first unless the
    /// caller asks otherwise.
    pub fn get_paginated(
        &self,
        params: &GetPaginatedCommentsParams,
    ) -> Result<PaginationResult<Comment>, ServiceError> {
        let sort = params.sort_params.unwrap_or_default();
        let (items, total_count) = self.db.list_comments_paginated(
            &params.account_id,
            &params.task_id,
            &params.pagination_params,
            &sort,
        )?;
        Ok(PaginationResult::new(
            items,
            params.pagination_params,
            total_count,
        ))
    }
}
