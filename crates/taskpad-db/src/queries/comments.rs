use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use taskpad_core::comment::{Comment, CreateCommentParams, GetCommentParams, UpdateCommentParams};
use taskpad_core::pagination::{PaginationParams, SortParams};

use crate::{Db, DbError};

fn row_to_comment(row: &Row) -> rusqlite::Result<Comment> {
    // The `active` column stays internal to the store.
    Ok(Comment {
        id: row.get("id")?,
        account_id: row.get("account_id")?,
        task_id: row.get("task_id")?,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn not_found(comment_id: &str) -> impl FnOnce(rusqlite::Error) -> DbError + '_ {
    move |e| match e {
        rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("comment {comment_id}")),
        other => DbError::Sqlite(other),
    }
}

impl Db {
    /// Insert a new active comment and return the persisted row
    /// (read-after-write, so callers see exactly what the store holds).
    pub fn insert_comment(&self, input: &CreateCommentParams) -> Result<Comment, DbError> {
        self.with_conn(|conn| {
            let id = uuid::Uuid::new_v4().to_string();
            let now = Utc::now();

            conn.execute(
                "INSERT INTO comments (id, account_id, task_id, content, active, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, 1, ?5, ?6)",
                params![id, input.account_id, input.task_id, input.content, now, now],
            )?;

            let comment = conn.query_row(
                "SELECT * FROM comments WHERE id = ?1",
                params![id],
                row_to_comment,
            )?;
            Ok(comment)
        })
    }

    /// Scoped lookup: id AND account AND task AND active. A miss on any of
    /// the four is indistinguishable from the others.
    pub fn get_comment(&self, scope: &GetCommentParams) -> Result<Comment, DbError> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT * FROM comments
                 WHERE id = ?1 AND account_id = ?2 AND task_id = ?3 AND active = 1",
                params![scope.comment_id, scope.account_id, scope.task_id],
                row_to_comment,
            )
            .map_err(not_found(&scope.comment_id))
        })
    }

    /// One page of active comments for the scope plus the total active count.
    /// Pages past the end come back empty; the count still reflects the whole
    /// result set.
    pub fn list_comments_paginated(
        &self,
        account_id: &str,
        task_id: &str,
        pagination: &PaginationParams,
        sort: &SortParams,
    ) -> Result<(Vec<Comment>, i64), DbError> {
        self.with_conn(|conn| {
            let total: i64 = conn.query_row(
                "SELECT COUNT(*) FROM comments
                 WHERE account_id = ?1 AND task_id = ?2 AND active = 1",
                params![account_id, task_id],
                |row| row.get(0),
            )?;

            // Column and direction come from closed enums, never from input.
            // rowid breaks ties between equal timestamps in insertion order.
            let sql = format!(
                "SELECT * FROM comments
                 WHERE account_id = ?1 AND task_id = ?2 AND active = 1
                 ORDER BY {col} {dir}, rowid {dir}
                 LIMIT ?3 OFFSET ?4",
                col = sort.sort_by.column(),
                dir = sort.order.keyword(),
            );

            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(
                params![account_id, task_id, pagination.size, pagination.offset()],
                row_to_comment,
            )?;
            let items = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            Ok((items, total))
        })
    }

    /// Atomic conditional replace of the content. The filter re-checks the
    /// full scope and the active flag, so a concurrent soft-delete makes this
    /// observe `NotFound` rather than resurrecting the comment.
    pub fn update_comment_content(&self, input: &UpdateCommentParams) -> Result<Comment, DbError> {
        self.with_conn(|conn| {
            let now = Utc::now();
            conn.query_row(
                "UPDATE comments SET content = ?1, updated_at = ?2
                 WHERE id = ?3 AND account_id = ?4 AND task_id = ?5 AND active = 1
                 RETURNING *",
                params![input.content, now, input.comment_id, input.account_id, input.task_id],
                row_to_comment,
            )
            .map_err(not_found(&input.comment_id))
        })
    }

    /// Flip the active flag off, keyed only by id. Callers prove existence
    /// and scope through `get_comment` first; rows are never removed.
    pub fn soft_delete_comment(
        &self,
        comment_id: &str,
        deleted_at: DateTime<Utc>,
    ) -> Result<(), DbError> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE comments SET active = 0, updated_at = ?2 WHERE id = ?1",
                params![comment_id, deleted_at],
            )?;
            if changed == 0 {
                return Err(DbError::NotFound(format!("comment {comment_id}")));
            }
            Ok(())
        })
    }
}
