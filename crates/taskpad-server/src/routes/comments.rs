use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use taskpad_core::comment::{
    CreateCommentParams, DeleteCommentParams, GetCommentParams, GetPaginatedCommentsParams,
    UpdateCommentParams,
};
use taskpad_core::pagination::PaginationParams;
use taskpad_service::{CommentService, ServiceError};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/accounts/{account_id}/tasks/{task_id}/comments",
            get(list_comments).post(create_comment),
        )
        .route(
            "/api/accounts/{account_id}/tasks/{task_id}/comments/{comment_id}",
            get(get_comment).patch(update_comment).delete(delete_comment),
        )
}

/// Bodies arrive with `content` optional so that a missing field maps to the
/// module's own bad-request error instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
struct CreateCommentRequest {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateCommentRequest {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentListQuery {
    page: Option<i64>,
    size: Option<i64>,
}

async fn create_comment(
    State(state): State<AppState>,
    Path((account_id, task_id)): Path<(String, String)>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let content = require_content(req.content)?;
    state
        .service
        .create_comment(&CreateCommentParams {
            account_id,
            task_id,
            content,
        })
        .await
        .map(|c| (StatusCode::CREATED, Json(json!(c))))
        .map_err(to_error)
}

async fn list_comments(
    State(state): State<AppState>,
    Path((account_id, task_id)): Path<(String, String)>,
    Query(q): Query<CommentListQuery>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let pagination_params = resolve_pagination(&q)?;
    state
        .service
        .get_paginated_comments(&GetPaginatedCommentsParams {
            account_id,
            task_id,
            pagination_params,
            sort_params: None,
        })
        .await
        .map(|page| Json(json!(page)))
        .map_err(to_error)
}

async fn get_comment(
    State(state): State<AppState>,
    Path((account_id, task_id, comment_id)): Path<(String, String, String)>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    state
        .service
        .get_comment(&GetCommentParams {
            account_id,
            task_id,
            comment_id,
        })
        .await
        .map(|c| Json(json!(c)))
        .map_err(to_error)
}

async fn update_comment(
    State(state): State<AppState>,
    Path((account_id, task_id, comment_id)): Path<(String, String, String)>,
    Json(req): Json<UpdateCommentRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let content = require_content(req.content)?;
    state
        .service
        .update_comment(&UpdateCommentParams {
            account_id,
            task_id,
            comment_id,
            content,
        })
        .await
        .map(|c| Json(json!(c)))
        .map_err(to_error)
}

async fn delete_comment(
    State(state): State<AppState>,
    Path((account_id, task_id, comment_id)): Path<(String, String, String)>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    state
        .service
        .delete_comment(&DeleteCommentParams {
            account_id,
            task_id,
            comment_id,
        })
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(to_error)
}

fn require_content(content: Option<String>) -> Result<String, (StatusCode, Json<Value>)> {
    match content {
        Some(c) if !c.trim().is_empty() => Ok(c),
        _ => Err(to_error(ServiceError::InvalidInput(
            "Content is required".to_string(),
        ))),
    }
}

fn resolve_pagination(q: &CommentListQuery) -> Result<PaginationParams, (StatusCode, Json<Value>)> {
    if q.page.is_some_and(|p| p < 1) {
        return Err(to_error(ServiceError::InvalidInput(
            "Page must be greater than 0".to_string(),
        )));
    }
    if q.size.is_some_and(|s| s < 1) {
        return Err(to_error(ServiceError::InvalidInput(
            "Size must be greater than 0".to_string(),
        )));
    }
    let defaults = PaginationParams::default();
    Ok(PaginationParams::new(
        q.page.unwrap_or(defaults.page),
        q.size.unwrap_or(defaults.size),
    ))
}

fn to_error(e: ServiceError) -> (StatusCode, Json<Value>) {
    let status = match &e {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ServiceError::Internal(_) => {
            tracing::error!("comment service failure: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(json!({ "code": e.code(), "message": e.to_string() })))
}
