// Tests for the service facade, driven through the `CommentService` trait the
// way the HTTP layer consumes it.

use taskpad_core::comment::{
    CreateCommentParams, DeleteCommentParams, GetCommentParams, GetPaginatedCommentsParams,
    UpdateCommentParams,
};
use taskpad_core::error::code;
use taskpad_core::pagination::{PaginationParams, SortField, SortOrder, SortParams};
use taskpad_db::Db;
use taskpad_service::{CommentService, LocalService, ServiceError};

const DEFAULT_CONTENT: &str = "This is a test comment";

fn make_service() -> LocalService {
    LocalService::new(Db::open_in_memory().unwrap())
}

async fn create_comment(svc: &LocalService, account_id: &str, task_id: &str, content: &str) -> taskpad_core::Comment {
    svc.create_comment(&CreateCommentParams {
        account_id: account_id.to_string(),
        task_id: task_id.to_string(),
        content: content.to_string(),
    })
    .await
    .unwrap()
}

fn get_params(account_id: &str, task_id: &str, comment_id: &str) -> GetCommentParams {
    GetCommentParams {
        account_id: account_id.to_string(),
        task_id: task_id.to_string(),
        comment_id: comment_id.to_string(),
    }
}

fn list_params(account_id: &str, task_id: &str, page: i64, size: i64) -> GetPaginatedCommentsParams {
    GetPaginatedCommentsParams {
        account_id: account_id.to_string(),
        task_id: task_id.to_string(),
        pagination_params: PaginationParams::new(page, size),
        sort_params: None,
    }
}

#[tokio::test]
async fn create_comment_sets_identity_and_timestamps() {
    let svc = make_service();
    let comment = create_comment(&svc, "acc-1", "task-1", DEFAULT_CONTENT).await;

    assert_eq!(comment.account_id, "acc-1");
    assert_eq!(comment.task_id, "task-1");
    assert_eq!(comment.content, DEFAULT_CONTENT);
    assert!(!comment.id.is_empty());
    assert_eq!(comment.created_at, comment.updated_at);
}

#[tokio::test]
async fn get_comment_returns_created_comment() {
    let svc = make_service();
    let created = create_comment(&svc, "acc-1", "task-1", DEFAULT_CONTENT).await;

    let retrieved = svc
        .get_comment(&get_params("acc-1", "task-1", &created.id))
        .await
        .unwrap();

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.account_id, "acc-1");
    assert_eq!(retrieved.task_id, "task-1");
    assert_eq!(retrieved.content, DEFAULT_CONTENT);
}

#[tokio::test]
async fn get_comment_not_found_carries_stable_code() {
    let svc = make_service();

    let err = svc
        .get_comment(&get_params("acc-1", "task-1", "64b0c1f77bcf86cd79943901"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(err.code(), code::COMMENT_NOT_FOUND);
    assert!(err.to_string().contains("64b0c1f77bcf86cd79943901"));
}

#[tokio::test]
async fn paginated_comments_empty() {
    let svc = make_service();

    let result = svc
        .get_paginated_comments(&list_params("acc-1", "task-1", 1, 10))
        .await
        .unwrap();

    assert!(result.items.is_empty());
    assert_eq!(result.total_count, 0);
    assert_eq!(result.total_pages, 0);
    assert_eq!(result.pagination_params.page, 1);
    assert_eq!(result.pagination_params.size, 10);
}

#[tokio::test]
async fn paginated_comments_with_data() {
    let svc = make_service();
    for i in 1..=5 {
        create_comment(&svc, "acc-1", "task-1", &format!("Comment {i}")).await;
    }

    let result = svc
        .get_paginated_comments(&list_params("acc-1", "task-1", 1, 3))
        .await
        .unwrap();
    assert_eq!(result.items.len(), 3);
    assert_eq!(result.total_count, 5);
    assert_eq!(result.total_pages, 2);

    let result = svc
        .get_paginated_comments(&list_params("acc-1", "task-1", 2, 3))
        .await
        .unwrap();
    assert_eq!(result.items.len(), 2);
    assert_eq!(result.total_count, 5);
    assert_eq!(result.total_pages, 2);
}

#[tokio::test]
async fn pagination_scenario_newest_first() {
    let svc = make_service();
    for i in 1..=5 {
        create_comment(&svc, "acc-1", "task-1", &format!("Comment {i}")).await;
    }

    let page1 = svc
        .get_paginated_comments(&list_params("acc-1", "task-1", 1, 2))
        .await
        .unwrap();
    let contents: Vec<_> = page1.items.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, ["Comment 5", "Comment 4"]);
    assert_eq!(page1.total_count, 5);
    assert_eq!(page1.total_pages, 3);

    let page3 = svc
        .get_paginated_comments(&list_params("acc-1", "task-1", 3, 2))
        .await
        .unwrap();
    let contents: Vec<_> = page3.items.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, ["Comment 1"]);

    let beyond = svc
        .get_paginated_comments(&list_params("acc-1", "task-1", 4, 2))
        .await
        .unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total_count, 5);
}

#[tokio::test]
async fn explicit_sort_oldest_first() {
    let svc = make_service();
    for i in 1..=3 {
        create_comment(&svc, "acc-1", "task-1", &format!("Comment {i}")).await;
    }

    let result = svc
        .get_paginated_comments(&GetPaginatedCommentsParams {
            account_id: "acc-1".into(),
            task_id: "task-1".into(),
            pagination_params: PaginationParams::new(1, 10),
            sort_params: Some(SortParams {
                sort_by: SortField::CreatedAt,
                order: SortOrder::Asc,
            }),
        })
        .await
        .unwrap();

    let contents: Vec<_> = result.items.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, ["Comment 1", "Comment 2", "Comment 3"]);
}

#[tokio::test]
async fn update_comment_changes_content_only() {
    let svc = make_service();
    let created = create_comment(&svc, "acc-1", "task-1", "Original Comment").await;

    let updated = svc
        .update_comment(&UpdateCommentParams {
            account_id: "acc-1".into(),
            task_id: "task-1".into(),
            comment_id: created.id.clone(),
            content: "Updated Comment".into(),
        })
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.account_id, created.account_id);
    assert_eq!(updated.task_id, created.task_id);
    assert_eq!(updated.content, "Updated Comment");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn update_nonexistent_comment_not_found() {
    let svc = make_service();

    let err = svc
        .update_comment(&UpdateCommentParams {
            account_id: "acc-1".into(),
            task_id: "task-1".into(),
            comment_id: "missing".into(),
            content: "whatever".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn update_wrong_scope_not_found() {
    let svc = make_service();
    let created = create_comment(&svc, "acc-1", "task-1", DEFAULT_CONTENT).await;

    for (account_id, task_id) in [("acc-1", "task-2"), ("acc-2", "task-1")] {
        let err = svc
            .update_comment(&UpdateCommentParams {
                account_id: account_id.into(),
                task_id: task_id.into(),
                comment_id: created.id.clone(),
                content: "crossing the streams".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}

#[tokio::test]
async fn delete_comment_reports_result_and_hides_comment() {
    let svc = make_service();
    let created = create_comment(&svc, "acc-1", "task-1", DEFAULT_CONTENT).await;

    let result = svc
        .delete_comment(&DeleteCommentParams {
            account_id: "acc-1".into(),
            task_id: "task-1".into(),
            comment_id: created.id.clone(),
        })
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.comment_id, created.id);
    assert!(result.deleted_at >= created.created_at);

    let err = svc
        .get_comment(&get_params("acc-1", "task-1", &created.id))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn delete_twice_second_fails_not_found() {
    let svc = make_service();
    let created = create_comment(&svc, "acc-1", "task-1", DEFAULT_CONTENT).await;

    let params = DeleteCommentParams {
        account_id: "acc-1".into(),
        task_id: "task-1".into(),
        comment_id: created.id.clone(),
    };
    svc.delete_comment(&params).await.unwrap();

    let err = svc.delete_comment(&params).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn delete_wrong_scope_not_found() {
    let svc = make_service();
    let created = create_comment(&svc, "acc-1", "task-1", DEFAULT_CONTENT).await;

    let err = svc
        .delete_comment(&DeleteCommentParams {
            account_id: "acc-2".into(),
            task_id: "task-1".into(),
            comment_id: created.id.clone(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    // Still present in its own scope.
    svc.get_comment(&get_params("acc-1", "task-1", &created.id))
        .await
        .unwrap();
}

#[tokio::test]
async fn scope_isolation_in_listing() {
    let svc = make_service();
    create_comment(&svc, "acc-1", "task-1", "mine").await;
    create_comment(&svc, "acc-1", "task-2", "other task").await;
    create_comment(&svc, "acc-2", "task-1", "other account").await;

    let result = svc
        .get_paginated_comments(&list_params("acc-1", "task-1", 1, 10))
        .await
        .unwrap();
    assert_eq!(result.total_count, 1);
    assert_eq!(result.items[0].content, "mine");
}
