pub mod comment;
pub mod error;
pub mod pagination;

pub use comment::{
    Comment, CommentDeletionResult, CreateCommentParams, DeleteCommentParams, GetCommentParams,
    GetPaginatedCommentsParams, UpdateCommentParams,
};
pub use pagination::{PaginationParams, PaginationResult, SortField, SortOrder, SortParams};
