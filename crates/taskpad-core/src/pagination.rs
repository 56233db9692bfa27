use serde::{Deserialize, Serialize};

/// Page size applied when a listing request does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// 1-indexed page number plus fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: i64,
    pub size: i64,
}

impl PaginationParams {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    /// Number of rows to skip for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.size
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a sorted result set, with enough context to render pagers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub pagination_params: PaginationParams,
    pub total_count: i64,
    pub total_pages: i64,
}

impl<T> PaginationResult<T> {
    /// Assemble a page, deriving `total_pages` as ceil(total_count / size).
    pub fn new(items: Vec<T>, pagination_params: PaginationParams, total_count: i64) -> Self {
        let total_pages = if pagination_params.size > 0 {
            (total_count + pagination_params.size - 1) / pagination_params.size
        } else {
            0
        };
        Self {
            items,
            pagination_params,
            total_count,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction.
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Columns a listing may be sorted by. Closed set so the column name can be
/// spliced into SQL without touching user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub fn column(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortParams {
    pub sort_by: SortField,
    pub order: SortOrder,
}

impl Default for SortParams {
    /// Most recent first.
    fn default() -> Self {
        Self {
            sort_by: SortField::CreatedAt,
            order: SortOrder::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(PaginationParams::new(1, 10).offset(), 0);
        assert_eq!(PaginationParams::new(2, 10).offset(), 10);
        assert_eq!(PaginationParams::new(3, 2).offset(), 4);
    }

    #[test]
    fn total_pages_rounds_up() {
        let params = PaginationParams::new(1, 2);
        assert_eq!(PaginationResult::<i32>::new(vec![], params, 0).total_pages, 0);
        assert_eq!(PaginationResult::<i32>::new(vec![], params, 1).total_pages, 1);
        assert_eq!(PaginationResult::<i32>::new(vec![], params, 2).total_pages, 1);
        assert_eq!(PaginationResult::<i32>::new(vec![], params, 5).total_pages, 3);
    }

    #[test]
    fn default_sort_is_newest_first() {
        let sort = SortParams::default();
        assert_eq!(sort.sort_by.column(), "created_at");
        assert_eq!(sort.order.keyword(), "DESC");
    }
}
