//! Stable wire codes carried on HTTP error bodies.
//!
//! Codes are part of the external contract and must not change between
//! releases; clients match on them rather than on the human-readable message.

pub mod code {
    pub const COMMENT_NOT_FOUND: &str = "COMMENT_ERR_01";
    pub const COMMENT_BAD_REQUEST: &str = "COMMENT_ERR_02";
    pub const INTERNAL: &str = "SERVER_ERR_01";
}
