//! Offset-based pagination types
//!
//! Listing endpoints accept either a 1-based `page` or a raw `offset`,
//! together with a bounded `limit`.
//!
//! # Usage
//!
//! ```rust,ignore
//! let args = PaginationArgs { limit: Some(10), page: Some(2), offset: None };
//! let validated = args.validate()?;
//! assert_eq!(validated.offset, 10);
//! ```

/// Page size used when the caller does not pass `limit`.
pub const DEFAULT_LIMIT: i64 = 20;

/// Largest page size a caller may request.
pub const MAX_LIMIT: i64 = 100;

// ============================================================================
// Pagination Arguments
// ============================================================================

/// Raw pagination arguments as they arrive from the query string.
///
/// `page` takes precedence over `offset` when both are present.
#[derive(Debug, Clone, Default)]
pub struct PaginationArgs {
    /// Number of items per page (1-100, default 20).
    pub limit: Option<i64>,
    /// 1-based page number.
    pub page: Option<i64>,
    /// Number of items to skip.
    pub offset: Option<i64>,
}

impl PaginationArgs {
    /// Validate pagination arguments.
    ///
    /// Out-of-range values are rejected, not clamped.
    pub fn validate(&self) -> Result<ValidatedPaginationArgs, String> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(format!("limit must be between 1 and {}", MAX_LIMIT));
        }

        let offset = match (self.page, self.offset) {
            (Some(page), _) => {
                if page < 1 {
                    return Err("page must be at least 1".to_string());
                }
                (page - 1)
                    .checked_mul(limit)
                    .ok_or_else(|| "page is out of range".to_string())?
            }
            (None, Some(offset)) => {
                if offset < 0 {
                    return Err("offset must not be negative".to_string());
                }
                offset
            }
            (None, None) => 0,
        };

        Ok(ValidatedPaginationArgs { limit, offset })
    }
}

/// Validated and normalized pagination arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPaginationArgs {
    /// Number of items to fetch (1-100).
    pub limit: i64,
    /// Number of matching items to skip.
    pub offset: i64,
}
