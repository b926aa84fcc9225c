//! Offset paging for training session listings.

use serde::Serialize;

use crate::error::CoreError;

/// Fixed number of training sessions returned per page.
pub const PAGE_SIZE: i64 = 20;

/// Paging metadata returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Paging {
    pub total: i64,
    pub offset: i64,
    pub limit: i64,
}

impl Paging {
    pub fn new(total: i64, offset: i64) -> Self {
        Self {
            total,
            offset,
            limit: PAGE_SIZE,
        }
    }
}

/// Resolve the requested offset, defaulting to `0` and rejecting negatives.
pub fn resolve_offset(offset: Option<i64>) -> Result<i64, CoreError> {
    match offset {
        None => Ok(0),
        Some(o) if o < 0 => Err(CoreError::Validation(format!(
            "offset must not be negative, got {o}"
        ))),
        Some(o) => Ok(o),
    }
}
