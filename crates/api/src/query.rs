//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Offset pagination parameter (`?offset=`). The page size is fixed.
#[derive(Debug, Default, Deserialize)]
pub struct OffsetParams {
    pub offset: Option<i64>,
}
