//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": "..." }` body for operations with nothing else to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
