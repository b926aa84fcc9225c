//! Training session header rules.

use crate::error::CoreError;
use crate::types::Timestamp;

/// Ensure a session does not end before it starts.
pub fn validate_time_range(start: Timestamp, end: Option<Timestamp>) -> Result<(), CoreError> {
    match end {
        Some(end) if end < start => Err(CoreError::Validation(
            "performedEndAt must not be earlier than performedStartAt".to_string(),
        )),
        _ => Ok(()),
    }
}
