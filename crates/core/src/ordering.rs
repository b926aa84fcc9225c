//! Workout ordering within a training session.
//!
//! Every session holds its workouts at contiguous, zero-based `order_index`
//! values. The database enforces `(training_session_id, order_index)`
//! uniqueness, so a permutation cannot be written directly: moving workout A
//! into B's slot would collide with B before B moves out. Renumbering is
//! therefore done in two passes. The first parks every workout on a distinct
//! negative index, which can never clash with a live slot; the second writes
//! the final `0..n` indices.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// The index a newly added workout receives: one past the current maximum,
/// or `0` for an empty session.
pub fn next_order_index(current_max: Option<i32>) -> i32 {
    current_max.map_or(0, |max| max + 1)
}

/// Temporary index used during the first renumbering pass.
///
/// Distinct for each position and always negative.
pub fn temporary_index(position: usize) -> i32 {
    -(position as i32) - 1
}

/// One workout's indices for a two-pass renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexAssignment {
    pub workout_id: DbId,
    pub temporary_index: i32,
    pub final_index: i32,
}

/// Build the two-pass plan placing `ordered_ids[i]` at index `i`.
pub fn renumber_plan(ordered_ids: &[DbId]) -> Vec<IndexAssignment> {
    ordered_ids
        .iter()
        .enumerate()
        .map(|(position, &workout_id)| IndexAssignment {
            workout_id,
            temporary_index: temporary_index(position),
            final_index: position as i32,
        })
        .collect()
}

/// Validate a client-submitted ordering against the session's current
/// workout ids.
///
/// Checked in order, each failure a `Validation` error:
/// 1. every requested id belongs to the session,
/// 2. the request names as many ids as the session holds,
/// 3. no id is repeated.
///
/// Together these accept exactly the permutations of `existing_ids`.
pub fn validate_reorder(existing_ids: &[DbId], requested_ids: &[DbId]) -> Result<(), CoreError> {
    let existing: HashSet<DbId> = existing_ids.iter().copied().collect();

    if let Some(unknown) = requested_ids.iter().find(|id| !existing.contains(id)) {
        return Err(CoreError::Validation(format!(
            "Invalid workout id: {unknown}"
        )));
    }

    if requested_ids.len() != existing.len() {
        return Err(CoreError::Validation(
            "Must specify all workout ids".to_string(),
        ));
    }

    let unique: HashSet<DbId> = requested_ids.iter().copied().collect();
    if unique.len() != requested_ids.len() {
        return Err(CoreError::Validation(
            "Duplicate workout ids are not allowed".to_string(),
        ));
    }

    Ok(())
}

/// True when `indices` is exactly `{0, 1, ..., n-1}`.
pub fn is_contiguous(indices: &[i32]) -> bool {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.iter().enumerate().all(|(i, &idx)| idx == i as i32)
}
