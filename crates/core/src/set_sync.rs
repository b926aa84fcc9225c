//! Differential synchronisation of a workout's sets.
//!
//! A client submits the full list of sets it wants a workout to hold.
//! Against the stored set ids this splits into three groups:
//!
//! - incoming entries carrying a stored id are updated in place, every
//!   measurement replaced (absent fields become `NULL`);
//! - incoming entries without an id are created;
//! - stored ids the client no longer lists are deleted.
//!
//! An incoming id that is not stored on this workout, or an id listed twice,
//! rejects the whole request.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Measurement columns of a workout set.
///
/// Strength sets use `weight` (grams) and `reps`; cardio sets use
/// `distance` (meters), `duration` (seconds), `speed` (0.1 km/h units) and
/// `calories` (kcal). Every field is independently nullable and, when
/// present, a non-negative integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SetMeasurements {
    pub weight: Option<i32>,
    pub reps: Option<i32>,
    pub distance: Option<i32>,
    pub duration: Option<i32>,
    pub speed: Option<i32>,
    pub calories: Option<i32>,
}

impl SetMeasurements {
    /// Reject negative measurements.
    pub fn validate(&self) -> Result<(), CoreError> {
        let integers = [
            ("weight", self.weight),
            ("reps", self.reps),
            ("distance", self.distance),
            ("duration", self.duration),
            ("speed", self.speed),
            ("calories", self.calories),
        ];
        for (field, value) in integers {
            if let Some(v) = value {
                if v < 0 {
                    return Err(CoreError::Validation(format!(
                        "{field} must not be negative, got {v}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// One entry of a client-submitted set list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingSet {
    /// Stored set id to update; `None` creates a new set.
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(flatten)]
    pub measurements: SetMeasurements,
}

/// The writes needed to bring a workout's sets in line with a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetSyncPlan {
    pub delete: Vec<DbId>,
    pub update: Vec<(DbId, SetMeasurements)>,
    pub create: Vec<SetMeasurements>,
}

impl SetSyncPlan {
    /// True when applying the plan writes nothing.
    pub fn is_empty(&self) -> bool {
        self.delete.is_empty() && self.update.is_empty() && self.create.is_empty()
    }
}

/// Compute the sync plan for `incoming` against the workout's stored set ids.
///
/// Deletions keep the order of `existing_ids`; updates and creations keep the
/// order of `incoming`.
pub fn plan_set_sync(existing_ids: &[DbId], incoming: &[IncomingSet]) -> Result<SetSyncPlan, CoreError> {
    let existing: HashSet<DbId> = existing_ids.iter().copied().collect();
    let mut seen: HashSet<DbId> = HashSet::with_capacity(incoming.len());
    let mut plan = SetSyncPlan::default();

    for entry in incoming {
        entry.measurements.validate()?;
        match entry.id {
            Some(id) => {
                if !existing.contains(&id) {
                    return Err(CoreError::Validation(format!(
                        "Set {id} does not belong to this workout"
                    )));
                }
                if !seen.insert(id) {
                    return Err(CoreError::Validation(format!(
                        "Set {id} is listed more than once"
                    )));
                }
                plan.update.push((id, entry.measurements));
            }
            None => plan.create.push(entry.measurements),
        }
    }

    plan.delete = existing_ids
        .iter()
        .copied()
        .filter(|id| !seen.contains(id))
        .collect();

    Ok(plan)
}
