//! Training session entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trainlog_core::paging::Paging;
use trainlog_core::patch::double_option;
use trainlog_core::types::{DbId, Timestamp};

use crate::models::workout::WorkoutDetail;

/// A row from the `training_sessions` table: one real-world training visit.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub user_id: DbId,
    pub performed_start_at: Timestamp,
    pub performed_end_at: Option<Timestamp>,
    pub place: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A training session with its workouts (ordered by `order_index`) and their sets.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingSessionDetail {
    #[serde(flatten)]
    pub session: TrainingSession,
    pub workouts: Vec<WorkoutDetail>,
}

/// One page of a user's training sessions, newest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionPage {
    pub training_sessions: Vec<TrainingSessionDetail>,
    pub paging: Paging,
}

/// DTO for creating a training session. End time and place are set later.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrainingSession {
    pub performed_start_at: Timestamp,
}

/// DTO for updating a training session.
///
/// `performed_start_at` is replaced when present. `performed_end_at` and
/// `place` distinguish absent (untouched) from `null` (cleared).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrainingSession {
    #[serde(default)]
    pub performed_start_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "double_option")]
    pub performed_end_at: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "double_option")]
    pub place: Option<Option<String>>,
}

impl UpdateTrainingSession {
    /// The start and end times the session will hold once this update applies.
    pub fn resulting_range(&self, current: &TrainingSession) -> (Timestamp, Option<Timestamp>) {
        let start = self.performed_start_at.unwrap_or(current.performed_start_at);
        let end = match self.performed_end_at {
            Some(end) => end,
            None => current.performed_end_at,
        };
        (start, end)
    }
}
