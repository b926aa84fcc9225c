//! Workout entity model, read models, and DTOs.
//!
//! A workout is one exercise's occurrence within a training session, not a
//! whole session.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trainlog_core::exercise::ExerciseCode;
use trainlog_core::patch::double_option;
use trainlog_core::set_sync::IncomingSet;
use trainlog_core::types::{DbId, Timestamp};

use crate::models::exercise::{CreateExercise, ExerciseSummary};
use crate::models::workout_set::WorkoutSet;

/// A row from the `workouts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: DbId,
    pub training_session_id: DbId,
    pub exercise_id: DbId,
    pub order_index: i32,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A workout joined with its exercise columns.
#[derive(Debug, Clone, FromRow)]
pub struct WorkoutWithExerciseRow {
    pub id: DbId,
    pub training_session_id: DbId,
    pub exercise_id: DbId,
    pub order_index: i32,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub exercise_name: String,
    pub exercise_body_part: Option<ExerciseCode>,
    pub exercise_type: ExerciseCode,
    pub exercise_is_preset: bool,
}

impl WorkoutWithExerciseRow {
    /// Attach sets, producing the response shape.
    pub fn into_detail(self, sets: Vec<WorkoutSet>) -> WorkoutDetail {
        WorkoutDetail {
            id: self.id,
            training_session_id: self.training_session_id,
            order_index: self.order_index,
            note: self.note,
            exercise: ExerciseSummary {
                id: self.exercise_id,
                name: self.exercise_name,
                body_part: self.exercise_body_part,
                exercise_type: self.exercise_type,
                is_preset: self.exercise_is_preset,
            },
            sets,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A workout with its exercise and sets, as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDetail {
    pub id: DbId,
    pub training_session_id: DbId,
    pub order_index: i32,
    pub note: Option<String>,
    pub exercise: ExerciseSummary,
    pub sets: Vec<WorkoutSet>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Which exercise a new workout should use.
///
/// Either an existing exercise id (`{"exerciseId": 3}`) or the fields of a
/// custom exercise to create first (`{"exercise": {"name": ...}}`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExerciseRef {
    Existing {
        #[serde(rename = "exerciseId")]
        id: DbId,
    },
    New {
        exercise: CreateExercise,
    },
}

/// DTO for reordering a session's workouts: the full list of workout ids
/// in their new order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderWorkouts {
    pub workout_ids: Vec<DbId>,
}

/// DTO for updating a workout's note and synchronising its sets.
///
/// `note` distinguishes absent (untouched) from `null` (cleared). `sets`,
/// when present, is the complete list of sets the workout should hold.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkout {
    #[serde(default, deserialize_with = "double_option")]
    pub note: Option<Option<String>>,
    #[serde(default)]
    pub sets: Option<Vec<IncomingSet>>,
}
