//! Exercise entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trainlog_core::error::CoreError;
use trainlog_core::exercise::{self, ExerciseCode, ExerciseOwnership};
use trainlog_core::types::{DbId, Timestamp};

/// An exercise row from the `exercises` table.
///
/// Presets have `is_preset = true` and no owner; custom exercises belong to
/// `user_id`. Soft-deleted rows carry `deleted_at`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub is_preset: bool,
    pub name: String,
    pub body_part: Option<ExerciseCode>,
    pub exercise_type: ExerciseCode,
    #[serde(skip_serializing)]
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ExerciseOwnership for Exercise {
    fn owner_id(&self) -> Option<DbId> {
        self.user_id
    }

    fn is_preset(&self) -> bool {
        self.is_preset
    }

    fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// The exercise fields embedded in a workout response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSummary {
    pub id: DbId,
    pub name: String,
    pub body_part: Option<ExerciseCode>,
    pub exercise_type: ExerciseCode,
    pub is_preset: bool,
}

/// DTO for creating or replacing a custom exercise.
///
/// `exercise_type` defaults to strength when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExercise {
    pub name: String,
    #[serde(default)]
    pub body_part: Option<ExerciseCode>,
    #[serde(default)]
    pub exercise_type: Option<ExerciseCode>,
}

/// DTO for updating a custom exercise. Every field is replaced.
pub type UpdateExercise = CreateExercise;

/// Validated exercise columns, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFields {
    pub name: String,
    pub body_part: Option<ExerciseCode>,
    pub exercise_type: ExerciseCode,
}

impl TryFrom<&CreateExercise> for ExerciseFields {
    type Error = CoreError;

    fn try_from(input: &CreateExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            name: exercise::validate_exercise_name(&input.name)?,
            body_part: exercise::validate_body_part(input.body_part)?.map(|b| b.code()),
            exercise_type: exercise::validate_exercise_type(input.exercise_type)?.code(),
        })
    }
}

/// Filters for listing the exercises visible to a user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseFilter {
    /// Case-sensitive name prefix.
    pub name: Option<String>,
    pub body_part: Option<ExerciseCode>,
}
