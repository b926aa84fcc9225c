//! Workout set entity model.

use serde::Serialize;
use sqlx::FromRow;
use trainlog_core::set_sync::SetMeasurements;
use trainlog_core::types::{DbId, Timestamp};

/// A row from the `workout_sets` table: one effort within a workout.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub workout_id: DbId,
    pub weight: Option<i32>,
    pub reps: Option<i32>,
    pub distance: Option<i32>,
    pub duration: Option<i32>,
    pub speed: Option<i32>,
    pub calories: Option<i32>,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

impl WorkoutSet {
    pub fn measurements(&self) -> SetMeasurements {
        SetMeasurements {
            weight: self.weight,
            reps: self.reps,
            distance: self.distance,
            duration: self.duration,
            speed: self.speed,
            calories: self.calories,
        }
    }
}
