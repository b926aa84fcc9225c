//! Exercise catalog rules: body-part and type codes, name validation, and
//! the visibility/ownership predicates every exercise lookup goes through.
//!
//! Presets (`is_preset = true`, no owner) are visible to everyone and
//! mutable by no one. Custom exercises are visible and mutable only by
//! their owner. Soft-deleted exercises are never visible.

use crate::error::CoreError;
use crate::types::DbId;

/// Integer code type matching SMALLINT columns in the database.
pub type ExerciseCode = i16;

/// Maximum allowed length (in characters) of an exercise name.
pub const MAX_EXERCISE_NAME_LENGTH: usize = 100;

macro_rules! define_code_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the integer code stored in the database and sent over the wire.
            pub fn code(self) -> ExerciseCode {
                self as ExerciseCode
            }
        }

        impl From<$name> for ExerciseCode {
            fn from(value: $name) -> Self {
                value as ExerciseCode
            }
        }

        impl TryFrom<ExerciseCode> for $name {
            type Error = CoreError;

            fn try_from(code: ExerciseCode) -> Result<Self, Self::Error> {
                match code {
                    $( $val => Ok(Self::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Invalid {} code: {other}",
                        $label
                    ))),
                }
            }
        }
    };
}

define_code_enum! {
    /// Targeted body part of an exercise.
    BodyPart ("bodyPart") {
        Chest = 0,
        Back = 1,
        Shoulders = 2,
        Arms = 3,
        Legs = 4,
        Core = 5,
    }
}

define_code_enum! {
    /// Whether an exercise records strength (weight/reps) or cardio
    /// (distance/duration/speed/calories) sets. A convention for clients,
    /// not a constraint on which set fields may be filled.
    ExerciseType ("exerciseType") {
        Strength = 0,
        Cardio = 1,
    }
}

impl Default for ExerciseType {
    fn default() -> Self {
        Self::Strength
    }
}

/// The ownership facts needed to decide who may see or change an exercise.
///
/// Implemented by the database row type so the predicates below stay the
/// single place where visibility is decided.
pub trait ExerciseOwnership {
    fn owner_id(&self) -> Option<DbId>;
    fn is_preset(&self) -> bool;
    fn is_deleted(&self) -> bool;
}

/// True when `user_id` may see the exercise: it is live, and it is either a
/// preset or owned by the user.
pub fn is_visible_to<E: ExerciseOwnership>(exercise: &E, user_id: DbId) -> bool {
    !exercise.is_deleted() && (exercise.is_preset() || exercise.owner_id() == Some(user_id))
}

/// Reject any mutation of a preset exercise.
///
/// `action` is the past participle used in the error message (`"edited"`,
/// `"deleted"`).
pub fn ensure_not_preset<E: ExerciseOwnership>(exercise: &E, action: &str) -> Result<(), CoreError> {
    if exercise.is_preset() {
        return Err(CoreError::Forbidden(format!(
            "Preset exercises cannot be {action}"
        )));
    }
    Ok(())
}

/// Check that an existing, live exercise may be attached to a session owned
/// by `user_id`. Unlike catalog lookups this reports a foreign exercise as
/// FORBIDDEN rather than NOT_FOUND.
pub fn ensure_usable_by<E: ExerciseOwnership>(exercise: &E, user_id: DbId) -> Result<(), CoreError> {
    if exercise.is_preset() || exercise.owner_id() == Some(user_id) {
        Ok(())
    } else {
        Err(CoreError::Forbidden("This exercise cannot be used".to_string()))
    }
}

/// Validate an exercise name: trimmed, non-empty, at most
/// [`MAX_EXERCISE_NAME_LENGTH`] characters. Returns the trimmed name.
pub fn validate_exercise_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Exercise name must not be empty".to_string(),
        ));
    }
    let len = trimmed.chars().count();
    if len > MAX_EXERCISE_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Exercise name must not exceed {MAX_EXERCISE_NAME_LENGTH} characters, got {len}"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate an optional body-part code.
pub fn validate_body_part(code: Option<ExerciseCode>) -> Result<Option<BodyPart>, CoreError> {
    code.map(BodyPart::try_from).transpose()
}

/// Validate an optional exercise-type code, defaulting to strength.
pub fn validate_exercise_type(code: Option<ExerciseCode>) -> Result<ExerciseType, CoreError> {
    code.map(ExerciseType::try_from)
        .transpose()
        .map(Option::unwrap_or_default)
}
