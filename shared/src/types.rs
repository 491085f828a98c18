use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Gender as tracked on a staff record, used only for the scorer's
/// bathing-day fairness bonuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "gender", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Unspecified,
}

/// Employment type. Night-shift qualification is restricted to
/// `Regular` and `Contract`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "employment_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    Regular,
    Contract,
    PartTime,
    Other,
}

impl EmploymentType {
    /// Whether this employment type may be assigned a `Night` shift.
    pub fn night_qualified(self) -> bool {
        matches!(self, EmploymentType::Regular | EmploymentType::Contract)
    }
}

/// Experience level. `Trainee` is never scheduled to work alone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "experience_level", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceLevel {
    Veteran,
    Regular,
    Trainee,
}

/// Overall status of a solve, echoed at the API boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "generation_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationStatus {
    Complete,
    Incomplete,
}
