use serde::{Deserialize, Serialize};
use shared::{EmploymentType, ExperienceLevel, Gender};
use utoipa::ToSchema;
use uuid::Uuid;

use super::availability::AvailabilityEntry;

/// Immutable-for-the-duration-of-a-solve staff snapshot. Subsequent
/// CRUD on the store has no effect on an in-flight solve because the
/// orchestrator reads this once, up front.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Staff {
    pub id: Uuid,
    pub name: String,
    pub gender: Gender,
    pub employment_type: EmploymentType,
    pub experience: ExperienceLevel,
    pub availabilities: Vec<AvailabilityEntry>,
}

impl Staff {
    /// Look up the availability entry for a given weekday/kind. Absent
    /// entries default to available.
    pub fn is_available(&self, day_of_week: u8, kind: super::shift::ShiftKind) -> bool {
        self.availabilities
            .iter()
            .find(|entry| entry.day_of_week == day_of_week && entry.shift_kind == kind)
            .map(|entry| entry.is_available)
            .unwrap_or(true)
    }
}
