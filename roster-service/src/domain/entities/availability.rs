use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::shift::ShiftKind;

/// One (day_of_week, shift_kind) availability override for a staff
/// member. `day_of_week` is 0=Sunday .. 6=Saturday. Unique per (staff,
/// day_of_week, shift_kind); absence means "available".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct AvailabilityEntry {
    pub day_of_week: u8,
    pub shift_kind: ShiftKind,
    pub is_available: bool,
}
