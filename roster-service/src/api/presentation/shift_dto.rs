use chrono::NaiveDate;
use serde::Serialize;
use shared::GenerationStatus;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::{GeneratedShift, GenerationOutcome};

/// One wire-level roster row. `shift_type` is the literal Japanese
/// token, matching the original system rather than the internal enum
/// name.
#[derive(Debug, Serialize, ToSchema)]
pub struct GeneratedShiftSerialize {
    pub id: Uuid,
    pub date: NaiveDate,
    pub shift_type: String,
    pub notes: Option<String>,
    pub staff_id: Uuid,
    pub staff_name: String,
}

impl From<GeneratedShift> for GeneratedShiftSerialize {
    fn from(shift: GeneratedShift) -> Self {
        Self {
            id: shift.id,
            date: shift.date,
            shift_type: shift.shift_kind.wire_token().to_string(),
            notes: shift.notes,
            staff_id: shift.staff_id,
            staff_name: shift.staff_name,
        }
    }
}

/// The full solve response: a human-readable status message plus the
/// flattened roster.
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateResponse {
    pub message: String,
    pub generated_shifts: Vec<GeneratedShiftSerialize>,
}

impl From<GenerationOutcome> for GenerateResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        let status = outcome.status();
        let message = match status {
            GenerationStatus::Complete => "complete".to_string(),
            GenerationStatus::Incomplete => "incomplete".to_string(),
        };
        let generated_shifts = match outcome {
            GenerationOutcome::Complete(shifts) | GenerationOutcome::Incomplete(shifts) => {
                shifts.into_iter().map(GeneratedShiftSerialize::from).collect()
            }
        };
        Self {
            message,
            generated_shifts,
        }
    }
}
