use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::GenerationStatus;
use utoipa::ToSchema;
use uuid::Uuid;

use super::shift::ShiftKind;

/// Per-day staffing requirement: shift kind → number of staff needed.
/// Absent kinds default to zero required.
pub type DailyRequirement = HashMap<ShiftKind, u32>;

/// A solve request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobSpec {
    pub year: i32,
    pub month: u32,
    #[serde(default = "default_target_holidays")]
    pub target_holidays: u32,
    #[serde(default)]
    pub required_staffing: HashMap<NaiveDate, DailyRequirement>,
    /// RNG seed for the scorer's shuffle and the night-triple picker.
    /// Defaults to a fixed seed so a bare request is still
    /// reproducible.
    #[serde(default = "default_seed")]
    pub rng_seed: u64,
}

fn default_target_holidays() -> u32 {
    8
}

fn default_seed() -> u64 {
    0
}

impl JobSpec {
    pub fn required_for(&self, date: NaiveDate, kind: ShiftKind) -> u32 {
        self.required_staffing
            .get(&date)
            .and_then(|day| day.get(&kind))
            .copied()
            .unwrap_or(0)
    }

    /// Total nights required across every day of the target month:
    /// the sum of `required[date][night]` over all dates.
    pub fn total_required_nights(&self) -> u32 {
        self.required_staffing
            .values()
            .filter_map(|day| day.get(&ShiftKind::Night))
            .sum()
    }

    /// Number of days in the target month.
    pub fn month_days(&self) -> u32 {
        let next_month_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
        .expect("valid calendar date");
        let this_month_first =
            NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid calendar date");
        (next_month_first - this_month_first).num_days() as u32
    }

    /// The calendar date `day_offset` days away from the 1st of the
    /// target month (offsets `-1`/`0` land in the previous month).
    pub fn date_for_offset(&self, day_offset: super::draft::DayOffset) -> NaiveDate {
        let first_day =
            NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid calendar date");
        first_day + chrono::Duration::days((day_offset - 1) as i64)
    }
}

/// One flattened, persisted roster row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedShift {
    pub id: Uuid,
    pub date: NaiveDate,
    pub shift_kind: ShiftKind,
    pub notes: Option<String>,
    pub staff_id: Uuid,
    pub staff_name: String,
}

/// Result of one solve: either every slot was filled under all hard
/// constraints, or the search was exhausted/aborted and the best
/// partial draft is returned as-is. Never an error.
#[derive(Debug, Clone)]
pub enum GenerationOutcome {
    Complete(Vec<GeneratedShift>),
    Incomplete(Vec<GeneratedShift>),
}

impl GenerationOutcome {
    pub fn status(&self) -> GenerationStatus {
        match self {
            GenerationOutcome::Complete(_) => GenerationStatus::Complete,
            GenerationOutcome::Incomplete(_) => GenerationStatus::Incomplete,
        }
    }

    pub fn shifts(&self) -> &[GeneratedShift] {
        match self {
            GenerationOutcome::Complete(shifts) | GenerationOutcome::Incomplete(shifts) => shifts,
        }
    }
}
