use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;
use shared::{DomainError, DomainResult};
use utoipa::ToSchema;

use crate::domain::entities::{JobSpec, ShiftKind};

/// Wire-level solve request: `year`/`month` are required, the rest
/// defaults. `required_staffing` keys use the same wire tokens as the
/// response (`早 日1 日2 中 遅 夜 明 休 有`) so a caller never needs to
/// know the internal enum names.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateRequest {
    pub year: i32,
    pub month: u32,
    #[serde(rename = "targetHolidays", default)]
    pub target_holidays: Option<u32>,
    #[serde(default)]
    pub required_staffing: HashMap<NaiveDate, HashMap<String, u32>>,
    #[serde(default)]
    pub rng_seed: u64,
}

impl GenerateRequest {
    /// `default_target_holidays` supplies the fallback when the request
    /// omits `targetHolidays`; operators can change it via
    /// `scheduling_rules.default_target_holidays` in config.
    pub fn into_job_spec(self, default_target_holidays: u32) -> DomainResult<JobSpec> {
        let mut required_staffing = HashMap::with_capacity(self.required_staffing.len());
        for (date, day) in self.required_staffing {
            let mut by_kind = HashMap::with_capacity(day.len());
            for (token, count) in day {
                let kind = ShiftKind::from_wire_token(&token).ok_or_else(|| {
                    DomainError::InvalidInput(format!("unknown shift kind token: {token}"))
                })?;
                by_kind.insert(kind, count);
            }
            required_staffing.insert(date, by_kind);
        }

        Ok(JobSpec {
            year: self.year,
            month: self.month,
            target_holidays: self.target_holidays.unwrap_or(default_target_holidays),
            required_staffing,
            rng_seed: self.rng_seed,
        })
    }
}
