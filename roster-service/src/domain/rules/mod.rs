mod availability_rule;
mod consecutive_work_cap_rule;
mod holiday_quota_rule;
mod night_qualification_rule;
mod post_night_chain_rule;
mod staffing_ceiling_rule;
mod trainee_solo_rule;
mod weekly_hours_cap_rule;

pub use availability_rule::AvailabilityRule;
pub use consecutive_work_cap_rule::ConsecutiveWorkCapRule;
pub use holiday_quota_rule::HolidayQuotaRule;
pub use night_qualification_rule::NightQualificationRule;
pub use post_night_chain_rule::PostNightChainRule;
pub use staffing_ceiling_rule::StaffingCeilingRule;
pub use trainee_solo_rule::TraineeSoloRule;
pub use weekly_hours_cap_rule::WeeklyHoursCapRule;

use crate::domain::entities::{Draft, JobSpec, ShiftKind, Staff};

/// The subset of `scheduling_rules` config that the validator's own
/// rule set reads directly, kept free of any infrastructure type so
/// the domain layer never depends on `infrastructure::config`.
#[derive(Debug, Clone, Copy)]
pub struct RuleSettings {
    pub weekly_hours_cap: f64,
    pub consecutive_work_cap: u32,
    pub strict_staffing_ceiling: bool,
}

/// Everything a rule needs to decide a single (staff, date, kind)
/// placement. Built fresh per validator call; cheap to construct since
/// it only borrows.
pub struct ValidationContext<'a> {
    pub staff: &'a Staff,
    pub staff_idx: usize,
    pub date: chrono::NaiveDate,
    pub offset: crate::domain::entities::DayOffset,
    pub kind: ShiftKind,
    pub draft: &'a Draft,
    pub job_spec: &'a JobSpec,
}

/// A single hard constraint. Total and side-effect-free: a rule can
/// never fail to produce an answer, only say yes or no.
pub trait Rule: Send + Sync {
    fn check(&self, ctx: &ValidationContext) -> bool;
}

/// Runs every rule against a context and short-circuits on the first
/// failure. Grounded on the teacher's `ScheduleGenerator` holding a
/// `Vec<Arc<dyn Rule>>` and iterating them in `is_valid_assignment`.
pub struct Validator {
    rules: Vec<Box<dyn Rule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(AvailabilityRule),
                Box::new(PostNightChainRule),
                Box::new(NightQualificationRule),
                Box::new(ConsecutiveWorkCapRule::default()),
                Box::new(HolidayQuotaRule),
                Box::new(WeeklyHoursCapRule::default()),
                Box::new(StaffingCeilingRule::default()),
                Box::new(TraineeSoloRule),
            ],
        }
    }

    /// Builds the same rule set as [`Validator::new`] but with the
    /// operator-tunable caps taken from configuration rather than
    /// their spec defaults.
    pub fn from_settings(settings: &RuleSettings) -> Self {
        Self {
            rules: vec![
                Box::new(AvailabilityRule),
                Box::new(PostNightChainRule),
                Box::new(NightQualificationRule),
                Box::new(ConsecutiveWorkCapRule(settings.consecutive_work_cap)),
                Box::new(HolidayQuotaRule),
                Box::new(WeeklyHoursCapRule(settings.weekly_hours_cap)),
                Box::new(StaffingCeilingRule(settings.strict_staffing_ceiling)),
                Box::new(TraineeSoloRule),
            ],
        }
    }

    pub fn is_valid(&self, ctx: &ValidationContext) -> bool {
        self.rules.iter().all(|rule| rule.check(ctx))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
