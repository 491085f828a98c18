use super::{Rule, ValidationContext};

const DEFAULT_HOURS_PER_WEEK: f64 = 40.0;

/// Rule: a staff member's cumulative hours may never exceed the
/// month's pro-rated weekly cap (`month_days / 7 * hours_per_week`).
/// `hours_per_week` is operator-tunable (`scheduling_rules
/// .weekly_hours_cap` in config), defaulting to 40.
pub struct WeeklyHoursCapRule(pub f64);

impl Default for WeeklyHoursCapRule {
    fn default() -> Self {
        Self(DEFAULT_HOURS_PER_WEEK)
    }
}

impl Rule for WeeklyHoursCapRule {
    fn check(&self, ctx: &ValidationContext) -> bool {
        let current_hours = ctx.draft.hours(ctx.staff_idx) as f64;
        let cap = (ctx.draft.month_days() as f64 / 7.0) * self.0;
        current_hours + ctx.kind.hours() as f64 <= cap
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::domain::entities::{Draft, JobSpec, ShiftKind, Staff};
    use shared::{EmploymentType, ExperienceLevel, Gender};

    fn bare_staff() -> Staff {
        Staff {
            id: Uuid::new_v4(),
            name: "Jane".into(),
            gender: Gender::Unspecified,
            employment_type: EmploymentType::Regular,
            experience: ExperienceLevel::Regular,
            availabilities: vec![],
        }
    }

    fn bare_job_spec() -> JobSpec {
        JobSpec {
            year: 2026,
            month: 1,
            target_holidays: 8,
            required_staffing: Default::default(),
            rng_seed: 0,
        }
    }

    #[test]
    fn rejects_a_night_shift_that_would_exceed_the_cap() {
        let staff = bare_staff();
        let mut draft = Draft::new(&[staff.id], 7); // cap = 40 hours
        draft.put(0, 1, ShiftKind::Early);
        draft.put(0, 2, ShiftKind::Early);
        draft.put(0, 3, ShiftKind::Early);
        draft.put(0, 4, ShiftKind::Early); // 32 hours so far
        let job_spec = bare_job_spec();
        let ctx = ValidationContext {
            staff: &staff,
            staff_idx: 0,
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            offset: 5,
            kind: ShiftKind::Night, // would add 16 -> 48 > 40
            draft: &draft,
            job_spec: &job_spec,
        };
        assert!(!WeeklyHoursCapRule::default().check(&ctx));
    }

    #[test]
    fn allows_a_shift_within_the_cap() {
        let staff = bare_staff();
        let draft = Draft::new(&[staff.id], 7);
        let job_spec = bare_job_spec();
        let ctx = ValidationContext {
            staff: &staff,
            staff_idx: 0,
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            offset: 1,
            kind: ShiftKind::Early,
            draft: &draft,
            job_spec: &job_spec,
        };
        assert!(WeeklyHoursCapRule::default().check(&ctx));
    }
}
