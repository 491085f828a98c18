use super::{Rule, ValidationContext};
use crate::domain::entities::ShiftKind;

/// Rule: a `night` must be followed by `after`, and the day after that
/// by `holiday`.
pub struct PostNightChainRule;

impl Rule for PostNightChainRule {
    fn check(&self, ctx: &ValidationContext) -> bool {
        let prev = ctx.draft.get(ctx.staff_idx, ctx.offset - 1);
        let prev2 = ctx.draft.get(ctx.staff_idx, ctx.offset - 2);

        if prev == Some(ShiftKind::Night) && ctx.kind != ShiftKind::After {
            return false;
        }
        if prev2 == Some(ShiftKind::Night) && ctx.kind != ShiftKind::Holiday {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::domain::entities::{Draft, JobSpec, Staff};
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
    fn night_forces_after_the_next_day() {
        let staff = bare_staff();
        let mut draft = Draft::new(&[staff.id], 28);
        draft.put(0, 4, ShiftKind::Night);
        let job_spec = bare_job_spec();
        let ctx = ValidationContext {
            staff: &staff,
            staff_idx: 0,
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            offset: 5,
            kind: ShiftKind::Early,
            draft: &draft,
            job_spec: &job_spec,
        };
        assert!(!PostNightChainRule.check(&ctx));
    }

    #[test]
    fn two_days_after_night_forces_holiday() {
        let staff = bare_staff();
        let mut draft = Draft::new(&[staff.id], 28);
        draft.put(0, 4, ShiftKind::Night);
        draft.put(0, 5, ShiftKind::After);
        let job_spec = bare_job_spec();
        let ctx = ValidationContext {
            staff: &staff,
            staff_idx: 0,
            date: NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
            offset: 6,
            kind: ShiftKind::Early,
            draft: &draft,
            job_spec: &job_spec,
        };
        assert!(!PostNightChainRule.check(&ctx));
    }
}
