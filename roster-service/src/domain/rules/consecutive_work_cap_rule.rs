use super::{Rule, ValidationContext};

const DEFAULT_MAX_CONSECUTIVE: u32 = 4;

/// Rule: no more than `max_consecutive` consecutive `WORK` days; the
/// next one is rejected. Cap is operator-tunable (`scheduling_rules
/// .consecutive_work_cap` in config), defaulting to four.
pub struct ConsecutiveWorkCapRule(pub u32);

impl Default for ConsecutiveWorkCapRule {
    fn default() -> Self {
        Self(DEFAULT_MAX_CONSECUTIVE)
    }
}

impl Rule for ConsecutiveWorkCapRule {
    fn check(&self, ctx: &ValidationContext) -> bool {
        if !ctx.kind.is_work() {
            return true;
        }
        ctx.draft.work_run_before(ctx.staff_idx, ctx.offset, self.0) < self.0
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
    fn rejects_a_fifth_consecutive_work_day() {
        let staff = bare_staff();
        let mut draft = Draft::new(&[staff.id], 28);
        for d in 1..=4 {
            draft.put(0, d, ShiftKind::Early);
        }
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
        assert!(!ConsecutiveWorkCapRule::default().check(&ctx));
    }

    #[test]
    fn allows_non_work_kinds_regardless_of_run_length() {
        let staff = bare_staff();
        let mut draft = Draft::new(&[staff.id], 28);
        for d in 1..=4 {
            draft.put(0, d, ShiftKind::Early);
        }
        let job_spec = bare_job_spec();
        let ctx = ValidationContext {
            staff: &staff,
            staff_idx: 0,
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            offset: 5,
            kind: ShiftKind::Holiday,
            draft: &draft,
            job_spec: &job_spec,
        };
        assert!(ConsecutiveWorkCapRule::default().check(&ctx));
    }
}
