use super::{Rule, ValidationContext};
use shared::ExperienceLevel;

/// Rule: a trainee may only hold a `WORK` shift on a day where at least
/// one other staff member already holds a `WORK` shift.
pub struct TraineeSoloRule;

impl Rule for TraineeSoloRule {
    fn check(&self, ctx: &ValidationContext) -> bool {
        if ctx.staff.experience != ExperienceLevel::Trainee || !ctx.kind.is_work() {
            return true;
        }
        ctx.draft.other_work_on_day(ctx.staff_idx, ctx.offset)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::domain::entities::{Draft, JobSpec, ShiftKind, Staff};
    use shared::{EmploymentType, Gender};

    fn staff_of(experience: ExperienceLevel) -> Staff {
        Staff {
            id: Uuid::new_v4(),
            name: "Jane".into(),
            gender: Gender::Unspecified,
            employment_type: EmploymentType::Regular,
            experience,
            availabilities: vec![],
        }
    }

    #[test]
    fn rejects_a_trainee_working_alone() {
        let trainee = staff_of(ExperienceLevel::Trainee);
        let draft = Draft::new(&[trainee.id], 28);
        let job_spec = JobSpec {
            year: 2026,
            month: 1,
            target_holidays: 8,
            required_staffing: Default::default(),
            rng_seed: 0,
        };
        let ctx = ValidationContext {
            staff: &trainee,
            staff_idx: 0,
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            offset: 5,
            kind: ShiftKind::Early,
            draft: &draft,
            job_spec: &job_spec,
        };
        assert!(!TraineeSoloRule.check(&ctx));
    }

    #[test]
    fn allows_a_trainee_alongside_another_worker() {
        let trainee = staff_of(ExperienceLevel::Trainee);
        let regular = staff_of(ExperienceLevel::Regular);
        let mut draft = Draft::new(&[trainee.id, regular.id], 28);
        draft.put(1, 5, ShiftKind::Early);
        let job_spec = JobSpec {
            year: 2026,
            month: 1,
            target_holidays: 8,
            required_staffing: Default::default(),
            rng_seed: 0,
        };
        let ctx = ValidationContext {
            staff: &trainee,
            staff_idx: 0,
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            offset: 5,
            kind: ShiftKind::Early,
            draft: &draft,
            job_spec: &job_spec,
        };
        assert!(TraineeSoloRule.check(&ctx));
    }
}
