use super::{Rule, ValidationContext};
use crate::domain::entities::ShiftKind;

/// Rule: a staff member's holiday count may never exceed the monthly
/// target, and no `WORK` placement may make that target unreachable.
pub struct HolidayQuotaRule;

impl Rule for HolidayQuotaRule {
    fn check(&self, ctx: &ValidationContext) -> bool {
        let holidays = ctx.draft.holiday_count(ctx.staff_idx) as u32;
        let target = ctx.job_spec.target_holidays;

        if ctx.kind == ShiftKind::Holiday {
            return holidays < target;
        }

        if ctx.kind.is_work() {
            let assigned = ctx.draft.assigned_count(ctx.staff_idx) as u32;
            let remaining = ctx.draft.month_days().saturating_sub(assigned);
            let need = target.saturating_sub(holidays);
            return remaining >= need;
        }

        true
    }
}
