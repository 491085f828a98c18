use super::{Rule, ValidationContext};

/// Rule: a `WORK` kind may never be placed beyond the day's required
/// headcount. The requirement is a ceiling, not a floor: shortages
/// persist until filled, surpluses are prevented. Disabled entirely
/// when `scheduling_rules.strict_staffing_ceiling` is false.
pub struct StaffingCeilingRule(pub bool);

impl Default for StaffingCeilingRule {
    fn default() -> Self {
        Self(true)
    }
}

impl Rule for StaffingCeilingRule {
    fn check(&self, ctx: &ValidationContext) -> bool {
        if !self.0 || !ctx.kind.is_work() {
            return true;
        }
        let required = ctx.job_spec.required_for(ctx.date, ctx.kind);
        let current = ctx.draft.count_on_day(ctx.offset, ctx.kind) as u32;
        current < required
    }
}
