use super::{Rule, ValidationContext};
use crate::domain::entities::ShiftKind;

/// Rule: only regular or contract staff may hold a `night` shift.
pub struct NightQualificationRule;

impl Rule for NightQualificationRule {
    fn check(&self, ctx: &ValidationContext) -> bool {
        if ctx.kind != ShiftKind::Night {
            return true;
        }
        ctx.staff.employment_type.night_qualified()
    }
}
