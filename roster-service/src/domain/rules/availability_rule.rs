use chrono::Datelike;

use super::{Rule, ValidationContext};

/// Rule: a staff member's per-weekday availability override must allow
/// the candidate kind.
pub struct AvailabilityRule;

impl Rule for AvailabilityRule {
    fn check(&self, ctx: &ValidationContext) -> bool {
        let day_of_week = ctx.date.weekday().num_days_from_sunday() as u8;
        ctx.staff.is_available(day_of_week, ctx.kind)
    }
}
