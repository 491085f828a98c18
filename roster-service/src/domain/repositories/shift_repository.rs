use std::collections::HashMap;

use async_trait::async_trait;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::GeneratedShift;

/// The last two days of the month preceding a solve, per staff, ordered
/// `[two_days_before, one_day_before]`. Feeds the post-night-chain rule
/// across the month boundary.
pub type MonthTail = HashMap<Uuid, [Option<crate::domain::entities::ShiftKind>; 2]>;

#[async_trait]
pub trait ShiftRepository: Send + Sync {
    /// The tail of the previous month's roster, keyed by staff id.
    /// Staff with no prior-month rows are simply absent from the map.
    async fn month_tail(&self, year: i32, month: u32) -> DomainResult<MonthTail>;

    /// Atomically replace every persisted shift for (year, month) with
    /// `shifts`. A full month is always written as a unit; there is no
    /// partial-day update.
    async fn replace_month(&self, year: i32, month: u32, shifts: Vec<GeneratedShift>) -> DomainResult<()>;
}
