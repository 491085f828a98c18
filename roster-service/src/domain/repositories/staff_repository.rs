use async_trait::async_trait;
use shared::DomainResult;

use crate::domain::entities::Staff;

/// Read-only access to the staff roster and their weekday/shift-kind
/// availabilities. The orchestrator takes one snapshot per solve; this
/// trait never mutates anything.
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// All staff eligible for scheduling, each with its full
    /// availability list attached.
    async fn list_active(&self) -> DomainResult<Vec<Staff>>;
}
