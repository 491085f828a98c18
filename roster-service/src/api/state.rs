use std::sync::Arc;

use crate::domain::services::RosterGenerator;

#[derive(Clone)]
pub struct AppState {
    pub roster_generator: Arc<RosterGenerator>,
    pub solve_timeout_secs: u64,
    pub default_target_holidays: u32,
}

impl AppState {
    pub fn new(roster_generator: Arc<RosterGenerator>, solve_timeout_secs: u64, default_target_holidays: u32) -> Self {
        Self {
            roster_generator,
            solve_timeout_secs,
            default_target_holidays,
        }
    }
}
