use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{DomainError, DomainResult};
use uuid::Uuid;

use crate::domain::entities::{Draft, GeneratedShift, GenerationOutcome, JobSpec, Staff};
use crate::domain::repositories::{MonthTail, ShiftRepository, StaffRepository};
use crate::domain::rules::{RuleSettings, Validator};
use crate::domain::services::backtracker::{Backtracker, SearchOutcome};
use crate::domain::services::night_triple::NightTriplePreassigner;
use crate::domain::services::slot_orderer;

/// Orchestrates one solve end to end, grounded on the teacher's
/// `ScheduleGenerator::generate_schedule` + `JobProcessor::execute_scheduling`
/// split between pure scheduling logic and I/O. Loads the staff
/// snapshot and the prior-month tail, runs the night-triple
/// pre-assigner, slot orderer, value scorer and backtracker (moved
/// onto a blocking thread since the search is CPU-bound and must not
/// stall the async runtime), then replaces the target month's stored
/// rows in one transaction.
pub struct RosterGenerator {
    staff_repo: Arc<dyn StaffRepository>,
    shift_repo: Arc<dyn ShiftRepository>,
    rule_settings: RuleSettings,
}

impl RosterGenerator {
    pub fn new(
        staff_repo: Arc<dyn StaffRepository>,
        shift_repo: Arc<dyn ShiftRepository>,
        rule_settings: RuleSettings,
    ) -> Self {
        Self {
            staff_repo,
            shift_repo,
            rule_settings,
        }
    }

    pub async fn generate(&self, job_spec: JobSpec, cancelled: Arc<AtomicBool>) -> DomainResult<GenerationOutcome> {
        let staff = self.staff_repo.list_active().await?;
        if staff.is_empty() {
            return Err(DomainError::InvalidInput(
                "no active staff available to schedule".to_string(),
            ));
        }

        let tail = self.shift_repo.month_tail(job_spec.year, job_spec.month).await?;

        let solved = {
            let staff = staff.clone();
            let job_spec = job_spec.clone();
            let rule_settings = self.rule_settings;
            tokio::task::spawn_blocking(move || Self::run_solve(&staff, &job_spec, &tail, rule_settings, cancelled))
                .await
                .map_err(|e| DomainError::InternalError(format!("solve task panicked: {e}")))?
        };

        let shifts = Self::flatten(&solved.draft, &staff, &job_spec);
        let outcome = match solved.outcome {
            SearchOutcome::Success => GenerationOutcome::Complete(shifts),
            SearchOutcome::Exhausted => GenerationOutcome::Incomplete(shifts),
            SearchOutcome::Cancelled => {
                // No write on abort: the orchestrator must distinguish a
                // cancelled search from one that ran to exhaustion.
                return Ok(GenerationOutcome::Incomplete(shifts));
            }
        };

        self.shift_repo
            .replace_month(job_spec.year, job_spec.month, outcome.shifts().to_vec())
            .await?;

        Ok(outcome)
    }

    fn run_solve(
        staff: &[Staff],
        job_spec: &JobSpec,
        tail: &MonthTail,
        rule_settings: RuleSettings,
        cancelled: Arc<AtomicBool>,
    ) -> SolveResult {
        let staff_ids: Vec<Uuid> = staff.iter().map(|s| s.id).collect();
        let mut draft = Draft::new(&staff_ids, job_spec.month_days());
        let validator = Validator::from_settings(&rule_settings);
        let mut rng = StdRng::seed_from_u64(job_spec.rng_seed);

        NightTriplePreassigner::new(&mut rng).preassign(&mut draft, staff, job_spec, tail, &validator);

        let slots = slot_orderer::order_slots(&draft, staff, job_spec, &validator);
        let backtracker = Backtracker::new(staff, job_spec, &validator, cancelled);
        let outcome = backtracker.solve(&slots, &mut draft, &mut rng);

        SolveResult { draft, outcome }
    }

    fn flatten(draft: &Draft, staff: &[Staff], job_spec: &JobSpec) -> Vec<GeneratedShift> {
        let names: HashMap<Uuid, &str> = staff.iter().map(|s| (s.id, s.name.as_str())).collect();

        draft
            .target_month_entries()
            .into_iter()
            .map(|(staff_id, day, kind)| GeneratedShift {
                id: Uuid::new_v4(),
                date: job_spec.date_for_offset(day as i32),
                shift_kind: kind,
                notes: None,
                staff_id,
                staff_name: names.get(&staff_id).copied().unwrap_or("").to_string(),
            })
            .collect()
    }
}

struct SolveResult {
    draft: Draft,
    outcome: SearchOutcome,
}
