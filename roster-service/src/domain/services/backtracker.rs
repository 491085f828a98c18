use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;

use crate::domain::entities::{Draft, JobSpec, Staff};
use crate::domain::rules::{ValidationContext, Validator};
use crate::domain::services::slot_orderer::Slot;
use crate::domain::services::value_scorer;

/// Outcome of one backtracking run: either every slot in the ordered
/// list was filled, or the search was exhausted/cancelled with the
/// given partial draft left in place.
pub enum SearchOutcome {
    Success,
    Exhausted,
    Cancelled,
}

/// Depth-first search with chronological undo over the MRV-ordered
/// slot list, grounded on the teacher's recursive place-or-fall-back
/// shape in its schedule generator, generalized to true backtracking:
/// a failed subtree always undoes its own writes before returning.
pub struct Backtracker<'a> {
    staff: &'a [Staff],
    job_spec: &'a JobSpec,
    validator: &'a Validator,
    cancelled: Arc<AtomicBool>,
}

impl<'a> Backtracker<'a> {
    pub fn new(staff: &'a [Staff], job_spec: &'a JobSpec, validator: &'a Validator, cancelled: Arc<AtomicBool>) -> Self {
        Self {
            staff,
            job_spec,
            validator,
            cancelled,
        }
    }

    pub fn solve(&self, slots: &[Slot], draft: &mut Draft, rng: &mut StdRng) -> SearchOutcome {
        self.solve_from(slots, draft, rng)
    }

    fn solve_from(&self, slots: &[Slot], draft: &mut Draft, rng: &mut StdRng) -> SearchOutcome {
        let Some((slot, rest)) = slots.split_first() else {
            return SearchOutcome::Success;
        };

        if self.cancelled.load(Ordering::Relaxed) {
            return SearchOutcome::Cancelled;
        }

        let member = &self.staff[slot.staff_idx];
        let date = self.job_spec.date_for_offset(slot.offset);
        let scored = value_scorer::score_candidates(member, slot.staff_idx, date, draft, self.job_spec, rng);

        for candidate in scored {
            let ctx = ValidationContext {
                staff: member,
                staff_idx: slot.staff_idx,
                date,
                offset: slot.offset,
                kind: candidate.kind,
                draft,
                job_spec: self.job_spec,
            };
            if !self.validator.is_valid(&ctx) {
                continue;
            }

            draft.put(slot.staff_idx, slot.offset, candidate.kind);
            match self.solve_from(rest, draft, rng) {
                SearchOutcome::Success => return SearchOutcome::Success,
                SearchOutcome::Cancelled => return SearchOutcome::Cancelled,
                SearchOutcome::Exhausted => {
                    draft.delete(slot.staff_idx, slot.offset);
                }
            }
        }

        SearchOutcome::Exhausted
    }
}
