use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::domain::entities::{Draft, JobSpec, ShiftKind, Staff};
use crate::domain::repositories::MonthTail;
use crate::domain::rules::{ValidationContext, Validator};

/// Greedily pre-assigns `(night, after, holiday)` triples before the
/// main search starts, grounded on the teacher's `GreedyScheduler`
/// most-constrained-first assignment loop generalized to a three-day
/// forced write with an injected RNG.
pub struct NightTriplePreassigner<'a> {
    rng: &'a mut StdRng,
}

impl<'a> NightTriplePreassigner<'a> {
    pub fn new(rng: &'a mut StdRng) -> Self {
        Self { rng }
    }

    /// Writes the prior-month tail into the draft and applies any
    /// chained forced values implied by it, then greedily fills night
    /// triples until required demand is met or no staff has a
    /// candidate left.
    pub fn preassign(
        &mut self,
        draft: &mut Draft,
        staff: &[Staff],
        job_spec: &JobSpec,
        tail: &MonthTail,
        validator: &Validator,
    ) {
        self.seed_tail(draft, staff, tail);

        let total_required = job_spec.total_required_nights();
        let mut assigned_nights = draft
            .staff_ids()
            .iter()
            .enumerate()
            .map(|(idx, _)| (1..=draft.month_days() as i32).filter(|&d| draft.get(idx, d) == Some(ShiftKind::Night)).count())
            .sum::<usize>() as u32;

        while assigned_nights < total_required {
            let candidates_by_staff: Vec<(usize, Vec<i32>)> = staff
                .iter()
                .enumerate()
                .filter(|(_, s)| s.employment_type.night_qualified())
                .map(|(idx, s)| (idx, self.candidate_starts(draft, s, idx, job_spec, validator)))
                .filter(|(_, starts)| !starts.is_empty())
                .collect();

            let Some((staff_idx, starts)) = candidates_by_staff
                .into_iter()
                .min_by_key(|(idx, starts)| (starts.len(), *idx))
            else {
                break;
            };

            let start = *starts.choose(self.rng).expect("non-empty by construction");
            draft.put(staff_idx, start, ShiftKind::Night);
            draft.put(staff_idx, start + 1, ShiftKind::After);
            draft.put(staff_idx, start + 2, ShiftKind::Holiday);
            assigned_nights += 1;
        }
    }

    fn seed_tail(&self, draft: &mut Draft, staff: &[Staff], tail: &MonthTail) {
        for (idx, member) in staff.iter().enumerate() {
            let Some([two_before, one_before]) = tail.get(&member.id).copied() else {
                continue;
            };
            if let Some(kind) = two_before {
                draft.put(idx, -1, kind);
            }
            if let Some(kind) = one_before {
                draft.put(idx, 0, kind);
            }

            if one_before == Some(ShiftKind::Night) {
                draft.put(idx, 1, ShiftKind::After);
                draft.put(idx, 2, ShiftKind::Holiday);
            } else if two_before == Some(ShiftKind::Night) && one_before == Some(ShiftKind::After) {
                draft.put(idx, 1, ShiftKind::Holiday);
            }
        }
    }

    fn candidate_starts(
        &self,
        draft: &Draft,
        staff_member: &Staff,
        staff_idx: usize,
        job_spec: &JobSpec,
        validator: &Validator,
    ) -> Vec<i32> {
        let month_days = draft.month_days() as i32;
        (1..=month_days)
            .filter(|&start| start + 2 <= month_days)
            .filter(|&start| {
                draft.get(staff_idx, start).is_none()
                    && draft.get(staff_idx, start + 1).is_none()
                    && draft.get(staff_idx, start + 2).is_none()
            })
            .filter(|&start| {
                [
                    (start, ShiftKind::Night),
                    (start + 1, ShiftKind::After),
                    (start + 2, ShiftKind::Holiday),
                ]
                .iter()
                .all(|&(offset, kind)| {
                    let ctx = ValidationContext {
                        staff: staff_member,
                        staff_idx,
                        date: job_spec.date_for_offset(offset),
                        offset,
                        kind,
                        draft,
                        job_spec,
                    };
                    validator.is_valid(&ctx)
                })
            })
            .collect()
    }
}
