use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::domain::entities::{Draft, JobSpec, ShiftKind, Staff};
use shared::Gender;

const SHORTAGE_WEIGHT: i32 = 100;
const BATHING_DAY_BONUS: i32 = 5;
const NIGHT_FAIRNESS_BONUS: i32 = 5;

/// One scored candidate kind for a slot, ready to be tried in order by
/// the backtracker.
#[derive(Debug, Clone, Copy)]
pub struct ScoredKind {
    pub kind: ShiftKind,
    pub score: i32,
}

/// Scores every candidate kind for a slot, shuffles the list so ties
/// rotate across runs, then stable-sorts descending by score.
/// Deterministic given a seeded RNG.
pub fn score_candidates(
    staff: &Staff,
    staff_idx: usize,
    date: NaiveDate,
    draft: &Draft,
    job_spec: &JobSpec,
    rng: &mut StdRng,
) -> Vec<ScoredKind> {
    let mut scored: Vec<ScoredKind> = ShiftKind::CANDIDATES
        .iter()
        .map(|&kind| ScoredKind {
            kind,
            score: base_score(staff, staff_idx, date, kind, draft, job_spec),
        })
        .collect();

    scored.shuffle(rng);
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

fn base_score(
    staff: &Staff,
    staff_idx: usize,
    date: NaiveDate,
    kind: ShiftKind,
    draft: &Draft,
    job_spec: &JobSpec,
) -> i32 {
    let mut score = 0;

    if kind.is_work() {
        let required = job_spec.required_for(date, kind) as i32;
        let current = draft.count_on_day(date_offset(job_spec, date), kind) as i32;
        let shortage = (required - current).max(0);
        score += SHORTAGE_WEIGHT * shortage;
    }

    score += bathing_day_bonus(staff.gender, date, kind);

    if kind == ShiftKind::Night {
        let required_nights = job_spec.required_for(date, ShiftKind::Night);
        let already_met = draft.count_on_day(date_offset(job_spec, date), ShiftKind::Night) as u32 >= required_nights;
        if !already_met && below_average_nights(draft, staff_idx) {
            score += NIGHT_FAIRNESS_BONUS;
        }
    }

    score
}

fn date_offset(job_spec: &JobSpec, date: NaiveDate) -> i32 {
    let first_day = NaiveDate::from_ymd_opt(job_spec.year, job_spec.month, 1).expect("valid calendar date");
    (date - first_day).num_days() as i32 + 1
}

/// Soft "bathing day" fairness bonus: gender-tagged weekday
/// preferences. Advisory only; does not affect feasibility.
fn bathing_day_bonus(gender: Gender, date: NaiveDate, kind: ShiftKind) -> i32 {
    let weekday = date.weekday();
    let is_day_shift = matches!(kind, ShiftKind::Early | ShiftKind::Day1 | ShiftKind::Day2 | ShiftKind::Middle);

    match gender {
        Gender::Male => {
            if weekday == chrono::Weekday::Mon && is_day_shift {
                BATHING_DAY_BONUS
            } else if matches!(weekday, chrono::Weekday::Tue | chrono::Weekday::Fri) {
                if kind == ShiftKind::Early || is_day_shift {
                    BATHING_DAY_BONUS
                } else {
                    0
                }
            } else {
                0
            }
        }
        Gender::Female => {
            if matches!(weekday, chrono::Weekday::Mon | chrono::Weekday::Thu) && is_day_shift {
                BATHING_DAY_BONUS
            } else {
                0
            }
        }
        Gender::Unspecified => 0,
    }
}

fn below_average_nights(draft: &Draft, staff_idx: usize) -> bool {
    let night_counts: Vec<usize> = (0..draft.staff_ids().len())
        .map(|idx| (1..=draft.month_days() as i32).filter(|&d| draft.get(idx, d) == Some(ShiftKind::Night)).count())
        .collect();
    if night_counts.is_empty() {
        return true;
    }
    let total: usize = night_counts.iter().sum();
    let average = total as f64 / night_counts.len() as f64;
    (night_counts[staff_idx] as f64) <= average
}
