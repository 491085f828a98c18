use crate::domain::entities::{Draft, JobSpec, ShiftKind, Staff};
use crate::domain::rules::{ValidationContext, Validator};

/// One still-unassigned (staff, date) cell, ready to be handed to the
/// backtracker.
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub staff_idx: usize,
    pub offset: i32,
}

/// Orders every unassigned cell by minimum-remaining-values: the cell
/// with the fewest currently-valid candidate kinds goes first. Run
/// once, before the search begins.
pub fn order_slots(draft: &Draft, staff: &[Staff], job_spec: &JobSpec, validator: &Validator) -> Vec<Slot> {
    let month_days = draft.month_days() as i32;
    let mut slots: Vec<(Slot, usize)> = Vec::new();

    for (staff_idx, member) in staff.iter().enumerate() {
        for offset in 1..=month_days {
            if draft.get(staff_idx, offset).is_some() {
                continue;
            }
            let remaining = ShiftKind::CANDIDATES
                .iter()
                .filter(|&&kind| {
                    let ctx = ValidationContext {
                        staff: member,
                        staff_idx,
                        date: job_spec.date_for_offset(offset),
                        offset,
                        kind,
                        draft,
                        job_spec,
                    };
                    validator.is_valid(&ctx)
                })
                .count();
            slots.push((Slot { staff_idx, offset }, remaining));
        }
    }

    slots.sort_by_key(|(slot, remaining)| (*remaining, slot.staff_idx, slot.offset));
    slots.into_iter().map(|(slot, _)| slot).collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};
    use uuid::Uuid;

    use super::*;
    use shared::{EmploymentType, ExperienceLevel, Gender};

    #[test]
    fn orders_more_constrained_cells_first() {
        let free = Staff {
            id: Uuid::new_v4(),
            name: "Free".into(),
            gender: Gender::Unspecified,
            employment_type: EmploymentType::Regular,
            experience: ExperienceLevel::Regular,
            availabilities: vec![],
        };
        let weekday = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .weekday()
            .num_days_from_sunday() as u8;
        let blocked = ShiftKind::WORK
            .iter()
            .map(|&kind| crate::domain::entities::AvailabilityEntry {
                day_of_week: weekday,
                shift_kind: kind,
                is_available: false,
            })
            .collect();
        let constrained = Staff {
            id: Uuid::new_v4(),
            name: "Constrained".into(),
            gender: Gender::Unspecified,
            employment_type: EmploymentType::Regular,
            experience: ExperienceLevel::Regular,
            availabilities: blocked,
        };

        let staff = vec![free, constrained];
        let draft = Draft::new(&[staff[0].id, staff[1].id], 3);
        let job_spec = JobSpec {
            year: 2026,
            month: 1,
            target_holidays: 8,
            required_staffing: Default::default(),
            rng_seed: 0,
        };
        let validator = Validator::new();

        let slots = order_slots(&draft, &staff, &job_spec, &validator);
        let first = slots[0];
        assert_eq!(first.staff_idx, 1);
        assert_eq!(first.offset, 1);
    }
}
