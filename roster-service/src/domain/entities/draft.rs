use std::collections::HashMap;

use uuid::Uuid;

use super::shift::ShiftKind;

/// Day offset relative to the 1st of the target month. `-1` and `0` are
/// the last two days of the *previous* month (the prior-month tail read
/// for post-night-chain context); `1..=month_days` are the target
/// month's own days.
pub type DayOffset = i32;

/// Dense arena-backed partial assignment: (staff_index, day_offset) →
/// shift kind, with `None` as the unassigned sentinel. Replaces the
/// source's nested per-staff map so undo on backtrack is an O(1) slot
/// write instead of a hash removal.
#[derive(Debug, Clone)]
pub struct Draft {
    staff_ids: Vec<Uuid>,
    index_of: HashMap<Uuid, usize>,
    month_days: u32,
    cells: Vec<Option<ShiftKind>>,
}

impl Draft {
    pub fn new(staff_ids: &[Uuid], month_days: u32) -> Self {
        let index_of = staff_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, i))
            .collect();
        let slots_per_staff = month_days as usize + 2; // offsets -1, 0, 1..=month_days
        Self {
            staff_ids: staff_ids.to_vec(),
            index_of,
            month_days,
            cells: vec![None; staff_ids.len() * slots_per_staff],
        }
    }

    pub fn staff_ids(&self) -> &[Uuid] {
        &self.staff_ids
    }

    pub fn month_days(&self) -> u32 {
        self.month_days
    }

    pub fn staff_index(&self, staff_id: Uuid) -> Option<usize> {
        self.index_of.get(&staff_id).copied()
    }

    fn slots_per_staff(&self) -> usize {
        self.month_days as usize + 2
    }

    fn cell_index(&self, staff_idx: usize, offset: DayOffset) -> usize {
        debug_assert!(offset >= -1 && offset <= self.month_days as i32);
        staff_idx * self.slots_per_staff() + (offset + 1) as usize
    }

    pub fn get(&self, staff_idx: usize, offset: DayOffset) -> Option<ShiftKind> {
        if offset < -1 || offset > self.month_days as i32 {
            return None;
        }
        self.cells[self.cell_index(staff_idx, offset)]
    }

    pub fn put(&mut self, staff_idx: usize, offset: DayOffset, kind: ShiftKind) {
        let idx = self.cell_index(staff_idx, offset);
        self.cells[idx] = Some(kind);
    }

    pub fn delete(&mut self, staff_idx: usize, offset: DayOffset) {
        let idx = self.cell_index(staff_idx, offset);
        self.cells[idx] = None;
    }

    /// Count of `Holiday` entries already written for `staff_idx`
    /// within the target month.
    pub fn holiday_count(&self, staff_idx: usize) -> usize {
        (1..=self.month_days as i32)
            .filter(|&d| self.get(staff_idx, d) == Some(ShiftKind::Holiday))
            .count()
    }

    /// Count of all dated (non-sentinel) entries for `staff_idx` within
    /// the target month.
    pub fn assigned_count(&self, staff_idx: usize) -> usize {
        (1..=self.month_days as i32)
            .filter(|&d| self.get(staff_idx, d).is_some())
            .count()
    }

    /// Sum of fixed hours already committed for `staff_idx` within the
    /// target month.
    pub fn hours(&self, staff_idx: usize) -> u32 {
        (1..=self.month_days as i32)
            .filter_map(|d| self.get(staff_idx, d))
            .map(ShiftKind::hours)
            .sum()
    }

    /// Length of the maximal run of `WORK` days immediately preceding
    /// `offset`, capped at the lookback window the validator needs
    /// (up to 4 days back).
    pub fn work_run_before(&self, staff_idx: usize, offset: DayOffset, max_lookback: u32) -> u32 {
        let mut run = 0;
        for back in 1..=max_lookback as i32 {
            match self.get(staff_idx, offset - back) {
                Some(kind) if kind.is_work() => run += 1,
                _ => break,
            }
        }
        run
    }

    /// Number of staff currently holding `kind` on `offset`.
    pub fn count_on_day(&self, offset: DayOffset, kind: ShiftKind) -> usize {
        (0..self.staff_ids.len())
            .filter(|&idx| self.get(idx, offset) == Some(kind))
            .count()
    }

    /// Whether any staff other than `staff_idx` holds a `WORK` kind on
    /// `offset`. Used for the trainee solo check.
    pub fn other_work_on_day(&self, staff_idx: usize, offset: DayOffset) -> bool {
        (0..self.staff_ids.len()).any(|idx| {
            idx != staff_idx
                && self
                    .get(idx, offset)
                    .map(ShiftKind::is_work)
                    .unwrap_or(false)
        })
    }

    /// Flatten every assigned target-month cell to (staff_id, day_offset, kind).
    pub fn target_month_entries(&self) -> Vec<(Uuid, u32, ShiftKind)> {
        let mut out = Vec::new();
        for (staff_idx, &staff_id) in self.staff_ids.iter().enumerate() {
            for d in 1..=self.month_days {
                if let Some(kind) = self.get(staff_idx, d as i32) {
                    out.push((staff_id, d, kind));
                }
            }
        }
        out
    }
}
