use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;

/// The closed set of shift kinds a staff member can hold on a given day.
///
/// `WORK` kinds occupy a staffing slot and count toward the consecutive-
/// work cap; `NON_WORK` kinds never do. `Night` is the only kind with a
/// non-standard hour count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, Type)]
#[sqlx(type_name = "shift_kind", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftKind {
    Early,
    Day1,
    Day2,
    Middle,
    Late,
    Night,
    /// Mandatory rest morning immediately after a `Night`.
    After,
    /// Counts toward the monthly holiday quota.
    Holiday,
    /// Paid leave: neither work nor holiday.
    Paid,
}

impl ShiftKind {
    pub const WORK: [ShiftKind; 6] = [
        ShiftKind::Early,
        ShiftKind::Day1,
        ShiftKind::Day2,
        ShiftKind::Middle,
        ShiftKind::Late,
        ShiftKind::Night,
    ];

    pub const NON_WORK: [ShiftKind; 3] = [ShiftKind::After, ShiftKind::Holiday, ShiftKind::Paid];

    /// Kinds the scorer and backtracker may freely choose between for
    /// an open slot: the six work kinds plus `holiday`. `after` is
    /// deliberately excluded since it only ever has one legal value
    /// (the day right after a `night`), so it's written directly by
    /// the night-triple preassigner and the tail-seed chain rather
    /// than picked from this list. `paid` is never picked by the
    /// solver either; it's an input-only kind set on existing records.
    pub const CANDIDATES: [ShiftKind; 7] = [
        ShiftKind::Early,
        ShiftKind::Day1,
        ShiftKind::Day2,
        ShiftKind::Middle,
        ShiftKind::Late,
        ShiftKind::Night,
        ShiftKind::Holiday,
    ];

    pub fn is_work(self) -> bool {
        ShiftKind::WORK.contains(&self)
    }

    pub fn is_non_work(self) -> bool {
        ShiftKind::NON_WORK.contains(&self)
    }

    /// Fixed hours this kind contributes toward the weekly-hours cap.
    pub fn hours(self) -> u32 {
        match self {
            ShiftKind::Night => 16,
            k if k.is_work() => 8,
            _ => 0,
        }
    }

    /// The literal wire token used by the original system
    /// (`早 日1 日2 中 遅 夜 明 休 有`).
    pub fn wire_token(self) -> &'static str {
        match self {
            ShiftKind::Early => "早",
            ShiftKind::Day1 => "日1",
            ShiftKind::Day2 => "日2",
            ShiftKind::Middle => "中",
            ShiftKind::Late => "遅",
            ShiftKind::Night => "夜",
            ShiftKind::After => "明",
            ShiftKind::Holiday => "休",
            ShiftKind::Paid => "有",
        }
    }

    pub fn from_wire_token(token: &str) -> Option<Self> {
        Some(match token {
            "早" => ShiftKind::Early,
            "日1" => ShiftKind::Day1,
            "日2" => ShiftKind::Day2,
            "中" => ShiftKind::Middle,
            "遅" => ShiftKind::Late,
            "夜" => ShiftKind::Night,
            "明" => ShiftKind::After,
            "休" => ShiftKind::Holiday,
            "有" => ShiftKind::Paid,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_is_sixteen_hours() {
        assert_eq!(ShiftKind::Night.hours(), 16);
    }

    #[test]
    fn work_kinds_are_eight_hours_except_night() {
        for kind in ShiftKind::WORK {
            if kind != ShiftKind::Night {
                assert_eq!(kind.hours(), 8);
            }
        }
    }

    #[test]
    fn non_work_kinds_are_zero_hours() {
        for kind in ShiftKind::NON_WORK {
            assert_eq!(kind.hours(), 0);
        }
    }

    #[test]
    fn wire_token_round_trips() {
        for kind in ShiftKind::WORK.iter().chain(ShiftKind::NON_WORK.iter()) {
            let token = kind.wire_token();
            assert_eq!(ShiftKind::from_wire_token(token), Some(*kind));
        }
    }
}
