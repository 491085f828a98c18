use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use roster_service::domain::entities::{AvailabilityEntry, GeneratedShift, Staff};
use roster_service::domain::repositories::{MonthTail, ShiftRepository, StaffRepository};
use shared::{DomainResult, EmploymentType, ExperienceLevel, Gender};
use uuid::Uuid;

/// In-memory stand-in for `StaffRepository`. Grounded on the teacher's
/// manual `MockScheduleJobRepository` (`RwLock`-guarded state behind a
/// trait impl) rather than a `mockall`-generated mock, since the tests
/// here need to seed a fixed staff snapshot, not assert call counts.
pub struct InMemoryStaffRepository {
    staff: Vec<Staff>,
}

impl InMemoryStaffRepository {
    pub fn new(staff: Vec<Staff>) -> Self {
        Self { staff }
    }
}

#[async_trait]
impl StaffRepository for InMemoryStaffRepository {
    async fn list_active(&self) -> DomainResult<Vec<Staff>> {
        Ok(self.staff.clone())
    }
}

/// In-memory stand-in for `ShiftRepository`. `replace_month` records
/// whatever the orchestrator wrote so tests can assert on persistence
/// (or its absence, for the cancellation scenarios).
#[derive(Default)]
pub struct InMemoryShiftRepository {
    tail: MonthTail,
    written: RwLock<Option<Vec<GeneratedShift>>>,
}

impl InMemoryShiftRepository {
    pub fn new(tail: MonthTail) -> Self {
        Self {
            tail,
            written: RwLock::new(None),
        }
    }

    pub fn written_shifts(&self) -> Option<Vec<GeneratedShift>> {
        self.written.read().unwrap().clone()
    }
}

#[async_trait]
impl ShiftRepository for InMemoryShiftRepository {
    async fn month_tail(&self, _year: i32, _month: u32) -> DomainResult<MonthTail> {
        Ok(self.tail.clone())
    }

    async fn replace_month(&self, _year: i32, _month: u32, shifts: Vec<GeneratedShift>) -> DomainResult<()> {
        *self.written.write().unwrap() = Some(shifts);
        Ok(())
    }
}

/// A plain staff member with no availability overrides (always
/// available) and no night qualification restriction applied yet.
pub fn staff(
    name: &str,
    gender: Gender,
    employment_type: EmploymentType,
    experience: ExperienceLevel,
) -> Staff {
    Staff {
        id: Uuid::new_v4(),
        name: name.to_string(),
        gender,
        employment_type,
        experience,
        availabilities: Vec::new(),
    }
}

pub fn regular_staff(name: &str) -> Staff {
    staff(name, Gender::Unspecified, EmploymentType::Regular, ExperienceLevel::Regular)
}

pub fn trainee_staff(name: &str) -> Staff {
    staff(name, Gender::Unspecified, EmploymentType::PartTime, ExperienceLevel::Trainee)
}

pub fn with_unavailable(mut member: Staff, entries: Vec<AvailabilityEntry>) -> Staff {
    member.availabilities = entries;
    member
}

pub fn required_staffing_for_month(
    year: i32,
    month: u32,
    per_day: Vec<(roster_service::domain::entities::ShiftKind, u32)>,
) -> HashMap<NaiveDate, HashMap<roster_service::domain::entities::ShiftKind, u32>> {
    let days_in_month = {
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .unwrap();
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        (next - first).num_days()
    };

    let mut requirement = HashMap::new();
    for day in 0..days_in_month {
        let date = NaiveDate::from_ymd_opt(year, month, 1).unwrap() + chrono::Duration::days(day);
        requirement.insert(date, per_day.iter().cloned().collect());
    }
    requirement
}
