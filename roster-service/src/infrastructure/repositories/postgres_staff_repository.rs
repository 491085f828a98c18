use std::collections::HashMap;

use async_trait::async_trait;
use shared::{DomainError, DomainResult, EmploymentType, ExperienceLevel, Gender};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{AvailabilityEntry, Staff};
use crate::domain::entities::ShiftKind;
use crate::domain::repositories::StaffRepository;

pub struct PostgresStaffRepository {
    pool: PgPool,
}

impl PostgresStaffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct StaffRow {
    id: Uuid,
    name: String,
    gender: Gender,
    employment_type: EmploymentType,
    experience: ExperienceLevel,
}

#[derive(sqlx::FromRow)]
struct AvailabilityRow {
    staff_id: Uuid,
    day_of_week: i16,
    shift_kind: ShiftKind,
    is_available: bool,
}

#[async_trait]
impl StaffRepository for PostgresStaffRepository {
    async fn list_active(&self) -> DomainResult<Vec<Staff>> {
        let staff_rows = sqlx::query_as::<_, StaffRow>(
            r#"
            SELECT id, name, gender, employment_type, experience
            FROM staff
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let availability_rows = sqlx::query_as::<_, AvailabilityRow>(
            r#"
            SELECT staff_id, day_of_week, shift_kind, is_available
            FROM staff_availability
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let mut availabilities_by_staff: HashMap<Uuid, Vec<AvailabilityEntry>> = HashMap::new();
        for row in availability_rows {
            availabilities_by_staff
                .entry(row.staff_id)
                .or_default()
                .push(AvailabilityEntry {
                    day_of_week: row.day_of_week as u8,
                    shift_kind: row.shift_kind,
                    is_available: row.is_available,
                });
        }

        Ok(staff_rows
            .into_iter()
            .map(|row| Staff {
                id: row.id,
                name: row.name,
                gender: row.gender,
                employment_type: row.employment_type,
                experience: row.experience,
                availabilities: availabilities_by_staff.remove(&row.id).unwrap_or_default(),
            })
            .collect())
    }
}
