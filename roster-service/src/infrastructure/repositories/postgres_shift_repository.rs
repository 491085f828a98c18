use chrono::NaiveDate;
use async_trait::async_trait;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{GeneratedShift, ShiftKind};
use crate::domain::repositories::{MonthTail, ShiftRepository};

pub struct PostgresShiftRepository {
    pool: PgPool,
}

impl PostgresShiftRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TailRow {
    staff_id: Uuid,
    date: NaiveDate,
    shift_kind: ShiftKind,
}

fn month_bounds(year: i32, month: u32) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(year, month, 1).expect("valid calendar date");
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("valid calendar date");
    let end = next_month_first.pred_opt().expect("valid calendar date");
    (start, end)
}

#[async_trait]
impl ShiftRepository for PostgresShiftRepository {
    async fn month_tail(&self, year: i32, month: u32) -> DomainResult<MonthTail> {
        let (month_start, _) = month_bounds(year, month);
        let one_before = month_start.pred_opt().expect("valid calendar date");
        let two_before = one_before.pred_opt().expect("valid calendar date");

        let rows = sqlx::query_as::<_, TailRow>(
            r#"
            SELECT staff_id, date, shift_kind
            FROM shifts
            WHERE date BETWEEN $1 AND $2
            "#,
        )
        .bind(two_before)
        .bind(one_before)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let mut tail = MonthTail::new();
        for row in rows {
            let slot = tail.entry(row.staff_id).or_insert([None, None]);
            if row.date == two_before {
                slot[0] = Some(row.shift_kind);
            } else if row.date == one_before {
                slot[1] = Some(row.shift_kind);
            }
        }
        Ok(tail)
    }

    async fn replace_month(&self, year: i32, month: u32, shifts: Vec<GeneratedShift>) -> DomainResult<()> {
        let (month_start, month_end) = month_bounds(year, month);

        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *transaction)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        sqlx::query("DELETE FROM shifts WHERE date BETWEEN $1 AND $2")
            .bind(month_start)
            .bind(month_end)
            .execute(&mut *transaction)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        for shift in shifts {
            sqlx::query(
                r#"
                INSERT INTO shifts (id, date, shift_kind, notes, staff_id)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(shift.id)
            .bind(shift.date)
            .bind(shift.shift_kind)
            .bind(shift.notes)
            .bind(shift.staff_id)
            .execute(&mut *transaction)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        }

        transaction
            .commit()
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
