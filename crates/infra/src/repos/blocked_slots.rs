use crate::{db::Db, models::BlockedSlotRow};
use chrono::NaiveDate;
use sqlx::{Postgres, QueryBuilder, Result as SqlxResult};
use uuid::Uuid;

/// A blocked slot ready to be written. Times must already be `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlockedSlot {
    pub court_id: Uuid,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub reason: String,
    pub created_by: Uuid,
}

#[derive(Debug, Clone)]
pub struct BlockedSlotRepo {
    pool: Db,
}

impl BlockedSlotRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    /// Insert all slots with one multi-row INSERT inside a transaction
    pub async fn insert_batch(&self, slots: &[NewBlockedSlot]) -> SqlxResult<Vec<BlockedSlotRow>> {
        if slots.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;

        let mut query = QueryBuilder::<Postgres>::new(
            "INSERT INTO blocked_slots (court_id, date, start_time, end_time, reason, created_by) ",
        );
        query.push_values(slots, |mut row, slot| {
            row.push_bind(slot.court_id)
                .push_bind(slot.date)
                .push_bind(slot.start_time.clone())
                .push_unseparated("::time")
                .push_bind(slot.end_time.clone())
                .push_unseparated("::time")
                .push_bind(slot.reason.clone())
                .push_bind(slot.created_by);
        });
        query.push(
            " RETURNING id, court_id, date, start_time::text AS start_time, \
             end_time::text AS end_time, reason, created_by, created_at",
        );

        let rows = query
            .build_query_as::<BlockedSlotRow>()
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(rows)
    }

    /// Blocked slots of a court on one day
    pub async fn list_for_court_on(
        &self,
        court_id: Uuid,
        date: NaiveDate,
    ) -> SqlxResult<Vec<BlockedSlotRow>> {
        sqlx::query_as::<_, BlockedSlotRow>(
            r#"
            SELECT id, court_id, date, start_time::text AS start_time, end_time::text AS end_time,
                   reason, created_by, created_at
            FROM blocked_slots
            WHERE court_id = $1 AND date = $2
            ORDER BY start_time ASC, created_at ASC
            "#,
        )
        .bind(court_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
    }
}
