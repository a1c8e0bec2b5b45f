use crate::{db::Db, models::AvailableSlotRow};
use chrono::NaiveDate;
use sqlx::Result as SqlxResult;
use uuid::Uuid;

/// Thin wrapper over the `get_available_slots` database function.
#[derive(Debug, Clone)]
pub struct AvailabilityRepo {
    pool: Db,
}

impl AvailabilityRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    pub async fn get_available_slots(
        &self,
        court_id: Uuid,
        date: NaiveDate,
    ) -> SqlxResult<Vec<AvailableSlotRow>> {
        sqlx::query_as::<_, AvailableSlotRow>(
            r#"
            SELECT start_time::text AS start_time, end_time::text AS end_time, is_available
            FROM get_available_slots($1, $2)
            "#,
        )
        .bind(court_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
    }
}
