use crate::{db::Db, models::CourtRow};
use sqlx::Result as SqlxResult;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CourtRepo {
    pool: Db,
}

impl CourtRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    /// Get a court by ID
    pub async fn get(&self, id: Uuid) -> SqlxResult<Option<CourtRow>> {
        sqlx::query_as::<_, CourtRow>(
            r#"
            SELECT id, name, venue_id, shared_group_id, is_active, created_at, updated_at
            FROM courts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Get all courts of a venue, active or not
    pub async fn list_by_venue(&self, venue_id: Uuid) -> SqlxResult<Vec<CourtRow>> {
        sqlx::query_as::<_, CourtRow>(
            r#"
            SELECT id, name, venue_id, shared_group_id, is_active, created_at, updated_at
            FROM courts
            WHERE venue_id = $1
            ORDER BY name ASC, id ASC
            "#,
        )
        .bind(venue_id)
        .fetch_all(&self.pool)
        .await
    }

    /// IDs of the active courts sharing a group id
    pub async fn list_active_ids_in_group(&self, group_id: &str) -> SqlxResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT id
            FROM courts
            WHERE shared_group_id = $1 AND is_active = true
            ORDER BY name ASC, id ASC
            "#,
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
    }
}
