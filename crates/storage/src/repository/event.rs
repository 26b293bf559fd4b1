use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Event;

/// Repository for event metadata lookups.
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, name, slug, status, start_date, end_date, created_at
            FROM events
            ORDER BY start_date DESC, created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, name, slug, status, start_date, end_date, created_at
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, name, slug, status, start_date, end_date, created_at
            FROM events
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }
}
