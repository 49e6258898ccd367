//! PostgreSQL implementation of OwnerNoteStore.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::UserId;
use crate::ports::{NoteStoreError, OwnerNoteStore};

/// One row per user in `owner_notes`.
#[derive(Clone)]
pub struct PostgresOwnerNoteStore {
    pool: PgPool,
}

impl PostgresOwnerNoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnerNoteStore for PostgresOwnerNoteStore {
    async fn get_note(&self, user_id: UserId) -> Result<Option<String>, NoteStoreError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT content FROM owner_notes WHERE user_id = $1")
                .bind(user_id.as_i64())
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(content,)| content))
    }

    async fn save_note(&self, user_id: UserId, content: &str) -> Result<String, NoteStoreError> {
        let (stored,): (String,) = sqlx::query_as(
            r#"
            INSERT INTO owner_notes (user_id, content, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id)
            DO UPDATE SET content = EXCLUDED.content, updated_at = NOW()
            RETURNING content
            "#,
        )
        .bind(user_id.as_i64())
        .bind(content)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }
}
