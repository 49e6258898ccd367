//! PostgreSQL implementation of AxisMetaReader.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::UserId;
use crate::ports::AxisMetaReader;

/// Reads per-user axis name overrides from `user_axes`.
#[derive(Clone)]
pub struct PostgresAxisMetaReader {
    pool: PgPool,
}

impl PostgresAxisMetaReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AxisMetaReader for PostgresAxisMetaReader {
    async fn axis_names(&self, user_id: UserId) -> HashMap<String, String> {
        let result = sqlx::query(
            r#"
            SELECT axis_code, name
            FROM user_axes
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await;

        match result {
            Ok(rows) => rows
                .into_iter()
                .map(|row| {
                    let code: String = row.get("axis_code");
                    let name: String = row.get("name");
                    (code, name)
                })
                .collect(),
            Err(err) => {
                // Names are cosmetic; callers fall back to built-in ones.
                tracing::warn!(user_id = %user_id, error = %err, "axis name lookup failed");
                HashMap::new()
            }
        }
    }
}
