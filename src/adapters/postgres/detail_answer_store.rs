//! PostgreSQL implementation of DetailAnswerStore.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::catalog::validate_submission;
use crate::domain::foundation::UserId;
use crate::ports::{AnswerStoreError, DetailAnswerStore};

/// PostgreSQL implementation of DetailAnswerStore.
#[derive(Clone)]
pub struct PostgresDetailAnswerStore {
    pool: PgPool,
}

impl PostgresDetailAnswerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DetailAnswerStore for PostgresDetailAnswerStore {
    async fn get_boolean_answers(
        &self,
        user_id: UserId,
    ) -> Result<HashMap<String, Option<bool>>, AnswerStoreError> {
        let rows = sqlx::query(
            r#"
            SELECT question_code, answer
            FROM detail_answers
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let code: String = row.get("question_code");
                let answer: Option<bool> = row.get("answer");
                (code, answer)
            })
            .collect())
    }

    async fn save_boolean_answers(
        &self,
        user_id: UserId,
        answers: &HashMap<String, Option<bool>>,
    ) -> Result<(), AnswerStoreError> {
        // Revalidate at the boundary so no caller can slip a partial
        // submission into storage.
        validate_submission(answers)?;

        let mut tx = self.pool.begin().await?;
        for (code, answer) in answers {
            sqlx::query(
                r#"
                INSERT INTO detail_answers (user_id, question_code, answer, updated_at)
                VALUES ($1, $2, $3, NOW())
                ON CONFLICT (user_id, question_code)
                DO UPDATE SET answer = EXCLUDED.answer, updated_at = NOW()
                "#,
            )
            .bind(user_id.as_i64())
            .bind(code)
            .bind(answer)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
