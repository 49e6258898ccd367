//! PostgreSQL implementation of ScoreSnapshotWriter.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::UserId;
use crate::domain::scoring::AxisScoreResult;
use crate::ports::{ScoreSnapshotWriter, SnapshotError};

/// Upserts the latest per-axis scores into `score_snapshots`.
#[derive(Clone)]
pub struct PostgresScoreSnapshotWriter {
    pool: PgPool,
}

impl PostgresScoreSnapshotWriter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreSnapshotWriter for PostgresScoreSnapshotWriter {
    async fn persist_scores(
        &self,
        user_id: UserId,
        scores: &[AxisScoreResult],
    ) -> Result<(), SnapshotError> {
        let mut tx = self.pool.begin().await?;
        for score in scores {
            sqlx::query(
                r#"
                INSERT INTO score_snapshots (user_id, axis_code, score, answered, missing, updated_at)
                VALUES ($1, $2, $3, $4, $5, NOW())
                ON CONFLICT (user_id, axis_code)
                DO UPDATE SET
                    score = EXCLUDED.score,
                    answered = EXCLUDED.answered,
                    missing = EXCLUDED.missing,
                    updated_at = NOW()
                "#,
            )
            .bind(user_id.as_i64())
            .bind(&score.code)
            .bind(score.score)
            .bind(score.answered as i32)
            .bind(score.missing as i32)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
