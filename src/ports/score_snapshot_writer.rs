//! Port for persisting dashboard score snapshots.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::scoring::AxisScoreResult;

/// Upserts the latest per-axis scores after a dashboard build.
///
/// Snapshots are a convenience for trend queries. A failed write must never
/// fail the dashboard response; callers log and move on.
#[async_trait]
pub trait ScoreSnapshotWriter: Send + Sync {
    async fn persist_scores(
        &self,
        user_id: UserId,
        scores: &[AxisScoreResult],
    ) -> Result<(), SnapshotError>;
}

/// Errors from the snapshot writer.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for SnapshotError {
    fn from(err: sqlx::Error) -> Self {
        SnapshotError::Database(err.to_string())
    }
}
