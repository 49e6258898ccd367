//! PostgreSQL implementation of DeepDiveStore.
//!
//! Chat turns live in `deep_dive_chats`, one row per turn; card status and
//! summary in `deep_dive_progress`, one row per touched card.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::catalog::{deep_dive_steps, Axis};
use crate::domain::deep_dive::{CardEngagement, CardStatus, ChatMessage, ChatRole};
use crate::domain::foundation::UserId;
use crate::ports::{CardProgress, DeepDiveStore, DeepDiveStoreError};

/// PostgreSQL implementation of DeepDiveStore.
#[derive(Clone)]
pub struct PostgresDeepDiveStore {
    pool: PgPool,
}

impl PostgresDeepDiveStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn catalog_card_ids(axis: Axis) -> Vec<String> {
        deep_dive_steps(axis)
            .iter()
            .flat_map(|step| &step.cards)
            .map(|card| card.id.to_string())
            .collect()
    }
}

fn role_from_str(role: &str) -> Result<ChatRole, DeepDiveStoreError> {
    match role {
        "user" => Ok(ChatRole::User),
        "assistant" => Ok(ChatRole::Assistant),
        other => Err(DeepDiveStoreError::Database(format!(
            "unknown chat role in storage: {other}"
        ))),
    }
}

fn role_to_str(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Assistant => "assistant",
    }
}

fn status_from_str(status: &str) -> Result<CardStatus, DeepDiveStoreError> {
    match status {
        "not_started" => Ok(CardStatus::NotStarted),
        "in_progress" => Ok(CardStatus::InProgress),
        "completed" => Ok(CardStatus::Completed),
        other => Err(DeepDiveStoreError::Database(format!(
            "unknown card status in storage: {other}"
        ))),
    }
}

fn progress_from_row(row: &sqlx::postgres::PgRow) -> Result<CardProgress, DeepDiveStoreError> {
    let status: String = row.get("status");
    Ok(CardProgress {
        status: status_from_str(&status)?,
        summary: row.get("summary"),
    })
}

#[async_trait]
impl DeepDiveStore for PostgresDeepDiveStore {
    async fn get_card_engagements(
        &self,
        user_id: UserId,
        axis: Axis,
    ) -> Result<HashMap<String, CardEngagement>, DeepDiveStoreError> {
        let card_ids = Self::catalog_card_ids(axis);
        let mut engagements: HashMap<String, CardEngagement> = HashMap::new();

        let chat_rows = sqlx::query(
            r#"
            SELECT card_id, role, message, created_at
            FROM deep_dive_chats
            WHERE user_id = $1 AND card_id = ANY($2)
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id.as_i64())
        .bind(&card_ids)
        .fetch_all(&self.pool)
        .await?;

        for row in chat_rows {
            let card_id: String = row.get("card_id");
            let role: String = row.get("role");
            let message: String = row.get("message");
            let created_at: DateTime<Utc> = row.get("created_at");
            engagements
                .entry(card_id)
                .or_default()
                .chat_history
                .push(ChatMessage::new(role_from_str(&role)?, message, created_at));
        }

        let progress_rows = sqlx::query(
            r#"
            SELECT card_id, status, summary
            FROM deep_dive_progress
            WHERE user_id = $1 AND axis_code = $2
            "#,
        )
        .bind(user_id.as_i64())
        .bind(axis.as_code())
        .fetch_all(&self.pool)
        .await?;

        for row in progress_rows {
            let card_id: String = row.get("card_id");
            let progress = progress_from_row(&row)?;
            let engagement = engagements.entry(card_id).or_default();
            engagement.summary = progress.summary;
            engagement.is_completed = progress.status == CardStatus::Completed;
        }

        Ok(engagements)
    }

    async fn get_axis_progress(
        &self,
        user_id: UserId,
        axis: Axis,
    ) -> Result<HashMap<String, CardProgress>, DeepDiveStoreError> {
        let rows = sqlx::query(
            r#"
            SELECT card_id, status, summary
            FROM deep_dive_progress
            WHERE user_id = $1 AND axis_code = $2
            "#,
        )
        .bind(user_id.as_i64())
        .bind(axis.as_code())
        .fetch_all(&self.pool)
        .await?;

        let mut progress = HashMap::new();
        for row in rows {
            let card_id: String = row.get("card_id");
            progress.insert(card_id, progress_from_row(&row)?);
        }
        Ok(progress)
    }

    async fn get_chat(
        &self,
        user_id: UserId,
        card_id: &str,
    ) -> Result<Vec<ChatMessage>, DeepDiveStoreError> {
        let rows = sqlx::query(
            r#"
            SELECT role, message, created_at
            FROM deep_dive_chats
            WHERE user_id = $1 AND card_id = $2
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id.as_i64())
        .bind(card_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let role: String = row.get("role");
                let message: String = row.get("message");
                let created_at: DateTime<Utc> = row.get("created_at");
                Ok(ChatMessage::new(role_from_str(&role)?, message, created_at))
            })
            .collect()
    }

    async fn get_card_progress(
        &self,
        user_id: UserId,
        card_id: &str,
    ) -> Result<Option<CardProgress>, DeepDiveStoreError> {
        let row = sqlx::query(
            r#"
            SELECT status, summary
            FROM deep_dive_progress
            WHERE user_id = $1 AND card_id = $2
            "#,
        )
        .bind(user_id.as_i64())
        .bind(card_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| progress_from_row(&r)).transpose()
    }

    async fn append_message(
        &self,
        user_id: UserId,
        card_id: &str,
        role: ChatRole,
        message: &str,
    ) -> Result<ChatMessage, DeepDiveStoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO deep_dive_chats (user_id, card_id, role, message, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING created_at
            "#,
        )
        .bind(user_id.as_i64())
        .bind(card_id)
        .bind(role_to_str(role))
        .bind(message)
        .fetch_one(&self.pool)
        .await?;

        let created_at: DateTime<Utc> = row.get("created_at");
        Ok(ChatMessage::new(role, message, created_at))
    }

    async fn mark_in_progress(
        &self,
        user_id: UserId,
        axis: Axis,
        card_id: &str,
    ) -> Result<(), DeepDiveStoreError> {
        sqlx::query(
            r#"
            INSERT INTO deep_dive_progress (user_id, axis_code, card_id, status, updated_at)
            VALUES ($1, $2, $3, 'in_progress', NOW())
            ON CONFLICT (user_id, card_id)
            DO UPDATE SET status = 'in_progress', updated_at = NOW()
            WHERE deep_dive_progress.status <> 'completed'
            "#,
        )
        .bind(user_id.as_i64())
        .bind(axis.as_code())
        .bind(card_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn complete_card(
        &self,
        user_id: UserId,
        axis: Axis,
        card_id: &str,
        summary: &str,
    ) -> Result<CardProgress, DeepDiveStoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO deep_dive_progress (user_id, axis_code, card_id, status, summary, updated_at)
            VALUES ($1, $2, $3, 'completed', $4, NOW())
            ON CONFLICT (user_id, card_id)
            DO UPDATE SET status = 'completed', summary = EXCLUDED.summary, updated_at = NOW()
            RETURNING status, summary
            "#,
        )
        .bind(user_id.as_i64())
        .bind(axis.as_code())
        .bind(card_id)
        .bind(summary)
        .fetch_one(&self.pool)
        .await?;

        progress_from_row(&row)
    }
}
