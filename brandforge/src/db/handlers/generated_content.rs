//! Database repository for generated content records.
//!
//! This table is an insert-only log: rows are written once per generation
//! and never mutated. Reads are ownership-checked so one user's record is
//! indistinguishable from a missing record to anyone else.

use crate::db::{errors::Result, models::generated_content::{GeneratedContentCreateDBRequest, GeneratedContentDBResponse}};
use crate::types::{GeneratedContentId, UserId, abbrev_uuid};
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

pub struct GeneratedContent<'c> {
    db: &'c mut PgConnection,
}

impl<'c> GeneratedContent<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(prompt_type = %request.prompt_type), err)]
    pub async fn create(&mut self, request: &GeneratedContentCreateDBRequest) -> Result<GeneratedContentDBResponse> {
        let id = Uuid::new_v4();

        let record = sqlx::query_as::<_, GeneratedContentDBResponse>(
            r#"
            INSERT INTO generated_content (id, user_id, temp_user_id, keywords, prompt_type, generated_text, model)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.user_id)
        .bind(request.temp_user_id)
        .bind(&request.keywords)
        .bind(&request.prompt_type)
        .bind(&request.generated_text)
        .bind(&request.model)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(record)
    }

    /// Fetch a record only if it is owned by `owner`.
    ///
    /// A record owned by someone else returns `None`, same as a record that
    /// does not exist, so callers cannot probe for foreign record ids.
    #[instrument(skip(self), fields(record_id = %abbrev_uuid(&id), owner = %abbrev_uuid(&owner)), err)]
    pub async fn get_owned(&mut self, id: GeneratedContentId, owner: UserId) -> Result<Option<GeneratedContentDBResponse>> {
        let record = sqlx::query_as::<_, GeneratedContentDBResponse>(
            "SELECT * FROM generated_content WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(record)
    }

    /// Most recent record for a user id or anonymous temp id.
    #[instrument(skip(self), fields(identity = %abbrev_uuid(&identity)), err)]
    pub async fn latest_for_identity(&mut self, identity: Uuid) -> Result<Option<GeneratedContentDBResponse>> {
        let record = sqlx::query_as::<_, GeneratedContentDBResponse>(
            r#"
            SELECT * FROM generated_content
            WHERE user_id = $1 OR temp_user_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(identity)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(record)
    }

    /// Number of generations recorded for an authenticated user, used for
    /// the free-plan cap.
    #[instrument(skip(self), fields(user_id = %abbrev_uuid(&user_id)), err)]
    pub async fn count_for_user(&mut self, user_id: UserId) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM generated_content WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&mut *self.db)
            .await?;

        Ok(count)
    }
}
