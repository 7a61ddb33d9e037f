//! Database repository for brands.

use crate::db::{
    errors::{DbError, Result},
    models::brands::{BrandDBResponse, BrandUpsertDBRequest},
};
use crate::types::{BrandId, UserId, abbrev_uuid};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Brands<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Brands<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Create-if-absent-by-id, else update.
    ///
    /// The conflict arm only fires when the existing row belongs to the same
    /// user; an id collision against another user's brand affects no rows and
    /// is reported as NotFound rather than overwriting foreign data.
    #[instrument(skip(self, request), fields(brand_id = %abbrev_uuid(&request.id)), err)]
    pub async fn upsert(&mut self, request: &BrandUpsertDBRequest) -> Result<BrandDBResponse> {
        let brand = sqlx::query_as::<_, BrandDBResponse>(
            r#"
            INSERT INTO brands (id, user_id, name, config, social_links, brand_mark)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                config = EXCLUDED.config,
                social_links = EXCLUDED.social_links,
                brand_mark = EXCLUDED.brand_mark,
                updated_at = NOW()
            WHERE brands.user_id = EXCLUDED.user_id
            RETURNING *
            "#,
        )
        .bind(request.id)
        .bind(request.user_id)
        .bind(&request.name)
        .bind(&request.config)
        .bind(&request.social_links)
        .bind(&request.brand_mark)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(brand)
    }

    /// Fetch a brand only if owned by `owner`; foreign brands read as absent.
    #[instrument(skip(self), fields(brand_id = %abbrev_uuid(&id), owner = %abbrev_uuid(&owner)), err)]
    pub async fn get_owned(&mut self, id: BrandId, owner: UserId) -> Result<Option<BrandDBResponse>> {
        let brand = sqlx::query_as::<_, BrandDBResponse>("SELECT * FROM brands WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(brand)
    }

    #[instrument(skip(self), fields(owner = %abbrev_uuid(&owner)), err)]
    pub async fn list_for_user(&mut self, owner: UserId) -> Result<Vec<BrandDBResponse>> {
        let brands = sqlx::query_as::<_, BrandDBResponse>(
            "SELECT * FROM brands WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(brands)
    }
}
