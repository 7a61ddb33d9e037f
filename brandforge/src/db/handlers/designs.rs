//! Database repository for designs.

use crate::db::{
    errors::{DbError, Result},
    models::designs::{DesignDBResponse, DesignUpsertDBRequest},
};
use crate::types::{BrandId, DesignId, UserId, abbrev_uuid};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Designs<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Designs<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Create-if-absent-by-id, else update. Same ownership guard as brands:
    /// a conflicting id owned by another user affects no rows.
    #[instrument(skip(self, request), fields(design_id = %abbrev_uuid(&request.id)), err)]
    pub async fn upsert(&mut self, request: &DesignUpsertDBRequest) -> Result<DesignDBResponse> {
        let design = sqlx::query_as::<_, DesignDBResponse>(
            r#"
            INSERT INTO designs (id, brand_id, user_id, asset_type, style_id, template_id, data)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                brand_id = EXCLUDED.brand_id,
                asset_type = EXCLUDED.asset_type,
                style_id = EXCLUDED.style_id,
                template_id = EXCLUDED.template_id,
                data = EXCLUDED.data,
                updated_at = NOW()
            WHERE designs.user_id = EXCLUDED.user_id
            RETURNING *
            "#,
        )
        .bind(request.id)
        .bind(request.brand_id)
        .bind(request.user_id)
        .bind(&request.asset_type)
        .bind(request.style_id)
        .bind(request.template_id)
        .bind(&request.data)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(design)
    }

    #[instrument(skip(self), fields(design_id = %abbrev_uuid(&id), owner = %abbrev_uuid(&owner)), err)]
    pub async fn get_owned(&mut self, id: DesignId, owner: UserId) -> Result<Option<DesignDBResponse>> {
        let design = sqlx::query_as::<_, DesignDBResponse>("SELECT * FROM designs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(design)
    }

    /// List a user's designs, optionally narrowed to one brand.
    #[instrument(skip(self), fields(owner = %abbrev_uuid(&owner)), err)]
    pub async fn list_for_user(&mut self, owner: UserId, brand_id: Option<BrandId>) -> Result<Vec<DesignDBResponse>> {
        let designs = match brand_id {
            Some(brand_id) => {
                sqlx::query_as::<_, DesignDBResponse>(
                    "SELECT * FROM designs WHERE user_id = $1 AND brand_id = $2 ORDER BY created_at DESC",
                )
                .bind(owner)
                .bind(brand_id)
                .fetch_all(&mut *self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, DesignDBResponse>(
                    "SELECT * FROM designs WHERE user_id = $1 ORDER BY created_at DESC",
                )
                .bind(owner)
                .fetch_all(&mut *self.db)
                .await?
            }
        };

        Ok(designs)
    }
}
