//! Repository for the `images` table.

use fusteria_core::types::DbId;
use sqlx::PgPool;

use crate::models::image::{Image, NewImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, url, alt_text, sort_order";

/// Persists uploaded image metadata rows for a project.
pub struct ImageRepo;

impl ImageRepo {
    /// Insert a batch of image rows for a project in one transaction.
    pub async fn insert_many(
        pool: &PgPool,
        project_id: DbId,
        images: &[NewImage],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        Self::insert_many_inner(&mut tx, project_id, images).await?;
        tx.commit().await?;
        Ok(())
    }

    /// List a project's images in gallery order. The first row, if any,
    /// is the project's primary image.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM images WHERE project_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Insert image rows within an existing transaction.
    pub(crate) async fn insert_many_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        project_id: DbId,
        images: &[NewImage],
    ) -> Result<(), sqlx::Error> {
        for image in images {
            sqlx::query(
                "INSERT INTO images (project_id, url, alt_text, sort_order) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(project_id)
            .bind(&image.url)
            .bind(&image.alt_text)
            .bind(image.sort_order)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}
