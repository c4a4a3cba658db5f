//! Repository for the `projects` aggregate (project + features + images).
//!
//! Every mutating operation runs inside a single transaction, so a failure
//! partway through a multi-table write never leaves mixed state: either
//! the whole aggregate write lands, or none of it does.

use fusteria_core::types::DbId;
use sqlx::PgPool;

use crate::models::feature::Feature;
use crate::models::project::{
    CreateProject, Project, ProjectDetails, ProjectSummary, UpdateProject,
};
use crate::repositories::ImageRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, full_description, completion_date, \
    duration, category_id, updated_by, last_update";

/// Summary columns for list views. The first/primary image is picked per
/// project by a lateral subquery ordered by (sort_order, id).
const SUMMARY_COLUMNS: &str = "p.id, p.title, p.description, p.category_id, p.last_update, \
    i.url AS first_image_url, i.alt_text AS first_image_alt";

/// Write service for the project aggregate.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with its features and images, returning the
    /// created row.
    ///
    /// The generated id comes straight from the insert's RETURNING clause,
    /// so concurrent submissions with identical titles cannot cross wires.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO projects \
                (title, description, full_description, completion_date, duration, \
                 category_id, updated_by, last_update) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, NOW()) \
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&insert_query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.full_description)
            .bind(&input.completion_date)
            .bind(&input.duration)
            .bind(input.category_id)
            .bind(&input.updated_by)
            .fetch_one(&mut *tx)
            .await?;

        if !input.features.is_empty() {
            Self::insert_features_inner(&mut tx, project.id, &input.features).await?;
        }

        if !input.images.is_empty() {
            ImageRepo::insert_many_inner(&mut tx, project.id, &input.images).await?;
        }

        tx.commit().await?;
        Ok(project)
    }

    /// Update a project aggregate.
    ///
    /// Statement order within the transaction: append `new_images`, update
    /// the project row, delete all existing features, insert the new
    /// feature set. The feature list is an authoritative replacement
    /// (delete-then-reinsert), never a diff or upsert.
    ///
    /// Returns `None` if no row with the given `id` exists; the
    /// transaction rolls back and nothing is written.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Lock the row up front so a vanished id rolls back cleanly
        // instead of surfacing as a foreign-key failure on the image
        // insert below.
        let exists = sqlx::query_scalar::<_, DbId>("SELECT id FROM projects WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        if !input.new_images.is_empty() {
            ImageRepo::insert_many_inner(&mut tx, id, &input.new_images).await?;
        }

        let update_query = format!(
            "UPDATE projects SET \
                title = $2, \
                description = $3, \
                full_description = $4, \
                completion_date = $5, \
                duration = $6, \
                category_id = $7, \
                updated_by = $8, \
                last_update = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&update_query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.full_description)
            .bind(&input.completion_date)
            .bind(&input.duration)
            .bind(input.category_id)
            .bind(&input.updated_by)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM features WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if !input.features.is_empty() {
            Self::insert_features_inner(&mut tx, id, &input.features).await?;
        }

        tx.commit().await?;
        Ok(Some(project))
    }

    /// Delete a project with all its children.
    ///
    /// Children go first (images, then features, then the project row);
    /// the foreign keys are RESTRICT, so the ordering is load-bearing.
    /// Returns `true` if the project row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM images WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM features WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a project row by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by ID, enriched with its features and images.
    pub async fn find_by_id_with_details(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectDetails>, sqlx::Error> {
        let project = Self::find_by_id(pool, id).await?;
        match project {
            Some(project) => {
                let features = Self::features_for(pool, project.id).await?;
                let images = ImageRepo::list_for_project(pool, project.id).await?;
                Ok(Some(ProjectDetails {
                    project,
                    features,
                    images,
                }))
            }
            None => Ok(None),
        }
    }

    /// List project summaries, newest first, optionally filtered by
    /// category. `limit`/`offset` are assumed pre-clamped.
    pub async fn list(
        pool: &PgPool,
        category_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} \
             FROM projects p \
             LEFT JOIN LATERAL ( \
                SELECT url, alt_text FROM images \
                WHERE project_id = p.id \
                ORDER BY sort_order, id LIMIT 1 \
             ) i ON true \
             WHERE $1::bigint IS NULL OR p.category_id = $1 \
             ORDER BY p.id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ProjectSummary>(&query)
            .bind(category_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count projects, optionally filtered by category. Pairs with
    /// [`list`](Self::list) for pagination totals.
    pub async fn count(pool: &PgPool, category_id: Option<DbId>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM projects WHERE $1::bigint IS NULL OR category_id = $1",
        )
        .bind(category_id)
        .fetch_one(pool)
        .await
    }

    /// List a project's features in insertion order.
    pub async fn features_for(pool: &PgPool, project_id: DbId) -> Result<Vec<Feature>, sqlx::Error> {
        sqlx::query_as::<_, Feature>(
            "SELECT id, project_id, description FROM features WHERE project_id = $1 ORDER BY id",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Bulk-insert the feature set within an existing transaction.
    async fn insert_features_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        project_id: DbId,
        features: &[String],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO features (project_id, description) SELECT $1, unnest($2::text[])")
            .bind(project_id)
            .bind(features)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
