use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::images::dtos::ImageResponseDto;
use crate::features::images::models::Image;
use crate::modules::storage::MediaStore;

/// Outcome of a delete: the metadata row is always gone, the stored asset
/// may have survived a failed media store call.
#[derive(Debug, Clone, Copy)]
pub struct DeleteOutcome {
    pub asset_removed: bool,
}

/// Service for image record operations
pub struct ImageService {
    pool: PgPool,
    media_store: Arc<dyn MediaStore>,
}

impl ImageService {
    pub fn new(pool: PgPool, media_store: Arc<dyn MediaStore>) -> Self {
        Self { pool, media_store }
    }

    /// Store an image in the media store and record its metadata
    ///
    /// Creation is store-then-persist: a media store failure aborts before
    /// the database is touched. If the insert fails after a successful
    /// upload, the asset is orphaned; its public id stays in the logs.
    pub async fn create(&self, data: Vec<u8>, content_type: &str) -> Result<ImageResponseDto> {
        let asset = self.media_store.upload(data, content_type).await?;

        debug!("Image stored: public_id={}", asset.public_id);

        let image = sqlx::query_as::<_, Image>(
            r#"
            INSERT INTO images (url, public_id)
            VALUES ($1, $2)
            RETURNING id, url, public_id, created_at
            "#,
        )
        .bind(&asset.url)
        .bind(&asset.public_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            warn!(
                "Metadata insert failed, asset orphaned: public_id={}, error={:?}",
                asset.public_id, e
            );
            AppError::Database(e)
        })?;

        info!(
            "Image created: id={}, public_id={}",
            image.id, image.public_id
        );

        Ok(image.into())
    }

    /// List all images, newest first
    pub async fn list(&self) -> Result<Vec<ImageResponseDto>> {
        let images = sqlx::query_as::<_, Image>(
            r#"
            SELECT id, url, public_id, created_at
            FROM images
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list images: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(images.into_iter().map(Into::into).collect())
    }

    /// Delete an image by id
    ///
    /// Asset deletion is attempted first but never blocks row deletion;
    /// a failure is reported through [`DeleteOutcome`].
    pub async fn delete(&self, id: Uuid) -> Result<DeleteOutcome> {
        let image = sqlx::query_as::<_, Image>(
            r#"
            SELECT id, url, public_id, created_at
            FROM images
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let image = image.ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

        let asset_removed = match self.media_store.destroy(&image.public_id).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    "Asset deletion failed: public_id={}, error={}",
                    image.public_id, e
                );
                false
            }
        };

        sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(image.id)
            .execute(&self.pool)
            .await?;

        info!(
            "Image deleted: id={}, asset_removed={}",
            image.id, asset_removed
        );

        Ok(DeleteOutcome { asset_removed })
    }
}
