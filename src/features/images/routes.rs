use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::features::images::dtos::MAX_IMAGE_SIZE;
use crate::features::images::handlers::{delete_image, list_images, upload_image};
use crate::features::images::services::ImageService;

/// Create routes for the images feature
pub fn routes(image_service: Arc<ImageService>) -> Router {
    Router::new()
        .route(
            "/api/images",
            // Allow body size up to MAX_IMAGE_SIZE + buffer for multipart overhead
            get(list_images)
                .post(upload_image)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024)),
        )
        .route("/api/images/{id}", delete(delete_image))
        .with_state(image_service)
}
