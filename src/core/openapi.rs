use utoipa::{Modify, OpenApi};

use crate::features::images::{dtos as images_dtos, handlers as images_handlers};
use crate::shared::types::ApiMessage;

#[derive(OpenApi)]
#[openapi(
    paths(
        images_handlers::image_handler::upload_image,
        images_handlers::image_handler::list_images,
        images_handlers::image_handler::delete_image,
    ),
    components(
        schemas(
            ApiMessage,
            images_dtos::UploadImageDto,
            images_dtos::Base64UploadDto,
            images_dtos::ImageResponseDto,
            images_dtos::UploadImageResponse,
            images_dtos::ListImagesResponse,
            images_dtos::DeleteImageResponse,
        )
    ),
    tags(
        (name = "images", description = "Image gallery upload, listing and deletion"),
    ),
    info(
        title = "Imagedrop API",
        version = "0.1.0",
        description = "API documentation for Imagedrop",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
