use base64::prelude::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::images::models::Image;

/// Wire representation of a gallery image
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponseDto {
    /// Unique identifier for the image
    pub id: Uuid,
    /// Publicly reachable URL of the stored image
    pub url: String,
    /// Media store reference used to request deletion
    pub public_id: String,
    /// Timestamp when the image was uploaded
    pub created_at: DateTime<Utc>,
}

impl From<Image> for ImageResponseDto {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            url: image.url,
            public_id: image.public_id,
            created_at: image.created_at,
        }
    }
}

/// Multipart upload request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler reads the multipart body directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadImageDto {
    /// The image file to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// JSON upload variant: the titled form posts the image as a base64 data URI.
///
/// `title` and `description` are accepted for compatibility with that form
/// but are not persisted; the image record has no columns for them.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Base64UploadDto {
    #[validate(length(max = 200, message = "title must be at most 200 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,
    /// `data:<mime>;base64,<payload>` URI carrying the image bytes
    #[validate(length(min = 1, message = "imageBase64 is required"))]
    pub image_base64: String,
}

/// Response for a successful upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadImageResponse {
    pub message: String,
    pub status: u16,
    pub image: ImageResponseDto,
}

/// Response for the gallery listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListImagesResponse {
    pub message: String,
    pub status: u16,
    pub images: Vec<ImageResponseDto>,
}

/// Response for a successful deletion
///
/// `warning` is present only when the metadata row was removed but the
/// stored asset could not be.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteImageResponse {
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Content types accepted for upload. Mirrors the png/jpg/jpeg/gif
/// restriction the upload widgets advertise, enforced server-side.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/png", "image/jpeg", "image/gif"];

/// Maximum image size in bytes (10MB)
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// Check if a content type is accepted for upload
pub fn is_image_type_allowed(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type)
}

/// Decode a `data:<mime>;base64,<payload>` URI into bytes and content type
pub fn parse_data_uri(input: &str) -> Option<(Vec<u8>, String)> {
    let rest = input.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    if mime.is_empty() {
        return None;
    }
    let data = BASE64_STANDARD.decode(payload.trim()).ok()?;
    Some((data, mime.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_dto_uses_camel_case_keys() {
        let dto = ImageResponseDto {
            id: Uuid::nil(),
            url: "http://localhost:9000/imagedrop-media/gallery/x.png".to_string(),
            public_id: "gallery/x.png".to_string(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        };

        let value = serde_json::to_value(dto).unwrap();
        assert!(value.get("publicId").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("public_id").is_none());
    }

    #[test]
    fn delete_response_omits_warning_when_absent() {
        let value = serde_json::to_value(DeleteImageResponse {
            message: "Image deleted successfully".to_string(),
            status: 200,
            warning: None,
        })
        .unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "message": "Image deleted successfully", "status": 200 })
        );
    }

    #[test]
    fn allowed_types_match_the_widget_restriction() {
        assert!(is_image_type_allowed("image/png"));
        assert!(is_image_type_allowed("image/jpeg"));
        assert!(is_image_type_allowed("image/gif"));
        assert!(!is_image_type_allowed("image/svg+xml"));
        assert!(!is_image_type_allowed("application/pdf"));
    }

    #[test]
    fn parses_a_well_formed_data_uri() {
        let (data, mime) = parse_data_uri("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(data, b"hello");
        assert_eq!(mime, "image/png");
    }

    #[test]
    fn rejects_malformed_data_uris() {
        assert!(parse_data_uri("aGVsbG8=").is_none());
        assert!(parse_data_uri("data:;base64,aGVsbG8=").is_none());
        assert!(parse_data_uri("data:image/png;base64,not!!valid").is_none());
        assert!(parse_data_uri("data:image/png,plain").is_none());
    }
}
