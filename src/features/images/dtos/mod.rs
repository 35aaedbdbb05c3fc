mod image_dto;

pub use image_dto::{
    is_image_type_allowed, parse_data_uri, Base64UploadDto, DeleteImageResponse, ImageResponseDto,
    ListImagesResponse, UploadImageDto, UploadImageResponse, ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE,
};
