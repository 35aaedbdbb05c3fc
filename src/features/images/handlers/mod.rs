pub mod image_handler;

pub use image_handler::{delete_image, list_images, upload_image};
