//! Image gallery feature: upload, list, delete.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/images` | Upload an image (multipart or base64 JSON) |
//! | GET | `/api/images` | List images, newest first |
//! | DELETE | `/api/images/{id}` | Delete an image and its stored asset |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::ImageService;
