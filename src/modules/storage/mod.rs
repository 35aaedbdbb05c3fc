//! Storage module for hosted image assets
//!
//! Provides the media store abstraction and its S3/MinIO-backed client.

mod media_store;

pub use media_store::{MediaStore, S3MediaStore, StoredAsset};
