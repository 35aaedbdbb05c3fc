use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for gallery images
///
/// Rows are immutable after creation; the only lifecycle transition is
/// deletion.
#[derive(Debug, Clone, FromRow)]
pub struct Image {
    pub id: Uuid,
    pub url: String,
    pub public_id: String,
    pub created_at: DateTime<Utc>,
}
