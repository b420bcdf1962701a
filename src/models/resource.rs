//! Resource model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Downloadable document published by the federation
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    /// Original file name as uploaded
    pub file_name: String,
    /// Generated name on disk, unique per file
    pub stored_name: String,
    pub content_type: String,
    pub file_size: i64,
    /// SHA-256 of the file contents
    pub checksum: String,
    pub uploaded_by: Uuid,
    pub created_at: DateTime<Utc>,
}
