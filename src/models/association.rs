//! Association model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A regional sports association affiliated with the federation
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Association {
    pub id: Uuid,
    pub name: String,
    /// Department (administrative region) the association represents
    pub department: String,
    pub city: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
