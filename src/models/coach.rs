//! Coach model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Coach profile linked to a user account and an association
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Coach {
    pub id: Uuid,
    pub user_id: Uuid,
    pub association_id: Uuid,
    pub specialty: String,
    pub certification_level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
