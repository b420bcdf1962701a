//! Athlete model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Athlete profile linked to a user account and an association
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Athlete {
    pub id: Uuid,
    pub user_id: Uuid,
    pub association_id: Uuid,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub discipline: String,
    /// Age/competition category (e.g. U18, senior)
    pub category: String,
    /// Federation license number
    pub license_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
