//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::access::{self, AccountStatus, Role};

/// User database model
///
/// `role` and `status` are validated into their closed enums while the row
/// is decoded; no raw role string travels past this point.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: Option<String>,
    #[sqlx(try_from = "String")]
    pub role: Role,
    #[sqlx(try_from = "String")]
    pub status: AccountStatus,
    /// Association the account belongs to, where applicable
    pub association_id: Option<Uuid>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Dashboard landing path for this account
    pub fn dashboard_route(&self) -> &'static str {
        access::dashboard_route(self.role, self.status)
    }

    pub fn is_pending(&self) -> bool {
        self.status == AccountStatus::Pending
    }

    pub fn is_suspended(&self) -> bool {
        self.status == AccountStatus::Suspended
    }
}
