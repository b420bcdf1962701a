//! Admin response DTOs

use serde::Serialize;

use crate::handlers::users::response::UserProfileResponse;

/// Admin user list response
#[derive(Debug, Serialize)]
pub struct AdminUsersListResponse {
    pub users: Vec<UserProfileResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
