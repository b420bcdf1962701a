//! Admin request DTOs

use serde::Deserialize;
use validator::Validate;

/// Update user role request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRoleRequest {
    #[validate(length(min = 1, max = 32))]
    pub role: String,
}
