//! Coach request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create coach request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCoachRequest {
    pub user_id: Uuid,

    pub association_id: Uuid,

    #[validate(length(min = 1, max = 64))]
    pub specialty: String,

    #[validate(length(min = 1, max = 32))]
    pub certification_level: String,
}

/// Update coach request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCoachRequest {
    pub association_id: Option<Uuid>,

    #[validate(length(min = 1, max = 64))]
    pub specialty: Option<String>,

    #[validate(length(min = 1, max = 32))]
    pub certification_level: Option<String>,
}

/// List coaches query parameters
#[derive(Debug, Deserialize)]
pub struct ListCoachesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub association_id: Option<Uuid>,
}
