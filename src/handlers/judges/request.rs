//! Judge request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create judge request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJudgeRequest {
    pub user_id: Uuid,

    pub association_id: Uuid,

    #[validate(length(min = 1, max = 64))]
    pub discipline: String,

    #[validate(length(min = 1, max = 32))]
    pub certification_level: String,
}

/// Update judge request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateJudgeRequest {
    pub association_id: Option<Uuid>,

    #[validate(length(min = 1, max = 64))]
    pub discipline: Option<String>,

    #[validate(length(min = 1, max = 32))]
    pub certification_level: Option<String>,
}

/// List judges query parameters
#[derive(Debug, Deserialize)]
pub struct ListJudgesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub association_id: Option<Uuid>,
}
