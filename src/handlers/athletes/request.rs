//! Athlete request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create athlete request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAthleteRequest {
    pub user_id: Uuid,

    pub association_id: Uuid,

    pub birth_date: NaiveDate,

    #[validate(length(min = 1, max = 16))]
    pub gender: String,

    #[validate(length(min = 1, max = 64))]
    pub discipline: String,

    #[validate(length(min = 1, max = 32))]
    pub category: String,

    /// Federation license, e.g. FAB-12345
    pub license_number: String,
}

/// Update athlete request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAthleteRequest {
    pub association_id: Option<Uuid>,

    #[validate(length(min = 1, max = 64))]
    pub discipline: Option<String>,

    #[validate(length(min = 1, max = 32))]
    pub category: Option<String>,
}

/// List athletes query parameters
#[derive(Debug, Deserialize)]
pub struct ListAthletesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub association_id: Option<Uuid>,
    pub discipline: Option<String>,
    pub category: Option<String>,
}
