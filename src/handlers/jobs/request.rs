//! Job offer request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_OFFER_DESCRIPTION_LENGTH, MAX_OFFER_TITLE_LENGTH};

/// Create job offer request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOfferRequest {
    #[validate(length(min = 1, max = MAX_OFFER_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_OFFER_DESCRIPTION_LENGTH))]
    pub description: String,

    #[validate(length(min = 1, max = 128))]
    pub location: String,

    /// Contract type: full_time, part_time, internship, apprenticeship
    pub contract_type: String,

    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,

    /// Applications close after this instant
    pub deadline: Option<DateTime<Utc>>,
}

/// Update job offer request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOfferRequest {
    #[validate(length(min = 1, max = MAX_OFFER_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = MAX_OFFER_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 128))]
    pub location: Option<String>,

    pub contract_type: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub deadline: Option<DateTime<Utc>>,
}

/// List job offers query parameters
#[derive(Debug, Deserialize)]
pub struct ListOffersQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub location: Option<String>,
    pub contract_type: Option<String>,
}
