//! Job offer response DTOs

use serde::Serialize;

use crate::models::JobOffer;

/// Job offer list response
#[derive(Debug, Serialize)]
pub struct OffersListResponse {
    pub offers: Vec<JobOffer>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
