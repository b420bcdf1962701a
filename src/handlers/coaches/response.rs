//! Coach response DTOs

use serde::Serialize;

use crate::models::Coach;

/// Coach list response
#[derive(Debug, Serialize)]
pub struct CoachesListResponse {
    pub coaches: Vec<Coach>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
