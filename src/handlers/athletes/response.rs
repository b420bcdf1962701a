//! Athlete response DTOs

use serde::Serialize;

use crate::models::Athlete;

/// Athlete list response
#[derive(Debug, Serialize)]
pub struct AthletesListResponse {
    pub athletes: Vec<Athlete>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
