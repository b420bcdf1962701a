//! Judge response DTOs

use serde::Serialize;

use crate::models::Judge;

/// Judge list response
#[derive(Debug, Serialize)]
pub struct JudgesListResponse {
    pub judges: Vec<Judge>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
