//! Resource response DTOs

use serde::Serialize;

use crate::models::Resource;

/// Resource list response
#[derive(Debug, Serialize)]
pub struct ResourcesListResponse {
    pub resources: Vec<Resource>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
