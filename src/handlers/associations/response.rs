//! Association response DTOs

use serde::Serialize;

use crate::models::Association;

/// Association list response
#[derive(Debug, Serialize)]
pub struct AssociationsListResponse {
    pub associations: Vec<Association>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
