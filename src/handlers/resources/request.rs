//! Resource request DTOs

use serde::Deserialize;

/// List resources query parameters
#[derive(Debug, Deserialize)]
pub struct ListResourcesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category: Option<String>,
    pub search: Option<String>,
}
