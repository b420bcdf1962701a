//! Dashboard response DTOs

use serde::Serialize;

/// Resolved dashboard destination for the current principal
#[derive(Debug, Serialize)]
pub struct DashboardRouteResponse {
    pub role: String,
    pub status: String,
    pub dashboard: &'static str,
}
