//! Association request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_ASSOCIATION_NAME_LENGTH;

/// Create association request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssociationRequest {
    #[validate(length(min = 1, max = MAX_ASSOCIATION_NAME_LENGTH))]
    pub name: String,

    #[validate(length(min = 1, max = 64))]
    pub department: String,

    #[validate(length(min = 1, max = 64))]
    pub city: String,

    #[validate(email)]
    pub contact_email: Option<String>,

    #[validate(length(max = 32))]
    pub contact_phone: Option<String>,
}

/// Update association request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAssociationRequest {
    #[validate(length(min = 1, max = MAX_ASSOCIATION_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub department: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub city: Option<String>,

    #[validate(email)]
    pub contact_email: Option<String>,

    #[validate(length(max = 32))]
    pub contact_phone: Option<String>,
}

/// List associations query parameters
#[derive(Debug, Deserialize)]
pub struct ListAssociationsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub department: Option<String>,
    pub search: Option<String>,
}
