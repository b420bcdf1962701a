//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default refresh token expiry in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

// =============================================================================
// USER ROLES
// =============================================================================

/// Federation role identifiers (Spanish-domain taxonomy)
pub mod federation_roles {
    pub const ADMIN_FAB: &str = "admin_fab";
    pub const ADMIN_ASOCIACION: &str = "admin_asociacion";
    pub const ATLETA: &str = "atleta";
    pub const ENTRENADOR: &str = "entrenador";
    pub const JUEZ: &str = "juez";

    /// All federation roles
    pub const ALL: &[&str] = &[ADMIN_FAB, ADMIN_ASOCIACION, ATLETA, ENTRENADOR, JUEZ];
}

/// Employment portal role identifiers (English taxonomy)
pub mod employment_roles {
    pub const YOUTH: &str = "youth";
    pub const COMPANIES: &str = "companies";
    pub const SUPERADMIN: &str = "superadmin";

    /// All employment roles
    pub const ALL: &[&str] = &[YOUTH, COMPANIES, SUPERADMIN];
}

// =============================================================================
// ACCOUNT STATUSES
// =============================================================================

/// Account lifecycle statuses
pub mod statuses {
    pub const PENDING: &str = "pending";
    pub const ACTIVE: &str = "active";
    pub const SUSPENDED: &str = "suspended";
    pub const REJECTED: &str = "rejected";

    /// All account statuses
    pub const ALL: &[&str] = &[PENDING, ACTIVE, SUSPENDED, REJECTED];
}

// =============================================================================
// DASHBOARD ROUTES
// =============================================================================

/// Canonical dashboard landing paths per role
pub mod dashboard_routes {
    /// Generic fallback for roles outside the closed set
    pub const DEFAULT: &str = "/dashboard";

    pub const ADMIN_FAB: &str = "/dashboard/admin-fab";
    pub const ADMIN_ASOCIACION: &str = "/dashboard/admin-asociacion";
    /// Historical path; the athlete dashboard shipped under this name
    pub const ATLETA: &str = "/dashboard/atleta-activo";
    pub const ENTRENADOR: &str = "/dashboard/entrenador";
    pub const JUEZ: &str = "/dashboard/juez";
    pub const YOUTH: &str = "/dashboard/youth";
    pub const COMPANIES: &str = "/dashboard/companies";
    pub const SUPERADMIN: &str = "/dashboard/superadmin";
}

// =============================================================================
// JOB OFFERS
// =============================================================================

/// Contract types for job offers
pub mod contract_types {
    pub const FULL_TIME: &str = "full_time";
    pub const PART_TIME: &str = "part_time";
    pub const INTERNSHIP: &str = "internship";
    pub const APPRENTICESHIP: &str = "apprenticeship";

    /// All supported contract types
    pub const ALL: &[&str] = &[FULL_TIME, PART_TIME, INTERNSHIP, APPRENTICESHIP];
}

/// Job offer statuses
pub mod offer_statuses {
    pub const OPEN: &str = "open";
    pub const CLOSED: &str = "closed";
}

// =============================================================================
// RESOURCE UPLOADS
// =============================================================================

/// Upload restrictions for resource files
pub mod uploads {
    /// Allowed file extensions (lowercase, without dot)
    pub const ALLOWED_EXTENSIONS: &[&str] =
        &["pdf", "doc", "docx", "xls", "xlsx", "png", "jpg", "jpeg"];

    /// Allowed content types
    pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
        "application/pdf",
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "application/vnd.ms-excel",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "image/png",
        "image/jpeg",
    ];

    /// Maximum upload size in bytes (10 MB)
    pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;
}

/// Resource categories
pub mod resource_categories {
    pub const REGULATIONS: &str = "regulations";
    pub const FORMS: &str = "forms";
    pub const TRAINING: &str = "training";
    pub const RESULTS: &str = "results";
    pub const GENERAL: &str = "general";

    /// All resource categories
    pub const ALL: &[&str] = &[REGULATIONS, FORMS, TRAINING, RESULTS, GENERAL];
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Auth endpoint - max requests
    pub const AUTH_MAX_REQUESTS: i64 = 5;
    /// Auth endpoint - window in seconds
    pub const AUTH_WINDOW_SECS: i64 = 60;

    /// Messaging endpoint - max requests
    pub const MESSAGE_MAX_REQUESTS: i64 = 20;
    /// Messaging endpoint - window in seconds
    pub const MESSAGE_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum association name length
pub const MAX_ASSOCIATION_NAME_LENGTH: u64 = 128;

/// Maximum course title length
pub const MAX_COURSE_TITLE_LENGTH: u64 = 256;

/// Maximum course description length
pub const MAX_COURSE_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum job offer title length
pub const MAX_OFFER_TITLE_LENGTH: u64 = 256;

/// Maximum job offer description length
pub const MAX_OFFER_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum message subject length
pub const MAX_MESSAGE_SUBJECT_LENGTH: u64 = 256;

/// Maximum message body length
pub const MAX_MESSAGE_BODY_LENGTH: u64 = 16384;

/// Maximum resource title length
pub const MAX_RESOURCE_TITLE_LENGTH: u64 = 256;
