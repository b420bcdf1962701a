//! Utility functions

pub mod crypto;
pub mod upload;
pub mod validation;

pub use crypto::{generate_secure_token, hash_bytes, hash_string};
pub use upload::{ensure_upload_dir, stored_file_name, validate_file_size, validate_file_type};
pub use validation::{validate_license_number, validate_username};
