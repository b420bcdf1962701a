//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;

use crate::constants;

/// License numbers: 2-3 uppercase letters, a dash, 4-6 digits (e.g. FAB-12345)
static LICENSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,3}-\d{4,6}$").expect("valid license regex"));

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 32 {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username can only contain letters, numbers, underscores, and hyphens");
    }
    if !username.chars().next().map(|c| c.is_alphabetic()).unwrap_or(false) {
        return Err("Username must start with a letter");
    }
    Ok(())
}

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !email.contains('@') {
        return Err("Invalid email format");
    }
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format");
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err("Invalid email format");
    }
    if !parts[1].contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Validate federation license number format
pub fn validate_license_number(license: &str) -> Result<(), &'static str> {
    if LICENSE_RE.is_match(license) {
        Ok(())
    } else {
        Err("License number must look like FAB-12345")
    }
}

/// Validate job offer contract type
pub fn validate_contract_type(contract_type: &str) -> Result<(), &'static str> {
    if constants::contract_types::ALL.contains(&contract_type) {
        Ok(())
    } else {
        Err("Invalid contract type")
    }
}

/// Validate resource category
pub fn validate_resource_category(category: &str) -> Result<(), &'static str> {
    if constants::resource_categories::ALL.contains(&category) {
        Ok(())
    } else {
        Err("Invalid resource category")
    }
}

/// Validate a salary range (both bounds optional)
pub fn validate_salary_range(min: Option<i32>, max: Option<i32>) -> Result<(), &'static str> {
    if let Some(min) = min {
        if min < 0 {
            return Err("Minimum salary cannot be negative");
        }
    }
    if let Some(max) = max {
        if max < 0 {
            return Err("Maximum salary cannot be negative");
        }
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err("Minimum salary cannot exceed maximum salary");
        }
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice_123").is_ok());
        assert!(validate_username("ab").is_err()); // Too short
        assert!(validate_username("123abc").is_err()); // Starts with number
        assert!(validate_username("user@name").is_err()); // Invalid character
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Password123").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("nouppercase123").is_err());
        assert!(validate_password("NOLOWERCASE123").is_err());
        assert!(validate_password("NoNumbers").is_err());
    }

    #[test]
    fn test_validate_license_number() {
        assert!(validate_license_number("FAB-12345").is_ok());
        assert!(validate_license_number("LP-2024").is_ok());
        assert!(validate_license_number("fab-12345").is_err()); // Lowercase
        assert!(validate_license_number("FAB12345").is_err()); // Missing dash
        assert!(validate_license_number("FABX-123").is_err()); // Too many letters
    }

    #[test]
    fn test_validate_contract_type() {
        assert!(validate_contract_type("full_time").is_ok());
        assert!(validate_contract_type("internship").is_ok());
        assert!(validate_contract_type("freelance").is_err());
    }

    #[test]
    fn test_validate_salary_range() {
        assert!(validate_salary_range(None, None).is_ok());
        assert!(validate_salary_range(Some(1000), Some(2000)).is_ok());
        assert!(validate_salary_range(Some(2000), Some(1000)).is_err());
        assert!(validate_salary_range(Some(-1), None).is_err());
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  hello  "), "hello");
        assert_eq!(sanitize_string("he\u{0007}llo"), "hello");
        assert_eq!(sanitize_string("line\nbreak"), "line\nbreak");
    }
}
