//! Upload validation and storage naming
//!
//! File-type and size checks for resource uploads, plus the naming scheme
//! for files on disk: one directory per category, a generated collision-safe
//! file name that preserves the original extension.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::constants::uploads;

/// Lowercased extension of a file name, if any
pub fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Validate a file's extension and declared content type against the allow-lists
pub fn validate_file_type(file_name: &str, content_type: &str) -> Result<(), &'static str> {
    let Some(ext) = file_extension(file_name) else {
        return Err("File has no extension");
    };
    if !uploads::ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err("File type not allowed");
    }
    if !uploads::ALLOWED_CONTENT_TYPES.contains(&content_type) {
        return Err("Content type not allowed");
    }
    Ok(())
}

/// Validate a file's size against the upload cap
pub fn validate_file_size(size: usize) -> Result<(), &'static str> {
    if size == 0 {
        return Err("File is empty");
    }
    if size > uploads::MAX_FILE_SIZE {
        return Err("File exceeds maximum size of 10MB");
    }
    Ok(())
}

/// Generate the on-disk name for an upload, preserving the extension
pub fn stored_file_name(original: &str) -> String {
    match file_extension(original) {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    }
}

/// Resolve and create the upload directory for a category
pub async fn ensure_upload_dir(base: &Path, category: &str) -> std::io::Result<PathBuf> {
    let dir = base.join(category);
    tokio::fs::create_dir_all(&dir).await?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("report.PDF"), Some("pdf".to_string()));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(file_extension("noext"), None);
    }

    #[test]
    fn test_validate_file_type() {
        assert!(validate_file_type("rules.pdf", "application/pdf").is_ok());
        assert!(validate_file_type("photo.jpg", "image/jpeg").is_ok());
        assert!(validate_file_type("script.sh", "text/x-shellscript").is_err());
        assert!(validate_file_type("noext", "application/pdf").is_err());
        // Extension passes but declared content type does not
        assert!(validate_file_type("rules.pdf", "application/octet-stream").is_err());
    }

    #[test]
    fn test_validate_file_size() {
        assert!(validate_file_size(1).is_ok());
        assert!(validate_file_size(uploads::MAX_FILE_SIZE).is_ok());
        assert!(validate_file_size(uploads::MAX_FILE_SIZE + 1).is_err());
        assert!(validate_file_size(0).is_err());
    }

    #[test]
    fn test_stored_file_name_preserves_extension() {
        let name = stored_file_name("Reglamento 2024.pdf");
        assert!(name.ends_with(".pdf"));
        assert_ne!(stored_file_name("a.pdf"), stored_file_name("a.pdf"));
    }

    #[tokio::test]
    async fn test_ensure_upload_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ensure_upload_dir(tmp.path(), "regulations").await.unwrap();
        assert!(dir.is_dir());
        assert!(dir.ends_with("regulations"));
        // Idempotent
        let again = ensure_upload_dir(tmp.path(), "regulations").await.unwrap();
        assert_eq!(dir, again);
    }
}
