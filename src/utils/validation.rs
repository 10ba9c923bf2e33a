use crate::utils::error::{FixturesError, Result};
use std::path::Path;

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(FixturesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FixturesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Only a warning condition: the directory may be created later.
pub fn is_existing_directory(path: &str) -> bool {
    Path::new(path).is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("doctrine.fixtures", "/app/data/fixtures").is_ok());
        assert!(validate_path("doctrine.fixtures", "relative/fixtures").is_ok());
        assert!(validate_path("doctrine.fixtures", "").is_err());
        assert!(validate_path("doctrine.fixtures", "   ").is_err());
        assert!(validate_path("doctrine.fixtures", "bad\0path").is_err());
    }

    #[test]
    fn test_is_existing_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(is_existing_directory(dir.path().to_str().unwrap()));
        assert!(!is_existing_directory("/definitely/not/a/real/fixtures/dir"));
    }
}
