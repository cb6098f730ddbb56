use crate::utils::error::{PossibilityError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PossibilityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A dotted field path must have at least one segment and no empty segments.
pub fn validate_field_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if path.split('.').any(|segment| segment.trim().is_empty()) {
        return Err(PossibilityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains an empty segment".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("probe.name", "users").is_ok());
        assert!(validate_non_empty_string("probe.name", "").is_err());
        assert!(validate_non_empty_string("probe.name", "   ").is_err());
    }

    #[test]
    fn test_validate_field_path() {
        assert!(validate_field_path("path", "id").is_ok());
        assert!(validate_field_path("path", "user.profile.name").is_ok());
        assert!(validate_field_path("path", "items.0.sku").is_ok());
        assert!(validate_field_path("path", "").is_err());
        assert!(validate_field_path("path", ".id").is_err());
        assert!(validate_field_path("path", "user.").is_err());
        assert!(validate_field_path("path", "a..b").is_err());
    }
}
