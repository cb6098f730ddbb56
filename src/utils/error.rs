use crate::domain::possibility::Presence;
use thiserror::Error;

/// Returned by [`Possibility::get`](crate::Possibility::get) when the slot is
/// absent or explicitly null.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Value not present (slot is {state})")]
pub struct ValuePresenceError {
    pub state: Presence,
}

#[derive(Error, Debug)]
pub enum PossibilityError {
    #[error(transparent)]
    ValuePresence(#[from] ValuePresenceError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Field '{field}' does not satisfy requirement '{requirement}' (slot is {presence})")]
    RequirementError {
        field: String,
        requirement: String,
        presence: Presence,
    },
}

impl PossibilityError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PossibilityError::ValuePresence(_) => {
                "Check is_present() before calling get(), or use get_or_undefined()"
            }
            PossibilityError::IoError(_) => "Check that the input file exists and is readable",
            PossibilityError::SerializationError(_) => "Make sure the input is valid JSON",
            PossibilityError::ConfigError { .. }
            | PossibilityError::ConfigValidationError { .. } => {
                "Check the probe configuration file for syntax errors"
            }
            PossibilityError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration value and try again"
            }
            PossibilityError::RequirementError { .. } => {
                "Supply the field in the input document or relax its requirement"
            }
        }
    }

    /// Process exit code for the CLI: 1 for an unmet requirement, 2 for
    /// anything that stopped the fields from being inspected.
    pub fn exit_code(&self) -> i32 {
        match self {
            PossibilityError::RequirementError { .. } => 1,
            _ => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PossibilityError::IoError(e) => format!("Could not read input: {}", e),
            PossibilityError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            PossibilityError::RequirementError {
                field,
                requirement,
                presence,
            } => format!(
                "Field '{}' must be {} but is {}",
                field, requirement, presence
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PossibilityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_presence_error_message() {
        let err = ValuePresenceError {
            state: Presence::Null,
        };
        assert_eq!(err.to_string(), "Value not present (slot is null)");
    }

    #[test]
    fn test_value_presence_converts_transparently() {
        let err: PossibilityError = ValuePresenceError {
            state: Presence::Absent,
        }
        .into();
        assert_eq!(err.to_string(), "Value not present (slot is absent)");
        assert!(err.recovery_suggestion().contains("is_present"));
    }

    #[test]
    fn test_exit_codes() {
        let unmet = PossibilityError::RequirementError {
            field: "a".to_string(),
            requirement: "ok".to_string(),
            presence: Presence::Present,
        };
        assert_eq!(unmet.exit_code(), 1);

        let bad_json: PossibilityError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(bad_json.exit_code(), 2);

        let missing_file: PossibilityError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(missing_file.exit_code(), 2);

        let config = PossibilityError::ConfigError {
            message: "No fields to inspect".to_string(),
        };
        assert_eq!(config.exit_code(), 2);
    }

    #[test]
    fn test_requirement_error_user_message() {
        let err = PossibilityError::RequirementError {
            field: "user.name".to_string(),
            requirement: "ok".to_string(),
            presence: Presence::Null,
        };
        assert_eq!(
            err.user_friendly_message(),
            "Field 'user.name' must be ok but is null"
        );
    }
}
