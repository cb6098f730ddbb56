use crate::core::probe::Requirement;
use crate::utils::error::{PossibilityError, Result};
use crate::utils::validation::{validate_field_path, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    pub probe: ProbeSection,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub path: String,
    pub require: Option<Requirement>,
}

impl ProbeConfig {
    /// A config with no declared fields, for probes driven from the command line.
    pub fn named(name: &str) -> Self {
        Self {
            probe: ProbeSection {
                name: name.to_string(),
                description: None,
            },
            fields: Vec::new(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PossibilityError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PossibilityError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Adds a field unless one with the same path is already declared.
    pub fn add_field(&mut self, path: &str, require: Option<Requirement>) {
        if self.fields.iter().any(|f| f.path == path) {
            tracing::debug!("Field '{}' already declared, keeping existing entry", path);
            return;
        }
        self.fields.push(FieldSpec {
            path: path.to_string(),
            require,
        });
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").unwrap_or_else(|e| panic!("invalid env regex: {e}"))
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for ProbeConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("probe.name", &self.probe.name)?;

        let mut seen = HashSet::new();
        for field in &self.fields {
            validate_field_path("fields.path", &field.path)?;
            if !seen.insert(field.path.as_str()) {
                return Err(PossibilityError::InvalidConfigValueError {
                    field: "fields.path".to_string(),
                    value: field.path.clone(),
                    reason: "Field path is declared more than once".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_probe_config() {
        let toml_content = r#"
[probe]
name = "users"
description = "User export checks"

[[fields]]
path = "user.profile.name"
require = "ok"

[[fields]]
path = "user.manager"
"#;

        let config = ProbeConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.probe.name, "users");
        assert_eq!(config.fields.len(), 2);
        assert_eq!(config.fields[0].require, Some(Requirement::Ok));
        assert_eq!(config.fields[1].require, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fields_default_to_empty() {
        let config = ProbeConfig::from_toml_str("[probe]\nname = \"bare\"\n").unwrap();
        assert!(config.fields.is_empty());
    }

    #[test]
    fn test_unknown_requirement_is_rejected() {
        let toml_content = r#"
[probe]
name = "users"

[[fields]]
path = "id"
require = "truthy"
"#;
        assert!(ProbeConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("POSSIBILITY_TEST_PROBE_NAME", "from-env");

        let toml_content = r#"
[probe]
name = "${POSSIBILITY_TEST_PROBE_NAME}"
"#;
        let config = ProbeConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.probe.name, "from-env");

        std::env::remove_var("POSSIBILITY_TEST_PROBE_NAME");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[probe]
name = "dupes"

[[fields]]
path = "id"

[[fields]]
path = "id"
"#;
        let config = ProbeConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let mut config = ProbeConfig::named("bad-path");
        config.add_field("user..name", None);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_add_field_skips_duplicates() {
        let mut config = ProbeConfig::named("cli");
        config.add_field("id", Some(Requirement::Present));
        config.add_field("id", Some(Requirement::Ok));
        assert_eq!(config.fields.len(), 1);
        assert_eq!(config.fields[0].require, Some(Requirement::Present));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[probe]\nname = \"file-test\"\n\n[[fields]]\npath = \"a.b\"\n")
            .unwrap();

        let config = ProbeConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.probe.name, "file-test");
        assert_eq!(config.fields[0].path, "a.b");
    }
}
