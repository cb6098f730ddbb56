pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::probe::Requirement;
#[cfg(feature = "cli")]
use crate::utils::error::{PossibilityError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_field_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "possibility")]
#[command(about = "Report whether fields of a JSON document are absent, null, present or ok")]
pub struct CliConfig {
    /// JSON document to inspect; reads stdin when omitted or "-"
    #[arg(short, long)]
    pub input: Option<String>,

    /// TOML probe configuration declaring fields and requirements
    #[arg(short, long)]
    pub config: Option<String>,

    /// Dotted field paths to inspect, e.g. user.profile.name
    #[arg(short, long, value_delimiter = ',')]
    pub field: Vec<String>,

    /// Requirement applied to every --field entry
    #[arg(short, long, value_enum)]
    pub require: Option<Requirement>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn reads_stdin(&self) -> bool {
        matches!(self.input.as_deref(), None | Some("-"))
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.field.is_empty() && self.config.is_none() {
            return Err(PossibilityError::ConfigError {
                message: "No fields to inspect: pass --field or --config".to_string(),
            });
        }

        for path in &self.field {
            validate_field_path("--field", path)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fields_and_requirement() {
        let config = CliConfig::try_parse_from([
            "possibility",
            "--field",
            "id,user.name",
            "--field",
            "items.0",
            "--require",
            "present",
        ])
        .unwrap();

        assert_eq!(config.field, vec!["id", "user.name", "items.0"]);
        assert_eq!(config.require, Some(Requirement::Present));
        assert!(config.reads_stdin());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_requires_some_field() {
        let config = CliConfig::try_parse_from(["possibility", "--input", "data.json"]).unwrap();
        assert!(!config.reads_stdin());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_path() {
        let config = CliConfig::try_parse_from(["possibility", "-f", "a..b"]).unwrap();
        assert!(config.validate().is_err());
    }
}
