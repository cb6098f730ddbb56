use crate::config::toml_config::{FieldSpec, ProbeConfig};
use crate::domain::possibility::{Possibility, Presence};
use crate::domain::truthy::Truthy;
use crate::utils::error::{PossibilityError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// How strongly a field must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    Defined,
    Present,
    Ok,
}

impl Requirement {
    pub fn is_met_by<T: Truthy>(&self, possibility: &Possibility<T>) -> bool {
        match self {
            Requirement::Defined => possibility.is_defined(),
            Requirement::Present => possibility.is_present(),
            Requirement::Ok => possibility.is_ok(),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Defined => write!(f, "defined"),
            Requirement::Present => write!(f, "present"),
            Requirement::Ok => write!(f, "ok"),
        }
    }
}

/// Resolves a dotted path (`user.profile.name`, `items.0.id`) inside a JSON
/// document.
///
/// A key or index that does not exist, or a walk through a scalar, yields an
/// empty possibility. A JSON `null` at the end of the path yields a null one.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Possibility<&'a Value> {
    let mut current = root;

    for segment in path.split('.') {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => parse_index(segment).and_then(|i| items.get(i)),
            _ => None,
        };

        match next {
            Some(value) => current = value,
            None => {
                tracing::trace!("Segment '{}' of '{}' not found", segment, path);
                return Possibility::empty();
            }
        }
    }

    if current.is_null() {
        Possibility::null()
    } else {
        Possibility::of(current)
    }
}

/// Only canonical array indices resolve: `0`, `1`, `12`, never `01` or `+1`.
fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub path: String,
    pub presence: Presence,
    pub ok: bool,
    pub requirement: Option<Requirement>,
    met: bool,
}

impl FieldReport {
    /// True when the field has no requirement or meets it.
    pub fn satisfied(&self) -> bool {
        self.met
    }
}

impl fmt::Display for FieldReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.presence)?;
        if self.ok {
            write!(f, ", ok")?;
        }
        Ok(())
    }
}

/// Classifies a fixed set of fields against JSON documents.
pub struct Probe {
    config: ProbeConfig,
}

impl Probe {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn inspect(&self, document: &Value) -> Vec<FieldReport> {
        tracing::debug!(
            "Probing {} fields for '{}'",
            self.config.fields.len(),
            self.config.probe.name
        );

        self.config
            .fields
            .iter()
            .map(|field| Self::report(document, field))
            .collect()
    }

    /// Like [`Probe::inspect`], but fails on the first field whose
    /// requirement is not met.
    pub fn check(&self, document: &Value) -> Result<Vec<FieldReport>> {
        let reports = self.inspect(document);
        Self::first_unmet(&reports)?;
        Ok(reports)
    }

    /// Fails with the first report whose requirement is not met.
    pub fn first_unmet(reports: &[FieldReport]) -> Result<()> {
        match reports.iter().find(|r| !r.satisfied()) {
            Some(failed) => {
                tracing::warn!("Requirement not met for '{}'", failed.path);
                Err(PossibilityError::RequirementError {
                    field: failed.path.clone(),
                    requirement: failed
                        .requirement
                        .map(|r| r.to_string())
                        .unwrap_or_default(),
                    presence: failed.presence,
                })
            }
            None => Ok(()),
        }
    }

    fn report(document: &Value, field: &FieldSpec) -> FieldReport {
        let found = lookup(document, &field.path);
        tracing::trace!("{} -> {}", field.path, found.presence());

        FieldReport {
            path: field.path.clone(),
            presence: found.presence(),
            ok: found.is_ok(),
            requirement: field.require,
            met: field.require.map_or(true, |r| r.is_met_by(&found)),
        }
    }
}
