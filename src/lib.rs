pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::ProbeConfig;
pub use core::probe::{lookup, FieldReport, Probe, Requirement};
pub use domain::{is_truthy, Possibility, Presence, Slot, Truthy};
pub use utils::error::{PossibilityError, Result, ValuePresenceError};
