pub mod probe;

pub use crate::domain::{Possibility, Presence};
pub use crate::utils::error::Result;
pub use probe::{lookup, FieldReport, Probe, Requirement};
