pub mod possibility;
pub mod truthy;

pub use possibility::{Possibility, Presence, Slot};
pub use truthy::{is_truthy, Truthy};
