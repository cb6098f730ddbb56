//! A value that may be absent, explicitly null, or present.
//!
//! `Option<T>` only has two states. Data arriving from loosely typed sources
//! (JSON documents, partial updates, optional arguments) often needs three:
//! "never supplied", "supplied as null" and "supplied with a value".

use crate::domain::truthy::Truthy;
use crate::utils::error::ValuePresenceError;
use std::fmt;

/// The raw slot held by a [`Possibility`].
#[derive(Debug, Clone, Copy)]
pub enum Slot<T> {
    /// Nothing was ever supplied.
    Undefined,
    /// A value was supplied, and it was null.
    Null,
    Value(T),
}

/// Coarse classification of a [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    Absent,
    Null,
    Present,
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Presence::Absent => write!(f, "absent"),
            Presence::Null => write!(f, "null"),
            Presence::Present => write!(f, "present"),
        }
    }
}

/// An immutable wrapper around a single [`Slot`].
///
/// ```
/// use possibility::Possibility;
///
/// let zero = Possibility::of(0);
/// assert!(zero.is_present());
/// assert!(!zero.is_ok());
///
/// assert!(Possibility::<i32>::null().is_defined());
/// assert!(Possibility::<i32>::empty().get().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Possibility<T> {
    data: Slot<T>,
}

impl<T> Default for Possibility<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Possibility<T> {
    /// Wraps the slot exactly as given.
    pub const fn new(data: Slot<T>) -> Self {
        Self { data }
    }

    /// Wraps a present value. The value is taken as-is, so a JSON
    /// `Value::Null` passed here counts as present; use
    /// [`Possibility::of_json`] or [`Possibility::null`] for that case.
    pub const fn of(value: T) -> Self {
        Self::new(Slot::Value(value))
    }

    pub const fn null() -> Self {
        Self::new(Slot::Null)
    }

    pub const fn empty() -> Self {
        Self::new(Slot::Undefined)
    }

    /// `None` is treated as an explicit null, not as absence.
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::of(v),
            None => Self::null(),
        }
    }

    /// Wraps `value` if it is truthy, otherwise returns [`Possibility::empty`].
    pub fn of_ok(value: T) -> Self
    where
        T: Truthy,
    {
        if value.is_truthy() {
            Self::of(value)
        } else {
            Self::empty()
        }
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self.data, Slot::Undefined)
    }

    pub fn is_present(&self) -> bool {
        matches!(self.data, Slot::Value(_))
    }

    /// True when the value is present and truthy. A present `0` or `""` is
    /// not ok.
    pub fn is_ok(&self) -> bool
    where
        T: Truthy,
    {
        match &self.data {
            Slot::Value(v) => v.is_truthy(),
            Slot::Undefined | Slot::Null => false,
        }
    }

    pub fn presence(&self) -> Presence {
        match self.data {
            Slot::Undefined => Presence::Absent,
            Slot::Null => Presence::Null,
            Slot::Value(_) => Presence::Present,
        }
    }

    /// Returns the value, or an error naming why it is missing.
    pub fn get(&self) -> Result<&T, ValuePresenceError> {
        match &self.data {
            Slot::Value(v) => Ok(v),
            Slot::Undefined | Slot::Null => Err(ValuePresenceError {
                state: self.presence(),
            }),
        }
    }

    pub fn get_or_undefined(&self) -> Option<&T> {
        match &self.data {
            Slot::Value(v) => Some(v),
            Slot::Undefined | Slot::Null => None,
        }
    }

    /// Owned form of [`Possibility::get`].
    pub fn into_inner(self) -> Result<T, ValuePresenceError> {
        let state = self.presence();
        match self.data {
            Slot::Value(v) => Ok(v),
            Slot::Undefined | Slot::Null => Err(ValuePresenceError { state }),
        }
    }

    pub fn as_ref(&self) -> Possibility<&T> {
        Possibility::new(match &self.data {
            Slot::Undefined => Slot::Undefined,
            Slot::Null => Slot::Null,
            Slot::Value(v) => Slot::Value(v),
        })
    }

    pub fn slot(&self) -> &Slot<T> {
        &self.data
    }
}

impl Possibility<serde_json::Value> {
    /// Wraps a JSON value, treating `Value::Null` as an explicit null.
    pub fn of_json(value: serde_json::Value) -> Self {
        if value.is_null() {
            Self::null()
        } else {
            Self::of(value)
        }
    }
}

impl<T> From<Slot<T>> for Possibility<T> {
    fn from(data: Slot<T>) -> Self {
        Self::new(data)
    }
}
