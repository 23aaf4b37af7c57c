use std::fmt;

use crate::value::Value;

/// Classifies a normalization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeErrorKind {
    /// String that is not a decimal number, or a non-finite float.
    NotNumeric,
    /// Number with a non-zero fractional part.
    Fractional,
    /// Whole number that does not fit an `i128`.
    OutOfBounds,
    /// Value of a type that cannot represent a number.
    Unsupported,
}

impl fmt::Display for NormalizeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNumeric => write!(f, "not a number"),
            Self::Fractional => write!(f, "not a whole number"),
            Self::OutOfBounds => write!(f, "number out of bounds"),
            Self::Unsupported => write!(f, "unsupported value type"),
        }
    }
}

/// Error produced when a value cannot be normalized into an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {input}")]
pub struct NormalizeError {
    pub kind: NormalizeErrorKind,
    /// Rendering of the rejected input.
    pub input: String,
}

impl NormalizeError {
    #[must_use]
    pub fn new(kind: NormalizeErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}

/// Classifies a holder assignment failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolderErrorKind {
    /// The value has the wrong shape: wrong type, non-numeric, or an
    /// object lacking the expected capability.
    InvalidInput,
    /// The value is a whole number but below 1, or too large to store.
    OutOfRange,
}

impl fmt::Display for HolderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input"),
            Self::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// Error returned by a rejected `set`.
///
/// Carries the (translated) message, an optional numeric code, the
/// offending value, and the normalization failure that caused it, if any.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct HolderError {
    pub kind: HolderErrorKind,
    pub message: String,
    pub code: Option<i32>,
    pub argument: Value,
    #[source]
    pub cause: Option<NormalizeError>,
}

impl HolderError {
    /// Build an [`HolderErrorKind::InvalidInput`] error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>, argument: Value) -> Self {
        Self::new(HolderErrorKind::InvalidInput, message, argument)
    }

    /// Build an [`HolderErrorKind::OutOfRange`] error.
    #[must_use]
    pub fn out_of_range(message: impl Into<String>, argument: Value) -> Self {
        Self::new(HolderErrorKind::OutOfRange, message, argument)
    }

    fn new(kind: HolderErrorKind, message: impl Into<String>, argument: Value) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            argument,
            cause: None,
        }
    }

    #[must_use]
    pub const fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach the normalization failure behind this error.
    #[must_use]
    pub fn caused_by(mut self, cause: NormalizeError) -> Self {
        self.cause = Some(cause);
        self
    }
}
