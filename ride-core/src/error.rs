//! Error types for Ride.
//!
//! Failures raised by methods themselves are never wrapped: panics unwind
//! through decorators untouched and `Err` values are ordinary return values.
//! [`RideError`] only covers resolving a method by name.

use thiserror::Error;

/// Errors returned when a method cannot be resolved on a target.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RideError {
    /// Neither the target nor its prototypes define the method.
    #[error("no method named `{name}` on target")]
    UnknownMethod {
        /// The requested method name.
        name: &'static str,
    },

    /// The method exists but was defined with another signature.
    #[error("method `{name}` is not of type `{expected}`")]
    SignatureMismatch {
        /// The requested method name.
        name: &'static str,
        /// The signature the caller asked for.
        expected: &'static str,
    },
}

impl RideError {
    /// The method name the error refers to.
    pub fn name(&self) -> &'static str {
        match self {
            RideError::UnknownMethod { name } | RideError::SignatureMismatch { name, .. } => *name,
        }
    }
}
