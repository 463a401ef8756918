//! Typed diagnostics for raw-value coercion.
//!
//! Raw property maps are loosely typed: every value arrives as an untyped
//! blob from the decoding layer and must be coerced to its expected shape.
//! Coercion failures are *tolerated* (the decoding layer logs a warning and
//! substitutes the property's default), so these errors never cross the
//! crate boundary; they exist to carry a precise message to the warning
//! system.

use thiserror::Error;

/// Why a raw value could not be coerced to its expected type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RawValueError {
    /// The value had a different JSON-level type than the property expects.
    #[error("expected {expected} for '{key}', got {actual}")]
    TypeMismatch {
        /// The property name being decoded.
        key: String,
        /// What the property expects (e.g. "a number").
        expected: &'static str,
        /// What actually arrived (e.g. "a string").
        actual: &'static str,
    },

    /// The value had the right type but an unrecognized spelling
    /// (e.g. an unknown keyword or a malformed dimension string).
    #[error("unrecognized value '{value}' for '{key}'")]
    Unrecognized {
        /// The property name being decoded.
        key: String,
        /// The offending spelling.
        value: String,
    },
}
