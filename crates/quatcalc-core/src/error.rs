//! Error types for the quaternion calculator core.
//!
//! Arithmetic itself can only fail one way: dividing by a quaternion with
//! zero norm. The remaining variants cover the strict construction path and
//! seed-record decoding.

use thiserror::Error;

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Main error type for the calculator core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A component carried a NaN or infinite value on the strict
    /// construction path. The default constructors and setters clamp
    /// silently instead of reporting this.
    #[error("non-finite {component} component: {value}")]
    NonFiniteComponent {
        /// Which component was rejected ("w", "i", "j" or "k").
        component: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Divisor had zero norm, so no multiplicative inverse exists.
    #[error("division by zero-norm quaternion")]
    DivisionByZero,

    /// A seed field did not have the expected number of components.
    #[error("seed field `{field}` must have exactly 4 components, got {actual}")]
    SeedComponentCount {
        /// Offending seed field name.
        field: &'static str,
        /// Number of components actually supplied.
        actual: usize,
    },

    /// An operation name outside the wire enumeration
    /// `none | add | subtract | multiply | divide`.
    #[error("unknown operation name: {0:?}")]
    UnknownOperation(String),
}
