//! Validation errors for disruption records.

use thiserror::Error;

/// A field invariant violated by a disruption record.
///
/// Validation is distinct from the monitor's alert-generation failures:
/// a record that fails validation is rejected before it is registered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The id is empty or whitespace.
    #[error("disruption id cannot be empty")]
    EmptyId,

    /// Confidence must lie in [0.0, 1.0].
    #[error("confidence {0} is outside [0.0, 1.0]")]
    ConfidenceOutOfRange(f64),

    /// Daily cost must be a finite, non-negative number.
    #[error("estimated cost per day {0} is negative or not finite")]
    InvalidCost(f64),
}
