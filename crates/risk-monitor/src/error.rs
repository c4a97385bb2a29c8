//! Error types for monitor operations.

use disruption_core::ValidationError;
use thiserror::Error;

/// Errors that can occur while ingesting a disruption.
///
/// `ingest` is total at the API boundary: callers always receive either a
/// well-formed alert or one of these typed failures, and a failure leaves
/// the monitor's state untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MonitorError {
    /// The disruption record violates a field invariant and was rejected
    /// before registration.
    #[error("invalid disruption: {0}")]
    InvalidDisruption(#[from] ValidationError),

    /// Alert construction failed after the record passed validation.
    #[error("alert generation failed: {0}")]
    AlertGeneration(String),
}
