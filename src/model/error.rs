//! Error taxonomy for the architecture model
//!
//! The model is pure computation over already-validated matrices, so the
//! only recoverable failure is a bad configuration. Failures are never
//! transient; recovery means correcting the configuration, not retrying.

use thiserror::Error;

/// Errors produced by architecture construction and sweeps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A non-positive architecture parameter or degenerate sweep range.
    /// Values are rejected outright, never clamped.
    #[error("invalid configuration: {what} = {value}")]
    InvalidConfiguration { what: &'static str, value: i64 },
}
