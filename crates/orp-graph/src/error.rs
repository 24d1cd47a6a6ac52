//! Encounter-graph error type.
//!
//! Failing to reach the destination is NOT an error — it is reported through
//! [`PredictOutcome::Unreached`](crate::PredictOutcome::Unreached).  Errors
//! here are strictly fail-fast input validation.

use thiserror::Error;

/// Errors produced by `orp-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid {name}: {reason}, got {value}")]
    InvalidParameters {
        name:   &'static str,
        reason: &'static str,
        value:  f64,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;
