//! Delay-model error type.

use thiserror::Error;

/// Errors produced by `orp-delay`.
#[derive(Debug, Error)]
pub enum DelayError {
    #[error("invalid {name}: must be finite and > 0, got {value}")]
    InvalidParameters { name: &'static str, value: f64 },
}

pub type DelayResult<T> = Result<T, DelayError>;
