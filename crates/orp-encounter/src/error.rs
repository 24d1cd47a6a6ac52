//! Encounter-estimation error type.

use thiserror::Error;

/// Errors produced by `orp-encounter`.
#[derive(Debug, Error)]
pub enum EncounterError {
    #[error("invalid {name}: must be finite and > 0, got {value}")]
    InvalidParameters { name: &'static str, value: f64 },
}

pub type EncounterResult<T> = Result<T, EncounterError>;
