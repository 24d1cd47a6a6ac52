//! Route-optimization error type.

use orp_core::NodeId;
use orp_delay::DelayError;
use thiserror::Error;

/// Errors produced by `orp-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid {name}: must be finite and > 0, got {value}")]
    InvalidParameters { name: &'static str, value: f64 },

    /// The topology holds no simple path between the endpoints.  A terminal
    /// outcome of a well-formed query, distinct from invalid input.
    #[error("no simple path from {from} to {to}")]
    NoPathFound { from: NodeId, to: NodeId },

    #[error("no link between {from} and {to}")]
    MissingLink { from: NodeId, to: NodeId },

    #[error("node {0} not in topology")]
    UnknownNode(NodeId),

    #[error("delay model: {0}")]
    Delay(#[from] DelayError),
}

pub type RouteResult<T> = Result<T, RouteError>;
