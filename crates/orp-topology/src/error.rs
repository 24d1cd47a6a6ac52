//! Topology error type.

use orp_core::NodeId;
use thiserror::Error;

/// Errors produced by `orp-topology`.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("invalid {attr} on link {from}-{to}: must be finite and > 0, got {value}")]
    InvalidLink {
        from:  NodeId,
        to:    NodeId,
        attr:  &'static str,
        value: f64,
    },

    #[error("link {from}-{to} references a node that was never added")]
    UnknownNode { from: NodeId, to: NodeId },

    #[error("topology parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TopologyResult<T> = Result<T, TopologyError>;
