//! `orp-graph` — best-first construction of predicted-encounter trees.
//!
//! Given per-agent predicted contacts and directed pairwise encounter
//! probabilities (typically computed with `orp-encounter`), builds the tree
//! of forwarding opportunities from a source agent toward a destination,
//! bounded by a probability threshold and a time-to-live.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`graph`]   | `EncounterGraph` (arena tree), `EncounterNode`          |
//! | [`table`]   | `ContactTable`, `Contact`                               |
//! | [`builder`] | `EncounterGraphBuilder`, `Prediction`, `PredictOutcome` |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                          |

pub mod builder;
pub mod error;
pub mod graph;
pub mod table;

#[cfg(test)]
mod tests;

pub use builder::{EncounterGraphBuilder, PredictOutcome, Prediction};
pub use error::{GraphError, GraphResult};
pub use graph::{EncounterGraph, EncounterNode};
pub use table::{Contact, ContactTable};
