//! `orp-route` — path-reliability optimization over a static topology.
//!
//! Composes per-link packet-forwarding delay moments (a two-case
//! forward/wait-and-carry mixture) into path-level delay models via
//! `orp-delay`, and ranks candidate paths by the probability that the
//! forwarded unit beats the carrier's expected travel time.
//!
//! # Crate layout
//!
//! | Module        | Contents                                           |
//! |---------------|----------------------------------------------------|
//! | [`link`]      | `Vehicle`, `link_packet_delay`                     |
//! | [`optimizer`] | `PathOptimizer`, `RankedPath`                      |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                     |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Scores candidate paths across Rayon workers.        |

pub mod error;
pub mod link;
pub mod optimizer;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use link::{link_packet_delay, Vehicle};
pub use optimizer::{PathOptimizer, RankedPath, DEFAULT_MAX_PATHS};
