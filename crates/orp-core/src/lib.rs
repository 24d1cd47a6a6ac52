//! `orp-core` — foundational types for the `rust_orp` routing predictor.
//!
//! This crate sits at the bottom of the `orp-*` stack.  It intentionally has
//! no `orp-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module  | Contents                                |
//! |---------|-----------------------------------------|
//! | [`ids`] | `AgentId`, `NodeId`, `EdgeId`           |
//! | [`rng`] | `SampleRng` (deterministic sampling)    |
//!
//! Error enums live with the subsystems that produce them (`DelayError` in
//! `orp-delay`, `RouteError` in `orp-route`, …) rather than in a shared base
//! type; the predictor crates are leaves with disjoint failure modes.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public IDs.  |

pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{AgentId, EdgeId, NodeId};
pub use rng::SampleRng;
