//! `orp-delay` — probabilistic delay models for travel and transmission time.
//!
//! # Crate layout
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`model`]   | `DelayModel` (gamma fit/pdf/cdf/sample), `DelayMoments` |
//! | [`compose`] | `ComposeStrategy` trait, `MomentMatched` default  |
//! | [`error`]   | `DelayError`, `DelayResult<T>`                    |
//!
//! Raw `(mean, variance)` pairs are supplied by an external provider; this
//! crate fits them, composes them along multi-stage journeys, and evaluates
//! the resulting distributions.  It never estimates moments itself.

pub mod compose;
pub mod error;
pub mod model;


pub use compose::{ComposeStrategy, MomentMatched};
pub use error::{DelayError, DelayResult};
pub use model::{DelayModel, DelayMoments};
