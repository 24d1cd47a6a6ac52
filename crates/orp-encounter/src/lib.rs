//! `orp-encounter` — pairwise encounter-probability estimation.
//!
//! Given two delay models and a timing window, computes the probability that
//! both arrival events fall inside the joint window via numeric double
//! integration.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`estimator`] | `EncounterWindow`, `SampleGrid`, link & intersection probabilities |
//! | [`integrate`] | adaptive Simpson `quad`                                  |
//! | [`error`]     | `EncounterError`, `EncounterResult<T>`                   |

pub mod error;
pub mod estimator;
pub mod integrate;


pub use error::{EncounterError, EncounterResult};
pub use estimator::{
    intersection_encounter_probability, link_encounter_probability,
    link_encounter_probability_with, EncounterWindow, LinkEstimator, SampleGrid, DEFAULT_X_MAX,
};
pub use integrate::quad;
