//! Composition of independent delay stages into one end-to-end model.
//!
//! The exact distribution of a sum of gamma delays with differing scales has
//! no closed form, so composition is a pluggable strategy.  The provided
//! [`MomentMatched`] strategy sums stage means and variances and refits —
//! cheap, and accurate enough for ranking forwarding opportunities.  A
//! numeric-convolution strategy can be substituted without touching callers.

use crate::{DelayModel, DelayMoments, DelayResult};

/// A rule for combining a sequence of independent delay stages.
pub trait ComposeStrategy {
    /// Combine `stages` into a single end-to-end delay model.
    ///
    /// Fails with `InvalidParameters` when the aggregate moments are not
    /// strictly positive — in particular for an empty sequence.
    fn combine(&self, stages: &[DelayModel]) -> DelayResult<DelayModel>;
}

/// Sum of means, sum of variances, refit.
pub struct MomentMatched;

impl ComposeStrategy for MomentMatched {
    fn combine(&self, stages: &[DelayModel]) -> DelayResult<DelayModel> {
        let total = stages
            .iter()
            .fold(DelayMoments::ZERO, |acc, m| acc + m.moments());
        total.fit()
    }
}

impl DelayModel {
    /// Compose stages with the default [`MomentMatched`] strategy.
    pub fn compose(stages: &[DelayModel]) -> DelayResult<DelayModel> {
        MomentMatched.combine(stages)
    }
}
