//! The gamma delay model and its raw (mean, variance) moments.
//!
//! # Parameterization
//!
//! Travel and transmission delays are positive and right-skewed, so they are
//! modeled with a two-parameter gamma distribution fit by matching the first
//! two moments:
//!
//!   scale = variance / mean
//!   shape = mean / scale
//!
//! which preserves `shape * scale == mean` and `shape * scale² == variance`
//! exactly.  Evaluation (pdf/cdf) goes through `statrs`, which uses the
//! shape/**rate** convention — the rate is `1 / scale` and is fixed at fit
//! time so the two libraries can never drift apart.

use rand::Rng;
use rand_distr::Distribution;
use statrs::distribution::{Continuous, ContinuousCDF};

use crate::{DelayError, DelayResult};

// ── DelayMoments ──────────────────────────────────────────────────────────────

/// A raw `(mean, variance)` pair — the currency the whole predictor trades in.
///
/// Moments of independent delay stages add component-wise, so summing
/// `DelayMoments` along a path gives the aggregate to refit a single
/// [`DelayModel`] from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DelayMoments {
    pub mean:     f64,
    pub variance: f64,
}

impl DelayMoments {
    pub const ZERO: DelayMoments = DelayMoments { mean: 0.0, variance: 0.0 };

    pub fn new(mean: f64, variance: f64) -> Self {
        Self { mean, variance }
    }

    /// Fit a [`DelayModel`] to these moments.
    pub fn fit(self) -> DelayResult<DelayModel> {
        DelayModel::fit(self.mean, self.variance)
    }
}

impl std::ops::Add for DelayMoments {
    type Output = DelayMoments;
    #[inline]
    fn add(self, rhs: DelayMoments) -> DelayMoments {
        DelayMoments {
            mean:     self.mean + rhs.mean,
            variance: self.variance + rhs.variance,
        }
    }
}

impl std::ops::AddAssign for DelayMoments {
    #[inline]
    fn add_assign(&mut self, rhs: DelayMoments) {
        self.mean += rhs.mean;
        self.variance += rhs.variance;
    }
}

// ── DelayModel ────────────────────────────────────────────────────────────────

/// An immutable moment-matched gamma delay distribution.
///
/// Only constructed through [`fit`](Self::fit), which validates the input
/// moments, so a `DelayModel` in hand always has strictly positive, finite
/// shape and scale.
#[derive(Debug, Clone, Copy)]
pub struct DelayModel {
    shape: f64,
    scale: f64,
    /// Evaluation form (shape/rate), kept in lockstep with `shape`/`scale`.
    eval: statrs::distribution::Gamma,
    /// Sampling form (shape/scale) for `rand`-driven draws.
    sampler: rand_distr::Gamma<f64>,
}

impl PartialEq for DelayModel {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.scale == other.scale
    }
}

impl DelayModel {
    /// Fit a gamma delay model to a `(mean, variance)` pair.
    ///
    /// Fails with [`DelayError::InvalidParameters`] when either moment is
    /// non-positive or non-finite.
    pub fn fit(mean: f64, variance: f64) -> DelayResult<Self> {
        if !mean.is_finite() || mean <= 0.0 {
            return Err(DelayError::InvalidParameters { name: "mean", value: mean });
        }
        if !variance.is_finite() || variance <= 0.0 {
            return Err(DelayError::InvalidParameters { name: "variance", value: variance });
        }

        let scale = variance / mean;
        let shape = mean / scale;

        let eval = statrs::distribution::Gamma::new(shape, 1.0 / scale)
            .map_err(|_| DelayError::InvalidParameters { name: "shape", value: shape })?;
        let sampler = rand_distr::Gamma::new(shape, scale)
            .map_err(|_| DelayError::InvalidParameters { name: "scale", value: scale })?;

        Ok(Self { shape, scale, eval, sampler })
    }

    // ── Parameters & moments ──────────────────────────────────────────────

    pub fn shape(&self) -> f64 {
        self.shape
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Expected delay; equals `shape * scale` by construction.
    pub fn mean(&self) -> f64 {
        self.shape * self.scale
    }

    /// Delay variance; equals `shape * scale²` by construction.
    pub fn variance(&self) -> f64 {
        self.shape * self.scale * self.scale
    }

    /// The `(mean, variance)` pair this model was fit to.
    pub fn moments(&self) -> DelayMoments {
        DelayMoments::new(self.mean(), self.variance())
    }

    // ── Evaluation ────────────────────────────────────────────────────────

    /// Probability density at `x`.  Zero for `x < 0` (delays are positive),
    /// and zero at the `x == 0` singularity of shape-below-one models so the
    /// density is finite everywhere and safe to integrate.
    pub fn density(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let d = self.eval.pdf(x);
        if d.is_finite() { d } else { 0.0 }
    }

    /// Probability that the delay is at most `x`.  Zero at `x <= 0`,
    /// monotonically non-decreasing, approaching one as `x → ∞`.
    pub fn cumulative(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.eval.cdf(x)
    }

    // ── Sampling ──────────────────────────────────────────────────────────

    /// Draw one pseudo-random delay from the model.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }

    /// Predict an arrival instant: `now` plus one sampled delay.
    pub fn predict_arrival<R: Rng + ?Sized>(&self, now: f64, rng: &mut R) -> f64 {
        now + self.sample(rng)
    }
}
