//! Encounter-probability estimators.
//!
//! Two agents with delay-distributed arrival times "encounter" each other
//! when the second arrival lands inside a window anchored at the first.
//! Both estimators integrate the product of the two arrival densities over
//! such a window; they differ in how the outer dimension is handled.
//!
//! # The two link estimators
//!
//! - [`LinkEstimator::SampleAveraged`] — the reference behavior.  The outer
//!   variable is sampled on a uniform grid and the accumulated sum is divided
//!   by the **sample count**, not weighted by the grid step.  This is not a
//!   mathematically exact joint probability; it is preserved as the
//!   compatibility default.
//! - [`LinkEstimator::NestedIntegral`] — a properly normalized double
//!   integral over the same window, matching the treatment used for
//!   intersection encounters.
//!
//! Keep the divergence in mind when comparing absolute values between the
//! two: the sample-averaged figure is systematically smaller.

use orp_delay::DelayModel;

use crate::integrate::quad;
use crate::{EncounterError, EncounterResult};

// ── Windows & grids ───────────────────────────────────────────────────────────

/// Offsets around one agent's arrival time `x` within which the other
/// agent's arrival counts as an encounter: `[x + low_offset, x + high_offset]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncounterWindow {
    pub low_offset:  f64,
    pub high_offset: f64,
}

impl EncounterWindow {
    pub fn new(low_offset: f64, high_offset: f64) -> Self {
        Self { low_offset, high_offset }
    }

    /// The window for a shared road link: the other agent may arrive any time
    /// from `x` until both expected link traversals (`t1_2 + t2_1`) have
    /// elapsed.
    pub fn link(t1_2: f64, t2_1: f64) -> Self {
        Self { low_offset: 0.0, high_offset: t1_2 + t2_1 }
    }

    /// Window length; non-positive means no encounter is possible.
    pub fn width(&self) -> f64 {
        self.high_offset - self.low_offset
    }
}

/// Uniform outer-variable grid for the sample-averaged estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    /// Upper bound of the outer arrival-time range `[0, x_max]`.
    pub x_max:  f64,
    /// Grid spacing.
    pub x_step: f64,
}

impl SampleGrid {
    fn validate(&self) -> EncounterResult<()> {
        if !self.x_max.is_finite() || self.x_max <= 0.0 {
            return Err(EncounterError::InvalidParameters { name: "x_max", value: self.x_max });
        }
        if !self.x_step.is_finite() || self.x_step <= 0.0 {
            return Err(EncounterError::InvalidParameters { name: "x_step", value: self.x_step });
        }
        Ok(())
    }

    /// Grid points `i * x_step` strictly below `x_max`.
    fn samples(&self) -> u64 {
        (self.x_max / self.x_step).ceil() as u64
    }
}

/// Reference grid: 10,000 samples over `[0, 100)` seconds.
impl Default for SampleGrid {
    fn default() -> Self {
        Self { x_max: 100.0, x_step: 0.01 }
    }
}

/// Reference outer integration bound for intersection encounters.
pub const DEFAULT_X_MAX: f64 = 100.0;

// ── Link encounters ───────────────────────────────────────────────────────────

/// Which normalization the link estimator applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEstimator {
    /// Accumulate over outer grid samples, divide by sample count
    /// (reference behavior).
    SampleAveraged,
    /// Proper nested double integral over `[0, x_max]`.
    NestedIntegral,
}

/// Probability that agents `f` and `g` encounter each other on a shared
/// link, using the reference [`LinkEstimator::SampleAveraged`] strategy.
///
/// Returns `0` for a window of non-positive width.
pub fn link_encounter_probability(
    f: &DelayModel,
    g: &DelayModel,
    window: EncounterWindow,
    grid: SampleGrid,
) -> EncounterResult<f64> {
    link_encounter_probability_with(LinkEstimator::SampleAveraged, f, g, window, grid)
}

/// [`link_encounter_probability`] with an explicit estimator choice.
///
/// `NestedIntegral` uses only `grid.x_max`; the grid step has no effect on
/// the adaptive quadrature.
pub fn link_encounter_probability_with(
    estimator: LinkEstimator,
    f: &DelayModel,
    g: &DelayModel,
    window: EncounterWindow,
    grid: SampleGrid,
) -> EncounterResult<f64> {
    grid.validate()?;
    if window.width() <= 0.0 {
        return Ok(0.0);
    }

    match estimator {
        LinkEstimator::SampleAveraged => {
            let samples = grid.samples();
            let mut acc = 0.0;
            for i in 0..samples {
                let x = i as f64 * grid.x_step;
                let fx = f.density(x);
                if fx > 0.0 {
                    acc += fx * quad(|y| g.density(y), x + window.low_offset, x + window.high_offset);
                }
            }
            Ok(acc / samples as f64)
        }
        LinkEstimator::NestedIntegral => Ok(quad(
            |x| {
                let fx = f.density(x);
                if fx > 0.0 {
                    fx * quad(|y| g.density(y), x + window.low_offset, x + window.high_offset)
                } else {
                    0.0
                }
            },
            0.0,
            grid.x_max,
        )),
    }
}

// ── Intersection encounters ───────────────────────────────────────────────────

/// Probability that agents `f` and `g` encounter each other at an
/// intersection.
///
/// Two cases are evaluated as proper nested integrals and summed:
///
/// 1. `f` arrives first; `g` must arrive within `[x + ti, x + ti + R/Sb]`.
/// 2. `g` is early; its arrival falls within `[x + ti - R/Sb, x + ti]`.
///
/// `ti` is the expected link delay to the intersection, `comm_range` the
/// communication radius, `speed_b` the second agent's expected speed.  The
/// sum is returned **unclamped**: a value above one signals misconfigured
/// windows and is the caller's to detect, not this function's to hide.
///
/// Fails with `InvalidParameters` when `speed_b <= 0` or `x_max <= 0`.
pub fn intersection_encounter_probability(
    f: &DelayModel,
    g: &DelayModel,
    ti: f64,
    comm_range: f64,
    speed_b: f64,
    x_max: f64,
) -> EncounterResult<f64> {
    if !speed_b.is_finite() || speed_b <= 0.0 {
        return Err(EncounterError::InvalidParameters { name: "speed_b", value: speed_b });
    }
    if !x_max.is_finite() || x_max <= 0.0 {
        return Err(EncounterError::InvalidParameters { name: "x_max", value: x_max });
    }

    // Time for agent B to cross the communication disc.
    let crossing = comm_range / speed_b;

    let case_a_first = quad(
        |x| {
            let fx = f.density(x);
            if fx > 0.0 {
                fx * quad(|y| g.density(y), x + ti, x + ti + crossing)
            } else {
                0.0
            }
        },
        0.0,
        x_max,
    );
    let case_b_first = quad(
        |x| {
            let fx = f.density(x);
            if fx > 0.0 {
                fx * quad(|y| g.density(y), x + ti - crossing, x + ti)
            } else {
                0.0
            }
        },
        0.0,
        x_max,
    );

    Ok(case_a_first + case_b_first)
}
