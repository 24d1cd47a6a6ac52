//! Closed-form packet-forwarding delay for a single link.
//!
//! # Model
//!
//! A data unit crossing a link either finds a carrier inside communication
//! range and is forwarded immediately, or must wait for the next carrier and
//! be physically carried.  With carrier arrival rate λ, range R, and speed v,
//! the forward case happens with probability
//!
//!   β = 1 - exp(-λ R / v)
//!
//! and each case contributes its expectation and second moment to a two-case
//! mixture.  The combined spread term is computed as `E[d²] + E[d]²` — the
//! sign convention the downstream gamma fit was calibrated against.  It is
//! not the textbook central variance; changing it would silently re-rank
//! every path, so it is preserved as-is.

use orp_delay::DelayMoments;

use crate::{RouteError, RouteResult};

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// The carrier profile the packet races: speed (m/s) and communication
/// radius (m).  Validated once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    speed:      f64,
    comm_range: f64,
}

impl Vehicle {
    /// Fails with `InvalidParameters` unless both values are finite and
    /// strictly positive.
    pub fn new(speed: f64, comm_range: f64) -> RouteResult<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(RouteError::InvalidParameters { name: "speed", value: speed });
        }
        if !comm_range.is_finite() || comm_range <= 0.0 {
            return Err(RouteError::InvalidParameters { name: "comm_range", value: comm_range });
        }
        Ok(Self { speed, comm_range })
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn comm_range(&self) -> f64 {
        self.comm_range
    }
}

// ── Link delay ────────────────────────────────────────────────────────────────

/// Packet-forwarding delay moments for one link of the given `length` and
/// carrier `arrival_rate`.
///
/// The returned mean can be non-positive when the communication radius
/// exceeds half the link length; fitting a delay model to such a link fails
/// downstream with `InvalidParameters`, which is the desired fail-fast
/// signal for a misconfigured topology.
pub fn link_packet_delay(vehicle: Vehicle, length: f64, arrival_rate: f64) -> DelayMoments {
    let v = vehicle.speed;
    let r = vehicle.comm_range;

    // Expected distance to the next forwarder: mid-link.
    let e_lf = length / 2.0;

    // Case probabilities.
    let beta = 1.0 - (-arrival_rate * r / v).exp();

    // Case expectations.
    let e_forward = (length - e_lf - r) / v;
    let e_wait = 1.0 / arrival_rate + (length - r) / v;
    let mean = e_forward * beta + e_wait * (1.0 - beta);

    // Case second moments.
    let e_lf2 = e_lf * e_lf / 3.0;
    let m2_forward =
        ((length - r) * (length - r) - 2.0 * (length - r) * e_lf + e_lf2) / (v * v);
    let m2_wait = (1.0 / arrival_rate + (length - r)) * (1.0 / arrival_rate + (length - r));
    let m2 = m2_forward * beta + m2_wait * (1.0 - beta);

    DelayMoments::new(mean, m2 + mean * mean)
}
