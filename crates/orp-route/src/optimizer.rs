//! Candidate-path enumeration and reliability ranking.

use orp_core::NodeId;
use orp_delay::{DelayModel, DelayMoments};
use orp_topology::Topology;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::link::{link_packet_delay, Vehicle};
use crate::{RouteError, RouteResult};

/// Candidate paths examined per query unless overridden.
pub const DEFAULT_MAX_PATHS: usize = 100;

// ── RankedPath ────────────────────────────────────────────────────────────────

/// A scored candidate path: its node sequence and the probability that a
/// forwarded unit beats the carrier's expected travel time along it.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPath {
    pub nodes:       Vec<NodeId>,
    pub probability: f64,
}

impl RankedPath {
    /// Number of links traversed.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

// ── PathOptimizer ─────────────────────────────────────────────────────────────

/// Ranks simple paths through a topology by delivery-before-deadline
/// probability.
///
/// For each candidate path the optimizer composes per-link packet-delay
/// moments into one delay model, sums the externally supplied travel-time
/// moments, and scores the path as
///
///   P(packet delay ≤ expected travel time)
///
/// via the composed model's cdf.  Enumeration is depth-first in adjacency
/// order and capped at `max_paths`, so queries stay bounded on dense
/// topologies; the cap is part of the contract, not an internal detail.
#[derive(Debug, Clone, Copy)]
pub struct PathOptimizer {
    vehicle:   Vehicle,
    max_paths: usize,
}

impl PathOptimizer {
    /// Optimizer with the default candidate cap of [`DEFAULT_MAX_PATHS`].
    pub fn new(vehicle: Vehicle) -> Self {
        Self { vehicle, max_paths: DEFAULT_MAX_PATHS }
    }

    /// Optimizer with an explicit candidate cap.
    ///
    /// Fails with `InvalidParameters` when `max_paths` is zero.
    pub fn with_max_paths(vehicle: Vehicle, max_paths: usize) -> RouteResult<Self> {
        if max_paths == 0 {
            return Err(RouteError::InvalidParameters { name: "max_paths", value: 0.0 });
        }
        Ok(Self { vehicle, max_paths })
    }

    pub fn vehicle(&self) -> Vehicle {
        self.vehicle
    }

    pub fn max_paths(&self) -> usize {
        self.max_paths
    }

    // ── Per-path delay models ─────────────────────────────────────────────

    /// Aggregate packet-forwarding delay model along `path`.
    ///
    /// Sums each link's closed-form delay moments, then fits one gamma model
    /// to the total.  Paths with fewer than two nodes have no links to sum
    /// and fail the fit with `InvalidParameters`.
    pub fn path_packet_delay(&self, topo: &Topology, path: &[NodeId]) -> RouteResult<DelayModel> {
        let mut total = DelayMoments::ZERO;
        for hop in path.windows(2) {
            let edge = topo
                .edge_between(hop[0], hop[1])
                .ok_or(RouteError::MissingLink { from: hop[0], to: hop[1] })?;
            total += link_packet_delay(
                self.vehicle,
                topo.edge_length[edge.index()],
                topo.edge_arrival_rate[edge.index()],
            );
        }
        Ok(total.fit()?)
    }

    /// Aggregate carrier travel-time moments along `path`, summed from the
    /// externally supplied per-link values.
    pub fn path_travel_delay(&self, topo: &Topology, path: &[NodeId]) -> RouteResult<DelayMoments> {
        let mut total = DelayMoments::ZERO;
        for hop in path.windows(2) {
            let edge = topo
                .edge_between(hop[0], hop[1])
                .ok_or(RouteError::MissingLink { from: hop[0], to: hop[1] })?;
            total += DelayMoments::new(
                topo.edge_travel_mean[edge.index()],
                topo.edge_travel_var[edge.index()],
            );
        }
        Ok(total)
    }

    /// Probability that a forwarded unit's cumulative delay is at most the
    /// carrier's expected travel time along `path`.
    ///
    /// A path with fewer than two nodes means the unit is already at its
    /// destination: probability one.
    pub fn success_probability(&self, topo: &Topology, path: &[NodeId]) -> RouteResult<f64> {
        if path.len() < 2 {
            return Ok(1.0);
        }
        let packet = self.path_packet_delay(topo, path)?;
        let travel = self.path_travel_delay(topo, path)?;
        Ok(packet.cumulative(travel.mean))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Enumerate and score up to `max_paths` simple paths from `source` to
    /// `destination`, in enumeration order.
    ///
    /// An empty result means the endpoints are disconnected.
    pub fn ranked_paths(
        &self,
        topo: &Topology,
        source: NodeId,
        destination: NodeId,
    ) -> RouteResult<Vec<RankedPath>> {
        for node in [source, destination] {
            if !topo.contains(node) {
                return Err(RouteError::UnknownNode(node));
            }
        }

        let candidates: Vec<Vec<NodeId>> = topo
            .simple_paths(source, destination)
            .take(self.max_paths)
            .collect();

        #[cfg(feature = "parallel")]
        let probabilities: RouteResult<Vec<f64>> = candidates
            .par_iter()
            .map(|p| self.success_probability(topo, p))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let probabilities: RouteResult<Vec<f64>> = candidates
            .iter()
            .map(|p| self.success_probability(topo, p))
            .collect();

        Ok(candidates
            .into_iter()
            .zip(probabilities?)
            .map(|(nodes, probability)| RankedPath { nodes, probability })
            .collect())
    }

    /// The candidate path maximizing [`success_probability`], with ties
    /// broken by enumeration order (first found wins).
    ///
    /// `source == destination` is the trivially delivered case: a
    /// zero-length path with probability one.  Fails with `NoPathFound`
    /// when the endpoints are disconnected.
    ///
    /// [`success_probability`]: Self::success_probability
    pub fn find_optimal_path(
        &self,
        topo: &Topology,
        source: NodeId,
        destination: NodeId,
    ) -> RouteResult<RankedPath> {
        let ranked = self.ranked_paths(topo, source, destination)?;
        let mut best: Option<RankedPath> = None;
        for candidate in ranked {
            match &best {
                Some(b) if candidate.probability <= b.probability => {}
                _ => best = Some(candidate),
            }
        }
        best.ok_or(RouteError::NoPathFound { from: source, to: destination })
    }
}
