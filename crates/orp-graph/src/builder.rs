//! Best-first expansion of the predicted-encounter tree.
//!
//! The builder is Dijkstra-shaped but is a reachability-tree constructor,
//! not a shortest-path solver: an agent's position in the tree is fixed by
//! whichever expansion visits it first, and already-visited agents are
//! skipped rather than relaxed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use orp_core::AgentId;

use crate::graph::EncounterGraph;
use crate::table::ContactTable;
use crate::{GraphError, GraphResult};

// ── Outcome ───────────────────────────────────────────────────────────────────

/// How a prediction query ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PredictOutcome {
    /// The destination was popped from the frontier at this expected time.
    Reached { time: f64 },
    /// The frontier drained without reaching the destination.  A legitimate
    /// terminal state — "no predicted path" — not an error.
    Unreached,
}

impl PredictOutcome {
    pub fn is_reached(&self) -> bool {
        matches!(self, PredictOutcome::Reached { .. })
    }
}

/// The result of one prediction query: the tree as built when the query
/// terminated, plus the terminal state.
#[derive(Debug)]
pub struct Prediction {
    pub graph:   EncounterGraph,
    pub outcome: PredictOutcome,
}

// ── Frontier ──────────────────────────────────────────────────────────────────

/// Min-frontier entry.  Ordered by expected time via `total_cmp`, with the
/// agent ID as secondary key for deterministic tie-breaking; the arena index
/// rides along and does not participate in ordering.
struct FrontierEntry {
    time:  f64,
    agent: AgentId,
    node:  usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.time
            .total_cmp(&other.time)
            .then_with(|| self.agent.cmp(&other.agent))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ── EncounterGraphBuilder ─────────────────────────────────────────────────────

/// Builds a predicted-encounter tree from a source agent toward a
/// destination agent.
///
/// A contact is expanded only when its pairwise encounter probability meets
/// `threshold` and its expected time is within `ttl`.  All working state
/// (frontier, visited set, partial tree) is local to one [`predict`] call;
/// the builder itself holds only the two bounds and may be reused freely.
///
/// [`predict`]: Self::predict
#[derive(Debug, Clone, Copy)]
pub struct EncounterGraphBuilder {
    threshold: f64,
    ttl:       f64,
}

impl EncounterGraphBuilder {
    /// Create a builder.
    ///
    /// `threshold` must lie in `(0, 1]`; `ttl` must be finite and positive.
    pub fn new(threshold: f64, ttl: f64) -> GraphResult<Self> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(GraphError::InvalidParameters {
                name:   "threshold",
                reason: "must lie in (0, 1]",
                value:  threshold,
            });
        }
        if !ttl.is_finite() || ttl <= 0.0 {
            return Err(GraphError::InvalidParameters {
                name:   "ttl",
                reason: "must be finite and > 0",
                value:  ttl,
            });
        }
        Ok(Self { threshold, ttl })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn ttl(&self) -> f64 {
        self.ttl
    }

    /// Expand the forwarding tree from `source` until `destination` is
    /// popped or the frontier drains.
    ///
    /// # Exploration bound
    ///
    /// The query stops as soon as the destination is popped, so only
    /// branches at least as fast as the winning one are guaranteed expanded.
    /// Frontier entries not yet popped are left unexpanded, and the tree is
    /// NOT a full shortest-path tree over incidentally visited agents —
    /// callers wanting exhaustive coverage must drain via an unreachable
    /// destination.
    pub fn predict(
        &self,
        source: AgentId,
        destination: AgentId,
        table: &ContactTable,
    ) -> Prediction {
        let mut graph = EncounterGraph::with_root(source);
        let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
        frontier.push(Reverse(FrontierEntry { time: 0.0, agent: source, node: 0 }));

        while let Some(Reverse(entry)) = frontier.pop() {
            if entry.agent == destination {
                return Prediction {
                    graph,
                    outcome: PredictOutcome::Reached { time: entry.time },
                };
            }

            for contact in table.contacts(entry.agent) {
                if graph.contains(contact.agent) {
                    continue; // first visit fixed this agent's parent
                }
                if table.probability(entry.agent, contact.agent) < self.threshold {
                    continue;
                }
                if contact.expected_time > self.ttl {
                    continue;
                }

                let node = graph.attach(entry.node, contact.agent, contact.expected_time);
                frontier.push(Reverse(FrontierEntry {
                    time:  contact.expected_time,
                    agent: contact.agent,
                    node,
                }));
            }
        }

        Prediction { graph, outcome: PredictOutcome::Unreached }
    }
}
