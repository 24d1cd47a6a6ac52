//! Predicted-contact input table.
//!
//! Pairs are **directed**: the expected time and probability of `a` meeting
//! `b` along `a`'s own journey need not equal the reverse figures, so both
//! are keyed by ordered `(from, to)` pairs.

use orp_core::AgentId;
use rustc_hash::FxHashMap;

/// One predicted contact: who will be met, and when.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub agent:         AgentId,
    /// Expected meeting time, in seconds from the prediction's start.
    pub expected_time: f64,
}

/// Per-agent predicted contacts plus directed pairwise encounter
/// probabilities — the inputs the graph builder expands over.
///
/// Contact lists keep insertion order; the builder scans them in the order
/// the prediction layer supplied them.
#[derive(Debug, Default)]
pub struct ContactTable {
    contacts:      FxHashMap<AgentId, Vec<Contact>>,
    probabilities: FxHashMap<(AgentId, AgentId), f64>,
}

impl ContactTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `from` is predicted to meet `to` at `expected_time` with
    /// the given probability.
    pub fn add_contact(&mut self, from: AgentId, to: AgentId, expected_time: f64, probability: f64) {
        self.contacts
            .entry(from)
            .or_default()
            .push(Contact { agent: to, expected_time });
        self.probabilities.insert((from, to), probability);
    }

    /// The predicted contacts of `agent`, in insertion order.  Agents with
    /// no predictions simply have no contacts.
    pub fn contacts(&self, agent: AgentId) -> &[Contact] {
        self.contacts.get(&agent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Directed encounter probability for `(from, to)`; zero when the pair
    /// was never recorded, which no positive threshold accepts.
    pub fn probability(&self, from: AgentId, to: AgentId) -> f64 {
        self.probabilities.get(&(from, to)).copied().unwrap_or(0.0)
    }

    /// Number of agents that have at least one outgoing contact.
    pub fn agent_count(&self) -> usize {
        self.contacts.len()
    }
}
