//! Arena-backed predicted-encounter tree.
//!
//! # Data layout
//!
//! Nodes live in a single `Vec` arena; parent and child links are arena
//! indices rather than owned boxes or back-pointers, so the tree can be
//! walked in either direction without reference cycles.  A side map from
//! `AgentId` to arena index doubles as the builder's visited set: an agent
//! is in the map exactly when it has been attached, and attachment is
//! first-visit-wins — whichever expansion reaches an agent first fixes its
//! parent and expected time permanently.

use orp_core::AgentId;
use rustc_hash::FxHashMap;

// ── EncounterNode ─────────────────────────────────────────────────────────────

/// One agent's position in the predicted-encounter tree.
#[derive(Debug)]
pub struct EncounterNode {
    pub agent: AgentId,
    /// Seconds from the prediction's start until this agent is expected to
    /// be met.  Zero for the root.
    pub expected_encounter_time: f64,
    /// Arena index of the parent; `None` only for the root.
    pub parent: Option<usize>,
    /// Arena indices of children, in attachment order.
    children: Vec<usize>,
}

impl EncounterNode {
    /// Arena indices of this node's children, in attachment order.
    pub fn children(&self) -> &[usize] {
        &self.children
    }
}

// ── EncounterGraph ────────────────────────────────────────────────────────────

/// The tree of forwarding opportunities produced by one prediction query.
///
/// Always contains at least the root (the source agent, at time zero).
/// Read-only once the builder returns it; presentation layers walk it
/// through the accessors below.
#[derive(Debug)]
pub struct EncounterGraph {
    nodes: Vec<EncounterNode>,
    index: FxHashMap<AgentId, usize>,
}

impl EncounterGraph {
    /// A fresh graph holding only the root agent at time zero.
    pub(crate) fn with_root(source: AgentId) -> Self {
        let root = EncounterNode {
            agent: source,
            expected_encounter_time: 0.0,
            parent: None,
            children: Vec::new(),
        };
        let mut index = FxHashMap::default();
        index.insert(source, 0);
        Self { nodes: vec![root], index }
    }

    /// Attach `agent` as a new child of the node at `parent`.  Returns the
    /// new node's arena index.  The caller (the builder) guarantees `agent`
    /// is not yet present.
    pub(crate) fn attach(&mut self, parent: usize, agent: AgentId, time: f64) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(EncounterNode {
            agent,
            expected_encounter_time: time,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(idx);
        self.index.insert(agent, idx);
        idx
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The source agent's node.
    pub fn root(&self) -> &EncounterNode {
        &self.nodes[0]
    }

    /// Number of agents in the tree (root included).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node by arena index.
    pub fn get(&self, idx: usize) -> &EncounterNode {
        &self.nodes[idx]
    }

    /// Node for `agent`, if it was reached.
    pub fn node(&self, agent: AgentId) -> Option<&EncounterNode> {
        self.index.get(&agent).map(|&i| &self.nodes[i])
    }

    /// `true` if `agent` was reached (equivalently: visited by the builder).
    pub fn contains(&self, agent: AgentId) -> bool {
        self.index.contains_key(&agent)
    }

    /// Expected encounter time for `agent`, if reached.
    pub fn expected_time(&self, agent: AgentId) -> Option<f64> {
        self.node(agent).map(|n| n.expected_encounter_time)
    }

    /// The children attached under `agent`, in attachment order.  Empty if
    /// the agent is absent or a leaf.
    pub fn children_of(&self, agent: AgentId) -> impl Iterator<Item = &EncounterNode> {
        self.node(agent)
            .into_iter()
            .flat_map(|n| n.children.iter().map(|&i| &self.nodes[i]))
    }

    /// All reached agents, in attachment order (root first).
    pub fn agents(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.nodes.iter().map(|n| n.agent)
    }
}
