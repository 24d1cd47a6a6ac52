//! Weighted topology representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays are sorted by source node and indexed by `EdgeId`, so
//! iterating a node's neighbors is a contiguous memory scan — exactly what
//! the path enumerator's inner loop wants.
//!
//! Undirected links are stored as two directed edges carrying the same
//! attributes.  The stable edge sort keeps a node's neighbors in link
//! insertion order, which fixes the path-enumeration order for good.

use orp_core::{EdgeId, NodeId};

use crate::paths::SimplePaths;
use crate::{TopologyError, TopologyResult};

// ── Topology ──────────────────────────────────────────────────────────────────

/// Static undirected weighted graph of location nodes in CSR format.
///
/// All edge arrays are `pub` for direct indexed access; the structure is
/// read-only after [`TopologyBuilder::build`] and safe to share across
/// threads.  Every weight has been validated finite and strictly positive.
#[derive(Debug)]
pub struct Topology {
    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.  Length = node count + 1.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each directed edge.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each directed edge.
    pub edge_to: Vec<NodeId>,

    /// Physical link length (metres).
    pub edge_length: Vec<f64>,

    /// Carrier arrival rate λ on the link (vehicles per second) — drives the
    /// packet-forwarding delay model.
    pub edge_arrival_rate: Vec<f64>,

    /// Externally supplied expected travel time across the link (seconds).
    pub edge_travel_mean: Vec<f64>,

    /// Externally supplied travel-time variance (seconds²).
    pub edge_travel_var: Vec<f64>,
}

impl Topology {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_out_start.len() - 1
    }

    /// Number of **directed** edges — twice the number of links.
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// All node IDs, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count() as u32).map(NodeId)
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// CSR index range of `node`'s outgoing edges.
    #[inline]
    pub(crate) fn out_range(&self, node: NodeId) -> std::ops::Range<u32> {
        self.node_out_start[node.index()]..self.node_out_start[node.index() + 1]
    }

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.out_range(node).map(EdgeId)
    }

    /// Out-degree of `node`.
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_range(node).len()
    }

    /// The directed edge from `a` to `b`, if the link exists.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.out_edges(a).find(|&e| self.edge_to[e.index()] == b)
    }

    /// `true` if `node` was added to this topology.
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// Lazily enumerate simple paths (no repeated node) from `source` to
    /// `target`, depth-first in adjacency order.  Restart by calling again.
    ///
    /// Both endpoints must be nodes of this topology.
    pub fn simple_paths(&self, source: NodeId, target: NodeId) -> SimplePaths<'_> {
        SimplePaths::new(self, source, target)
    }
}

// ── TopologyBuilder ───────────────────────────────────────────────────────────

/// Construct a [`Topology`] incrementally, then call [`build`](Self::build).
///
/// Links may be added in any order; `build()` validates every weight,
/// expands each link into its two directed edges, and assembles the CSR
/// arrays.
///
/// # Example
///
/// ```
/// use orp_topology::TopologyBuilder;
///
/// let mut b = TopologyBuilder::new();
/// let n1 = b.add_node();
/// let n2 = b.add_node();
/// b.add_link(n1, n2, 500.0, 0.05, 22.5, 3.0);
/// let topo = b.build().unwrap();
/// assert_eq!(topo.node_count(), 2);
/// assert_eq!(topo.edge_count(), 2); // bidirectional
/// ```
pub struct TopologyBuilder {
    nodes:     usize,
    raw_links: Vec<RawLink>,
}

struct RawLink {
    from:         NodeId,
    to:           NodeId,
    length:       f64,
    arrival_rate: f64,
    travel_mean:  f64,
    travel_var:   f64,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self { nodes: 0, raw_links: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and links.
    pub fn with_capacity(nodes: usize, links: usize) -> Self {
        Self { nodes, raw_links: Vec::with_capacity(links) }
    }

    /// Add a location node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes as u32);
        self.nodes += 1;
        id
    }

    /// Add an **undirected** link between `a` and `b`.
    ///
    /// - `length`: physical length in metres.
    /// - `arrival_rate`: carrier arrival rate λ (vehicles/second).
    /// - `travel_mean` / `travel_var`: externally supplied travel-time
    ///   moments for the link (seconds, seconds²).
    pub fn add_link(
        &mut self,
        a: NodeId,
        b: NodeId,
        length: f64,
        arrival_rate: f64,
        travel_mean: f64,
        travel_var: f64,
    ) {
        self.raw_links.push(RawLink {
            from: a,
            to: b,
            length,
            arrival_rate,
            travel_mean,
            travel_var,
        });
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn link_count(&self) -> usize {
        self.raw_links.len()
    }

    /// Consume the builder and produce a validated [`Topology`].
    ///
    /// Fails if any link references an unknown node or carries a weight that
    /// is not finite and strictly positive.
    pub fn build(self) -> TopologyResult<Topology> {
        let node_count = self.nodes;

        // Validate once at load time; search never re-checks weights.
        for l in &self.raw_links {
            if l.from.index() >= node_count || l.to.index() >= node_count {
                return Err(TopologyError::UnknownNode { from: l.from, to: l.to });
            }
            for (attr, value) in [
                ("length", l.length),
                ("arrival_rate", l.arrival_rate),
                ("mean_travel_time", l.travel_mean),
                ("variance_travel_time", l.travel_var),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(TopologyError::InvalidLink { from: l.from, to: l.to, attr, value });
                }
            }
        }

        // Expand links into directed edges, both directions.
        struct RawEdge {
            from:         NodeId,
            to:           NodeId,
            length:       f64,
            arrival_rate: f64,
            travel_mean:  f64,
            travel_var:   f64,
        }
        let mut raw: Vec<RawEdge> = Vec::with_capacity(self.raw_links.len() * 2);
        for l in &self.raw_links {
            raw.push(RawEdge {
                from:         l.from,
                to:           l.to,
                length:       l.length,
                arrival_rate: l.arrival_rate,
                travel_mean:  l.travel_mean,
                travel_var:   l.travel_var,
            });
            raw.push(RawEdge {
                from:         l.to,
                to:           l.from,
                length:       l.length,
                arrival_rate: l.arrival_rate,
                travel_mean:  l.travel_mean,
                travel_var:   l.travel_var,
            });
        }

        // Stable sort: neighbors of a node stay in link insertion order,
        // which pins down the simple-path enumeration order.
        raw.sort_by_key(|e| e.from.0);

        let edge_from:         Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:           Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_length:       Vec<f64>    = raw.iter().map(|e| e.length).collect();
        let edge_arrival_rate: Vec<f64>    = raw.iter().map(|e| e.arrival_rate).collect();
        let edge_travel_mean:  Vec<f64>    = raw.iter().map(|e| e.travel_mean).collect();
        let edge_travel_var:   Vec<f64>    = raw.iter().map(|e| e.travel_var).collect();

        // Build CSR row pointer.
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, raw.len());

        Ok(Topology {
            node_out_start,
            edge_from,
            edge_to,
            edge_length,
            edge_arrival_rate,
            edge_travel_mean,
            edge_travel_var,
        })
    }
}

impl Default for TopologyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
