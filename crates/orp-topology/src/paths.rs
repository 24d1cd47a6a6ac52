//! Lazy enumeration of simple paths.
//!
//! Depth-first traversal over the CSR adjacency, yielding each simple path
//! (no repeated node) from source to target as it is discovered.  Laziness
//! matters: dense topologies have exponentially many simple paths, and the
//! optimizer only ever consumes a bounded prefix.

use orp_core::NodeId;

use crate::network::Topology;

/// Iterator over all simple paths between two nodes, in depth-first
/// adjacency order.
///
/// Created by [`Topology::simple_paths`].  The sequence is finite,
/// deterministic for a given topology, and restartable by constructing a new
/// iterator.  When `source == target` the single zero-length path
/// `[source]` is yielded.
///
/// Both endpoints must be nodes of the topology.
pub struct SimplePaths<'a> {
    topo:   &'a Topology,
    target: NodeId,
    /// Remaining out-edge cursor for each level of the current path.
    stack: Vec<std::ops::Range<u32>>,
    /// The current path prefix, `source` first.
    path: Vec<NodeId>,
    /// Membership mask for `path`.
    on_path: Vec<bool>,
    /// Set while the trivial `source == target` path is still to be yielded.
    trivial_pending: bool,
}

impl<'a> SimplePaths<'a> {
    pub(crate) fn new(topo: &'a Topology, source: NodeId, target: NodeId) -> Self {
        let mut on_path = vec![false; topo.node_count()];
        let mut stack = Vec::new();
        let path = vec![source];

        let trivial_pending = source == target;
        if !trivial_pending {
            on_path[source.index()] = true;
            stack.push(topo.out_range(source));
        }

        Self { topo, target, stack, path, on_path, trivial_pending }
    }
}

impl Iterator for SimplePaths<'_> {
    type Item = Vec<NodeId>;

    fn next(&mut self) -> Option<Vec<NodeId>> {
        if self.trivial_pending {
            self.trivial_pending = false;
            return Some(self.path.clone());
        }

        loop {
            let cursor = self.stack.last_mut()?;

            let Some(edge) = cursor.next() else {
                // Level exhausted — backtrack one hop.
                self.stack.pop();
                if let Some(node) = self.path.pop() {
                    self.on_path[node.index()] = false;
                }
                continue;
            };

            let next = self.topo.edge_to[edge as usize];
            if next == self.target {
                // The target terminates a path but is never descended into.
                let mut found = self.path.clone();
                found.push(next);
                return Some(found);
            }
            if self.on_path[next.index()] {
                continue;
            }

            self.on_path[next.index()] = true;
            self.path.push(next);
            self.stack.push(self.topo.out_range(next));
        }
    }
}
