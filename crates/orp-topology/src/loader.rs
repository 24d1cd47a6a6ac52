//! CSV topology loader.
//!
//! # CSV format
//!
//! One row per undirected link, node IDs as 0-based integers:
//!
//! ```csv
//! from,to,length,arrival_rate,mean_travel_time,variance_travel_time
//! 0,1,500,0.05,22.5,3
//! 1,2,300,0.08,21.4,2
//! ```
//!
//! The node set is inferred: every index up to the largest one mentioned
//! becomes a node.  All weights are validated by `TopologyBuilder::build`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use orp_core::NodeId;

use crate::network::{Topology, TopologyBuilder};
use crate::{TopologyError, TopologyResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LinkRecord {
    from:                 u32,
    to:                   u32,
    length:               f64,
    arrival_rate:         f64,
    mean_travel_time:     f64,
    variance_travel_time: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Topology`] from a CSV file.
pub fn load_topology_csv(path: &Path) -> TopologyResult<Topology> {
    let file = std::fs::File::open(path).map_err(TopologyError::Io)?;
    load_topology_reader(file)
}

/// Like [`load_topology_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded fixtures.
pub fn load_topology_reader<R: Read>(reader: R) -> TopologyResult<Topology> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut records: Vec<LinkRecord> = Vec::new();
    let mut max_node: Option<u32> = None;
    for result in csv_reader.deserialize::<LinkRecord>() {
        let row = result.map_err(|e| TopologyError::Parse(e.to_string()))?;
        max_node = Some(max_node.unwrap_or(0).max(row.from).max(row.to));
        records.push(row);
    }

    let node_count = max_node.map(|m| m as usize + 1).unwrap_or(0);
    let mut builder = TopologyBuilder::with_capacity(node_count, records.len());
    for _ in 0..node_count {
        builder.add_node();
    }
    for r in &records {
        builder.add_link(
            NodeId(r.from),
            NodeId(r.to),
            r.length,
            r.arrival_rate,
            r.mean_travel_time,
            r.variance_travel_time,
        );
    }
    builder.build()
}
