//! citymap — static-topology path reliability demo.
//!
//! Loads a six-intersection city map from an embedded CSV, then ranks every
//! simple path between two intersections by the probability that a forwarded
//! data unit arrives before the carrier vehicle does.

use std::io::Cursor;

use anyhow::Result;

use orp_core::NodeId;
use orp_route::{PathOptimizer, Vehicle};
use orp_topology::load_topology_reader;

// ── Constants ─────────────────────────────────────────────────────────────────

const VEHICLE_SPEED:      f64 = 15.0;  // m/s
const VEHICLE_COMM_RANGE: f64 = 100.0; // m

const SOURCE:      NodeId = NodeId(0);
const DESTINATION: NodeId = NodeId(5);

// Nine undirected links over intersections 0..=5.
// Columns: from,to,length(m),arrival_rate(1/s),mean_travel_time(s),variance(s²)
const CITY_CSV: &str = "\
from,to,length,arrival_rate,mean_travel_time,variance_travel_time\n\
0,1,500,0.05,22.5,3\n\
1,2,300,0.08,21.4,2\n\
2,3,400,0.06,19.2,3\n\
3,4,600,0.04,27,3\n\
4,5,350,0.07,31.5,3\n\
0,2,800,0.03,48,3\n\
1,3,700,0.02,50.4,3\n\
2,4,500,0.05,30,3\n\
3,5,450,0.06,27,3\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== citymap — rust_orp path reliability ===");

    let topo = load_topology_reader(Cursor::new(CITY_CSV))?;
    println!(
        "Topology: {} intersections, {} links",
        topo.node_count(),
        topo.edge_count() / 2
    );

    let vehicle = Vehicle::new(VEHICLE_SPEED, VEHICLE_COMM_RANGE)?;
    let optimizer = PathOptimizer::new(vehicle);

    println!(
        "Carrier: {:.0} m/s, {:.0} m communication range",
        vehicle.speed(),
        vehicle.comm_range()
    );
    println!();

    // Every candidate, in enumeration order.
    let ranked = optimizer.ranked_paths(&topo, SOURCE, DESTINATION)?;
    println!("{:<28} {:<12}", "Path", "P(beats vehicle)");
    println!("{}", "-".repeat(44));
    for r in &ranked {
        println!("{:<28} {:<12.4}", fmt_path(&r.nodes), r.probability);
    }
    println!();

    let best = optimizer.find_optimal_path(&topo, SOURCE, DESTINATION)?;
    println!(
        "Optimal path: {} with probability {:.4}",
        fmt_path(&best.nodes),
        best.probability
    );

    Ok(())
}

fn fmt_path(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(|n| n.0.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
