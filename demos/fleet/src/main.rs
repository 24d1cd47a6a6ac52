//! fleet — dynamic encounter-prediction demo.
//!
//! Walks the full pairwise pipeline for a five-vehicle fleet: fit delay
//! models from supplied moments, estimate link and intersection encounter
//! probabilities, predict an arrival time by sampling an end-to-end delay,
//! and expand the predicted-encounter tree from a source vehicle to a
//! destination vehicle.

use anyhow::Result;

use orp_core::{AgentId, SampleRng};
use orp_delay::DelayModel;
use orp_encounter::{
    intersection_encounter_probability, link_encounter_probability, EncounterWindow, SampleGrid,
    DEFAULT_X_MAX,
};
use orp_graph::{ContactTable, EncounterGraphBuilder, PredictOutcome};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;

const THRESHOLD: f64 = 0.6;
const TTL:       f64 = 10.0;

const VEHICLES: [&str; 5] = ["a", "b", "c", "d", "s"];

fn vehicle_name(agent: AgentId) -> &'static str {
    VEHICLES[agent.index()]
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== fleet — rust_orp encounter prediction ===");
    println!();

    // 1. Delay models from externally supplied (mean, variance) pairs.
    let va = DelayModel::fit(10.0, 2.0)?;
    let vb = DelayModel::fit(15.0, 3.0)?;
    println!(
        "Va delay: shape {:.1}, scale {:.3}  |  Vb delay: shape {:.1}, scale {:.3}",
        va.shape(),
        va.scale(),
        vb.shape(),
        vb.scale()
    );

    // 2. Pairwise encounter probabilities.
    let on_link =
        link_encounter_probability(&va, &vb, EncounterWindow::link(5.0, 6.0), SampleGrid::default())?;
    println!("P(encounter on shared link):    {on_link:.6}");

    let at_intersection =
        intersection_encounter_probability(&va, &vb, 5.0, 10.0, 0.5, DEFAULT_X_MAX)?;
    println!("P(encounter at intersection):   {at_intersection:.6}");
    if at_intersection > 1.0 {
        eprintln!("warning: intersection case probabilities sum above 1 — check window configuration");
    }
    println!();

    // 3. Arrival prediction over a three-segment route.
    let segments = [
        DelayModel::fit(10.0, 2.0)?,
        DelayModel::fit(15.0, 3.0)?,
        DelayModel::fit(20.0, 5.0)?,
    ];
    let end_to_end = DelayModel::compose(&segments)?;
    let mut rng = SampleRng::new(SEED);
    let now = 5.0;
    let arrival = end_to_end.predict_arrival(now, rng.inner());
    println!(
        "End-to-end delay: mean {:.1} s, variance {:.1} s²",
        end_to_end.mean(),
        end_to_end.variance()
    );
    println!("Predicted arrival (from t = {now}): {arrival:.2} s");
    println!();

    // 4. Predicted-encounter tree for the fleet.
    let [a, b, c, d, s] = [AgentId(0), AgentId(1), AgentId(2), AgentId(3), AgentId(4)];
    let mut table = ContactTable::new();
    table.add_contact(a, b, 3.0, 0.7);
    table.add_contact(a, d, 5.0, 0.8);
    table.add_contact(b, c, 6.0, 0.6);
    table.add_contact(c, s, 8.0, 0.9);
    table.add_contact(d, s, 7.0, 0.85);

    let builder = EncounterGraphBuilder::new(THRESHOLD, TTL)?;
    let prediction = builder.predict(a, s, &table);

    println!("Encounter tree (threshold {THRESHOLD}, ttl {TTL} s):");
    for agent in prediction.graph.agents() {
        for child in prediction.graph.children_of(agent) {
            println!(
                "  vehicle {} meets {} at t = {:.0} s",
                vehicle_name(agent),
                vehicle_name(child.agent),
                child.expected_encounter_time
            );
        }
    }
    match prediction.outcome {
        PredictOutcome::Reached { time } => {
            println!("Destination {} reached at t = {time:.0} s", vehicle_name(s));
        }
        PredictOutcome::Unreached => {
            println!("Destination {} not reachable within bounds", vehicle_name(s));
        }
    }

    Ok(())
}
