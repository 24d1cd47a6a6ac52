//! Unit tests for link delay moments and path-reliability optimization.

/// Relative-tolerance comparison used across these tests.
#[cfg(test)]
fn assert_close(a: f64, b: f64, rel: f64) {
    let scale = b.abs().max(1e-12);
    assert!(
        (a - b).abs() <= rel * scale,
        "expected {a} ≈ {b} (rel {rel})"
    );
}

#[cfg(test)]
mod helpers {
    use orp_core::NodeId;
    use orp_topology::{Topology, TopologyBuilder};

    use crate::Vehicle;

    /// Reference carrier: 15 m/s with a 100 m communication radius.
    pub fn car() -> Vehicle {
        Vehicle::new(15.0, 100.0).unwrap()
    }

    /// The six-intersection reference city map with nine undirected links.
    pub fn city_map() -> (Topology, [NodeId; 6]) {
        let mut b = TopologyBuilder::new();
        let n1 = b.add_node();
        let n2 = b.add_node();
        let n3 = b.add_node();
        let n4 = b.add_node();
        let n5 = b.add_node();
        let n6 = b.add_node();

        b.add_link(n1, n2, 500.0, 0.05, 22.5, 3.0);
        b.add_link(n2, n3, 300.0, 0.08, 21.4, 2.0);
        b.add_link(n3, n4, 400.0, 0.06, 19.2, 3.0);
        b.add_link(n4, n5, 600.0, 0.04, 27.0, 3.0);
        b.add_link(n5, n6, 350.0, 0.07, 31.5, 3.0);
        b.add_link(n1, n3, 800.0, 0.03, 48.0, 3.0);
        b.add_link(n2, n4, 700.0, 0.02, 50.4, 3.0);
        b.add_link(n3, n5, 500.0, 0.05, 30.0, 3.0);
        b.add_link(n4, n6, 450.0, 0.06, 27.0, 3.0);

        (b.build().unwrap(), [n1, n2, n3, n4, n5, n6])
    }
}

#[cfg(test)]
mod link {
    use super::assert_close;
    use super::helpers::car;
    use crate::{link_packet_delay, RouteError, Vehicle};

    #[test]
    fn reference_link_moments() {
        // 500 m link, λ = 0.05: β = 1 - e^(-1/3), forward case expects 10 s,
        // wait case 140/3 s.
        let m = link_packet_delay(car(), 500.0, 0.05);
        assert_close(m.mean, 36.272814721039, 1e-9);
        assert_close(m.variance, 127687.69294, 1e-6);
    }

    #[test]
    fn denser_traffic_forwards_faster() {
        // A higher arrival rate raises the immediate-forward probability and
        // must drop the expected delay.
        let sparse = link_packet_delay(car(), 500.0, 0.05);
        let dense = link_packet_delay(car(), 500.0, 0.5);
        assert!(dense.mean < sparse.mean, "{} >= {}", dense.mean, sparse.mean);
    }

    #[test]
    fn spread_term_is_positive() {
        for (length, rate) in [(300.0, 0.08), (500.0, 0.05), (800.0, 0.03)] {
            let m = link_packet_delay(car(), length, rate);
            assert!(m.variance > 0.0, "variance {} for {length}/{rate}", m.variance);
        }
    }

    #[test]
    fn invalid_vehicle_rejected() {
        for (speed, range) in [(0.0, 100.0), (-15.0, 100.0), (15.0, 0.0), (f64::NAN, 100.0)] {
            let err = Vehicle::new(speed, range).unwrap_err();
            assert!(matches!(err, RouteError::InvalidParameters { .. }));
        }
    }
}

#[cfg(test)]
mod path_delays {
    use super::assert_close;
    use super::helpers::{car, city_map};
    use crate::{link_packet_delay, PathOptimizer, RouteError};

    #[test]
    fn single_hop_packet_delay_matches_link_fit() {
        let (topo, [n1, n2, ..]) = city_map();
        let opt = PathOptimizer::new(car());
        let model = opt.path_packet_delay(&topo, &[n1, n2]).unwrap();
        let expected = link_packet_delay(car(), 500.0, 0.05);
        assert_close(model.mean(), expected.mean, 1e-9);
        assert_close(model.variance(), expected.variance, 1e-9);
    }

    #[test]
    fn multi_hop_moments_accumulate() {
        let (topo, [n1, n2, n3, ..]) = city_map();
        let opt = PathOptimizer::new(car());
        let a = link_packet_delay(car(), 500.0, 0.05);
        let b = link_packet_delay(car(), 300.0, 0.08);
        let model = opt.path_packet_delay(&topo, &[n1, n2, n3]).unwrap();
        assert_close(model.mean(), a.mean + b.mean, 1e-9);
        assert_close(model.variance(), a.variance + b.variance, 1e-9);
    }

    #[test]
    fn travel_delay_sums_supplied_moments() {
        let (topo, [n1, n2, n3, ..]) = city_map();
        let opt = PathOptimizer::new(car());
        let travel = opt.path_travel_delay(&topo, &[n1, n2, n3]).unwrap();
        assert_close(travel.mean, 22.5 + 21.4, 1e-12);
        assert_close(travel.variance, 3.0 + 2.0, 1e-12);
    }

    #[test]
    fn missing_link_detected() {
        let (topo, [n1, _, _, _, _, n6]) = city_map();
        let opt = PathOptimizer::new(car());
        let err = opt.path_travel_delay(&topo, &[n1, n6]).unwrap_err();
        assert!(matches!(err, RouteError::MissingLink { .. }));
    }

    #[test]
    fn trivial_path_succeeds_with_certainty() {
        let (topo, [n1, ..]) = city_map();
        let opt = PathOptimizer::new(car());
        assert_eq!(opt.success_probability(&topo, &[n1]).unwrap(), 1.0);
        assert_eq!(opt.success_probability(&topo, &[]).unwrap(), 1.0);
    }

    #[test]
    fn success_probability_within_unit_interval() {
        let (topo, [n1, n2, n3, n4, n5, n6]) = city_map();
        let opt = PathOptimizer::new(car());
        let p = opt
            .success_probability(&topo, &[n1, n2, n3, n4, n5, n6])
            .unwrap();
        assert!((0.0..=1.0).contains(&p), "got {p}");
    }
}

#[cfg(test)]
mod optimal {
    use super::helpers::{car, city_map};
    use crate::{PathOptimizer, RouteError, Vehicle};

    #[test]
    fn reference_query_scores_every_candidate() {
        let (topo, [n1, _, _, _, _, n6]) = city_map();
        let opt = PathOptimizer::new(car());
        let ranked = opt.ranked_paths(&topo, n1, n6).unwrap();
        assert_eq!(ranked.len(), 13);
        for r in &ranked {
            assert!((0.0..=1.0).contains(&r.probability), "{:?}", r);
        }
    }

    #[test]
    fn optimal_is_the_enumeration_maximum() {
        let (topo, [n1, _, _, _, _, n6]) = city_map();
        let opt = PathOptimizer::new(car());
        let ranked = opt.ranked_paths(&topo, n1, n6).unwrap();
        let best = opt.find_optimal_path(&topo, n1, n6).unwrap();

        let max = ranked
            .iter()
            .map(|r| r.probability)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(best.probability, max);

        // First-found tie-break: the winner is the earliest candidate
        // carrying the maximal probability.
        let first_max = ranked.iter().find(|r| r.probability == max).unwrap();
        assert_eq!(best.nodes, first_max.nodes);
    }

    #[test]
    fn repeated_queries_are_deterministic() {
        let (topo, [n1, _, _, _, _, n6]) = city_map();
        let opt = PathOptimizer::new(car());
        let a = opt.find_optimal_path(&topo, n1, n6).unwrap();
        let b = opt.find_optimal_path(&topo, n1, n6).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn candidate_cap_limits_enumeration() {
        let (topo, [n1, n2, n3, n4, n5, n6]) = city_map();
        let opt = PathOptimizer::with_max_paths(car(), 1).unwrap();
        let best = opt.find_optimal_path(&topo, n1, n6).unwrap();
        // Only the first depth-first candidate is examined.
        assert_eq!(best.nodes, vec![n1, n2, n3, n4, n5, n6]);
    }

    #[test]
    fn zero_candidate_cap_rejected() {
        let err = PathOptimizer::with_max_paths(car(), 0).unwrap_err();
        assert!(matches!(err, RouteError::InvalidParameters { name: "max_paths", .. }));
    }

    #[test]
    fn source_equals_destination_is_certain() {
        let (topo, [n1, ..]) = city_map();
        let opt = PathOptimizer::new(car());
        let best = opt.find_optimal_path(&topo, n1, n1).unwrap();
        assert_eq!(best.nodes, vec![n1]);
        assert_eq!(best.hop_count(), 0);
        assert_eq!(best.probability, 1.0);
    }

    #[test]
    fn disconnected_endpoints_report_no_path() {
        use orp_topology::TopologyBuilder;

        let mut b = TopologyBuilder::new();
        let a = b.add_node();
        let c = b.add_node();
        let d = b.add_node();
        let e = b.add_node();
        b.add_link(a, c, 500.0, 0.05, 22.5, 3.0);
        b.add_link(d, e, 500.0, 0.05, 22.5, 3.0);
        let topo = b.build().unwrap();

        let opt = PathOptimizer::new(car());
        let err = opt.find_optimal_path(&topo, a, d).unwrap_err();
        assert!(matches!(err, RouteError::NoPathFound { .. }));
    }

    #[test]
    fn unknown_endpoint_rejected() {
        use orp_core::NodeId;

        let (topo, [n1, ..]) = city_map();
        let opt = PathOptimizer::new(car());
        let err = opt.find_optimal_path(&topo, n1, NodeId(99)).unwrap_err();
        assert!(matches!(err, RouteError::UnknownNode(_)));
    }

    #[test]
    fn faster_vehicle_changes_nothing_about_determinism() {
        // A different carrier profile re-scores paths but the query remains
        // a pure function of its inputs.
        let (topo, [n1, _, _, _, _, n6]) = city_map();
        let fast = PathOptimizer::new(Vehicle::new(30.0, 100.0).unwrap());
        let a = fast.find_optimal_path(&topo, n1, n6).unwrap();
        let b = fast.find_optimal_path(&topo, n1, n6).unwrap();
        assert_eq!(a, b);
    }
}
