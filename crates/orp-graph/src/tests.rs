//! Unit tests for the encounter-graph builder.

#[cfg(test)]
mod helpers {
    use orp_core::AgentId;

    use crate::ContactTable;

    pub const A: AgentId = AgentId(0);
    pub const B: AgentId = AgentId(1);
    pub const C: AgentId = AgentId(2);
    pub const D: AgentId = AgentId(3);
    pub const S: AgentId = AgentId(4);

    /// The five-agent reference fleet:
    ///
    ///   a meets b at 3 (p 0.7)   and d at 5 (p 0.8)
    ///   b meets c at 6 (p 0.6)
    ///   c meets s at 8 (p 0.9)
    ///   d meets s at 7 (p 0.85)
    pub fn fleet() -> ContactTable {
        let mut t = ContactTable::new();
        t.add_contact(A, B, 3.0, 0.7);
        t.add_contact(A, D, 5.0, 0.8);
        t.add_contact(B, C, 6.0, 0.6);
        t.add_contact(C, S, 8.0, 0.9);
        t.add_contact(D, S, 7.0, 0.85);
        t
    }
}

#[cfg(test)]
mod table {
    use super::helpers::{fleet, A, B, D, S};

    #[test]
    fn contacts_keep_insertion_order() {
        let t = fleet();
        let from_a = t.contacts(A);
        assert_eq!(from_a.len(), 2);
        assert_eq!(from_a[0].agent, B);
        assert_eq!(from_a[1].agent, D);
    }

    #[test]
    fn probability_is_directed() {
        let t = fleet();
        assert_eq!(t.probability(A, B), 0.7);
        // The reverse direction was never recorded.
        assert_eq!(t.probability(B, A), 0.0);
    }

    #[test]
    fn unknown_agent_has_no_contacts() {
        let t = fleet();
        assert!(t.contacts(S).is_empty());
        assert_eq!(t.agent_count(), 4);
    }
}

#[cfg(test)]
mod predict {
    use super::helpers::{fleet, A, B, C, D, S};
    use crate::{EncounterGraphBuilder, PredictOutcome};

    #[test]
    fn reference_fleet_reaches_destination() {
        let builder = EncounterGraphBuilder::new(0.6, 10.0).unwrap();
        let prediction = builder.predict(A, S, &fleet());

        // d (popped at 5) attaches s at 7 before c (popped at 6) can; the
        // query ends when s is popped at 7.
        assert_eq!(prediction.outcome, PredictOutcome::Reached { time: 7.0 });

        let g = &prediction.graph;
        let a_children: Vec<_> = g.children_of(A).map(|n| n.agent).collect();
        assert_eq!(a_children, vec![B, D]);
        assert_eq!(g.expected_time(B), Some(3.0));
        assert_eq!(g.expected_time(D), Some(5.0));

        let b_children: Vec<_> = g.children_of(B).map(|n| n.agent).collect();
        assert_eq!(b_children, vec![C]);
        assert_eq!(g.expected_time(C), Some(6.0));

        // s must be reachable no later than the slower branch would meet it.
        let s_time = g.expected_time(S).expect("destination attached");
        assert!(s_time <= 8.0, "got {s_time}");
        assert_eq!(g.node(S).unwrap().parent.map(|i| g.get(i).agent), Some(D));
    }

    #[test]
    fn root_has_time_zero_and_no_parent() {
        let builder = EncounterGraphBuilder::new(0.6, 10.0).unwrap();
        let g = builder.predict(A, S, &fleet()).graph;
        assert_eq!(g.root().agent, A);
        assert_eq!(g.root().expected_encounter_time, 0.0);
        assert!(g.root().parent.is_none());
    }

    #[test]
    fn threshold_prunes_low_probability_contacts() {
        // At threshold 0.75, a→b (0.7) and b→c (0.6) are pruned; only the
        // a→d→s branch survives.
        let builder = EncounterGraphBuilder::new(0.75, 10.0).unwrap();
        let prediction = builder.predict(A, S, &fleet());
        assert_eq!(prediction.outcome, PredictOutcome::Reached { time: 7.0 });
        let g = &prediction.graph;
        assert!(!g.contains(B));
        assert!(!g.contains(C));
        let agents: Vec<_> = g.agents().collect();
        assert_eq!(agents, vec![A, D, S]);
    }

    #[test]
    fn ttl_prunes_late_contacts() {
        // With ttl 6, both edges into s (at 7 and 8) are discarded.
        let builder = EncounterGraphBuilder::new(0.6, 6.0).unwrap();
        let prediction = builder.predict(A, S, &fleet());
        assert_eq!(prediction.outcome, PredictOutcome::Unreached);
        let g = &prediction.graph;
        assert!(g.contains(B) && g.contains(C) && g.contains(D));
        assert!(!g.contains(S));
    }

    #[test]
    fn empty_table_is_unreached_with_root_only() {
        let builder = EncounterGraphBuilder::new(0.6, 10.0).unwrap();
        let prediction = builder.predict(A, S, &crate::ContactTable::new());
        assert_eq!(prediction.outcome, PredictOutcome::Unreached);
        assert_eq!(prediction.graph.node_count(), 1);
    }

    #[test]
    fn source_equals_destination() {
        let builder = EncounterGraphBuilder::new(0.6, 10.0).unwrap();
        let prediction = builder.predict(A, A, &fleet());
        assert_eq!(prediction.outcome, PredictOutcome::Reached { time: 0.0 });
        assert_eq!(prediction.graph.node_count(), 1);
    }

    #[test]
    fn first_visit_fixes_parent() {
        use orp_core::AgentId;

        // d is offered by both b (time 6) and c (time 5), but b is popped
        // first (3 < 4), so d's parent is b even though c's offer is faster.
        let (a, b, c, d) = (AgentId(0), AgentId(1), AgentId(2), AgentId(3));
        let mut t = crate::ContactTable::new();
        t.add_contact(a, b, 3.0, 0.9);
        t.add_contact(a, c, 4.0, 0.9);
        t.add_contact(b, d, 6.0, 0.9);
        t.add_contact(c, d, 5.0, 0.9);

        let builder = EncounterGraphBuilder::new(0.5, 10.0).unwrap();
        let g = builder.predict(a, d, &t).graph;
        let parent = g.node(d).unwrap().parent.map(|i| g.get(i).agent);
        assert_eq!(parent, Some(b));
        assert_eq!(g.expected_time(d), Some(6.0));
    }

    #[test]
    fn equal_times_pop_deterministically() {
        use orp_core::AgentId;

        // Two frontier entries at time 3; the lower AgentId pops first, so
        // its contact claims d.
        let (a, b, c, d) = (AgentId(0), AgentId(1), AgentId(2), AgentId(3));
        let mut t = crate::ContactTable::new();
        t.add_contact(a, c, 3.0, 0.9); // inserted first, higher id
        t.add_contact(a, b, 3.0, 0.9);
        t.add_contact(b, d, 4.0, 0.9);
        t.add_contact(c, d, 4.0, 0.9);

        let builder = EncounterGraphBuilder::new(0.5, 10.0).unwrap();
        let g = builder.predict(a, d, &t).graph;
        let parent = g.node(d).unwrap().parent.map(|i| g.get(i).agent);
        assert_eq!(parent, Some(b), "lower AgentId should win the tie");
    }
}

#[cfg(test)]
mod validation {
    use crate::{EncounterGraphBuilder, GraphError};

    #[test]
    fn threshold_outside_unit_interval_rejected() {
        for t in [0.0, -0.5, 1.5, f64::NAN] {
            let err = EncounterGraphBuilder::new(t, 10.0).unwrap_err();
            assert!(matches!(err, GraphError::InvalidParameters { name: "threshold", .. }));
        }
    }

    #[test]
    fn threshold_of_exactly_one_accepted() {
        assert!(EncounterGraphBuilder::new(1.0, 10.0).is_ok());
    }

    #[test]
    fn nonpositive_ttl_rejected() {
        for ttl in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            let err = EncounterGraphBuilder::new(0.5, ttl).unwrap_err();
            assert!(matches!(err, GraphError::InvalidParameters { name: "ttl", .. }));
        }
    }
}
