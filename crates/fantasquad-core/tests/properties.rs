// Property tests for the structural guarantees of the lineup engine.

use std::collections::HashSet;

use fantasquad_core::lineup::{
    evaluate, normalize_roles, select_best, templates, EnrichedPlayer, FormationChoice,
    FormationKey, Role, RoleSet, Strategy as Fill,
};
use proptest::prelude::*;

fn arb_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

fn arb_pool() -> impl Strategy<Value = Vec<EnrichedPlayer>> {
    prop::collection::vec(
        (prop::collection::btree_set(arb_role(), 1..4), 1u32..60),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (roles, value))| EnrichedPlayer {
                id: i as u32,
                name: format!("P{i}"),
                team: "TST".into(),
                roles,
                value: value as f64,
            })
            .collect()
    })
}

fn arb_strategy() -> impl Strategy<Value = Fill> {
    prop_oneof![
        Just(Fill::ScarcityGreedy),
        Just(Fill::MaxFill),
    ]
}

proptest! {
    /// No player occupies two slots, and every chosen role is legal.
    #[test]
    fn prop_no_double_booking_and_legal_roles(pool in arb_pool(), strategy in arb_strategy()) {
        for template in templates() {
            let eval = evaluate(template, &pool, strategy);
            let mut seen = HashSet::new();
            for a in &eval.assignments {
                if let Some(occ) = &a.occupant {
                    prop_assert!(seen.insert(occ.player.id));
                    prop_assert!(a.slot.allowed_roles.contains(&occ.chosen_role));
                    prop_assert!(occ.player.roles.contains(&occ.chosen_role));
                }
            }
            prop_assert_eq!(seen.len(), eval.filled);
        }
    }

    /// Bench and fielded players partition the pool.
    #[test]
    fn prop_bench_partitions_pool(pool in arb_pool(), strategy in arb_strategy()) {
        for template in templates() {
            let eval = evaluate(template, &pool, strategy);
            let fielded: HashSet<u32> = eval
                .assignments
                .iter()
                .filter_map(|a| a.occupant.as_ref().map(|o| o.player.id))
                .collect();
            let bench: HashSet<u32> = eval.bench.iter().map(|p| p.id).collect();
            prop_assert!(fielded.is_disjoint(&bench));
            prop_assert_eq!(fielded.len() + bench.len(), pool.len());
            let total: f64 = eval
                .assignments
                .iter()
                .filter_map(|a| a.occupant.as_ref())
                .map(|o| o.player.value)
                .sum();
            prop_assert_eq!(total, eval.total_value);
        }
    }

    /// The exact strategy never fills fewer slots than the greedy pass.
    #[test]
    fn prop_max_fill_dominates_greedy_fill(pool in arb_pool()) {
        for template in templates() {
            let greedy = evaluate(template, &pool, Fill::ScarcityGreedy);
            let exact = evaluate(template, &pool, Fill::MaxFill);
            prop_assert!(exact.filled >= greedy.filled);
        }
    }

    /// Auto selection is at least as good as every individual formation.
    #[test]
    fn prop_auto_selection_is_maximal(pool in arb_pool()) {
        let strategy = Fill::ScarcityGreedy;
        match select_best(&pool, FormationChoice::Auto, strategy) {
            None => prop_assert!(pool.is_empty()),
            Some(best) => {
                for key in FormationKey::ALL {
                    let other = evaluate(key.template(), &pool, strategy);
                    prop_assert!(
                        best.filled > other.filled
                            || (best.filled == other.filled && best.total_value >= other.total_value)
                    );
                }
            }
        }
    }

    /// Role labels normalize the same way whatever the token order and
    /// separators.
    #[test]
    fn prop_role_normalization_is_order_independent(
        roles in prop::collection::vec(arb_role(), 1..5),
        sep in prop::sample::select(vec!["/", ",", ";", " ", " / "]),
    ) {
        let forward: Vec<&str> = roles.iter().map(|r| r.code()).collect();
        let mut backward = forward.clone();
        backward.reverse();

        let a = normalize_roles(Some(forward.join(sep).as_str()));
        let b = normalize_roles(Some(backward.join("/").to_uppercase().as_str()));
        let expected: RoleSet = roles.iter().copied().collect();
        prop_assert_eq!(&a, &expected);
        prop_assert_eq!(a, b);
    }
}
