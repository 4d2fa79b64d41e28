// Integration tests for the lineup engine.
//
// These run the full path a caller takes: load a roster CSV through the
// player source, enrich it, evaluate formations and inspect the result.

use std::collections::HashSet;
use std::path::Path;

use fantasquad_core::config;
use fantasquad_core::lineup::*;
use fantasquad_core::source;

// ===========================================================================
// Test helpers
// ===========================================================================

/// Fixture directory path (relative to the crate root, which is the cwd for
/// `cargo test`).
const FIXTURES: &str = "tests/fixtures";

fn fixture_roster() -> Vec<Player> {
    source::load_roster(&Path::new(FIXTURES).join("roster.csv")).expect("fixture roster loads")
}

fn occupant(eval: &LineupEvaluation, index: usize) -> Option<&AssignedPlayer> {
    eval.assignments[index].occupant.as_ref()
}

fn occupant_name(eval: &LineupEvaluation, index: usize) -> Option<&str> {
    occupant(eval, index).map(|o| o.player.name.as_str())
}

fn assert_partition(eval: &LineupEvaluation, pool: &[EnrichedPlayer]) {
    let assigned: Vec<u32> = eval
        .assignments
        .iter()
        .filter_map(|a| a.occupant.as_ref().map(|o| o.player.id))
        .collect();
    let assigned_set: HashSet<u32> = assigned.iter().copied().collect();
    assert_eq!(assigned.len(), assigned_set.len(), "player booked twice");

    let bench_set: HashSet<u32> = eval.bench.iter().map(|p| p.id).collect();
    assert!(assigned_set.is_disjoint(&bench_set));

    let pool_set: HashSet<u32> = pool.iter().map(|p| p.id).collect();
    let union: HashSet<u32> = assigned_set.union(&bench_set).copied().collect();
    assert_eq!(union, pool_set);
}

// ===========================================================================
// Roster loading + enrichment
// ===========================================================================

#[test]
fn fixture_roster_enriches_to_sixteen_players() {
    let players = fixture_roster();
    assert_eq!(players.len(), 18);

    let pool = enrich_pool(&players);
    let ids: HashSet<u32> = pool.iter().map(|p| p.id).collect();
    assert_eq!(pool.len(), 16);
    // Zero everywhere and "N/A" role are dropped.
    assert!(!ids.contains(&16));
    assert!(!ids.contains(&17));

    // de Vrij falls back to last value, Asllani to historical.
    let de_vrij = pool.iter().find(|p| p.id == 8).unwrap();
    assert_eq!(de_vrij.value, 6.0);
    let asllani = pool.iter().find(|p| p.id == 18).unwrap();
    assert_eq!(asllani.value, 3.0);
}

// ===========================================================================
// Auto selection
// ===========================================================================

#[test]
fn auto_picks_four_four_two_on_value() {
    // Every formation fills all eleven slots. Totals: 4-3-3 237, 4-4-2 238,
    // 3-5-2 238, 3-4-3 231, 4-2-3-1 237. 4-4-2 wins the tie with 3-5-2 by
    // coming first.
    let players = fixture_roster();
    let eval = evaluate_best_lineup(&players, FormationChoice::Auto).unwrap();

    assert_eq!(eval.formation, FormationKey::F442);
    assert_eq!(eval.filled, 11);
    assert_eq!(eval.total_value, 238.0);

    assert_eq!(occupant_name(&eval, 0), Some("Yann Sommer"));
    assert_eq!(occupant_name(&eval, 1), Some("Denzel Dumfries"));
    assert_eq!(occupant(&eval, 1).unwrap().chosen_role, Role::RightBack);
    assert_eq!(occupant_name(&eval, 4), Some("Francesco Acerbi"));
    assert_eq!(occupant(&eval, 4).unwrap().chosen_role, Role::CentralDefender);
    assert_eq!(occupant_name(&eval, 5), Some("Hakan Calhanoglu"));
    assert_eq!(occupant(&eval, 5).unwrap().chosen_role, Role::Trequartista);
    assert_eq!(occupant_name(&eval, 8), Some("Federico Dimarco"));
    assert_eq!(occupant(&eval, 8).unwrap().chosen_role, Role::WingBack);
    assert_eq!(occupant_name(&eval, 10), Some("Marcus Thuram"));
    assert_eq!(occupant(&eval, 10).unwrap().chosen_role, Role::PureStriker);

    let bench: Vec<&str> = eval.bench.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        bench,
        vec![
            "Davide Frattesi",
            "Mehdi Taremi",
            "Stefan de Vrij",
            "Kristjan Asllani",
            "Josep Martinez"
        ]
    );

    assert_partition(&eval, &enrich_pool(&players));
}

#[test]
fn fixed_formation_is_respected() {
    let players = fixture_roster();
    let eval =
        evaluate_best_lineup(&players, FormationChoice::Fixed(FormationKey::F433)).unwrap();

    assert_eq!(eval.formation, FormationKey::F433);
    assert_eq!(eval.filled, 11);
    assert_eq!(eval.total_value, 237.0);
    assert_eq!(occupant_name(&eval, 8), Some("Marcus Thuram"));
    assert_eq!(occupant(&eval, 8).unwrap().chosen_role, Role::Forward);
    assert_eq!(occupant_name(&eval, 9), Some("Lautaro Martinez"));
    assert_eq!(occupant_name(&eval, 10), Some("Mehdi Taremi"));
    assert_partition(&eval, &enrich_pool(&players));
}

#[test]
fn max_fill_agrees_when_greedy_already_fills_everything() {
    let players = fixture_roster();
    let greedy = evaluate_best_lineup(&players, FormationChoice::Auto).unwrap();
    let exact =
        evaluate_best_lineup_with(&players, FormationChoice::Auto, Strategy::MaxFill).unwrap();
    assert_eq!(greedy, exact);
}

#[test]
fn every_formation_respects_partition_and_role_legality() {
    let pool = enrich_pool(&fixture_roster());
    for template in templates() {
        for strategy in [Strategy::ScarcityGreedy, Strategy::MaxFill] {
            let eval = evaluate(template, &pool, strategy);
            assert_eq!(eval.slot_count(), template.slot_count());
            for a in &eval.assignments {
                if let Some(occ) = &a.occupant {
                    assert!(a.slot.allowed_roles.contains(&occ.chosen_role));
                    assert!(occ.player.roles.contains(&occ.chosen_role));
                }
            }
            assert_partition(&eval, &pool);
        }
    }
}

// ===========================================================================
// Degenerate rosters
// ===========================================================================

#[test]
fn roster_without_eligible_players_has_no_lineup() {
    let players =
        source::load_roster(&Path::new(FIXTURES).join("empty_roster.csv")).unwrap();
    assert_eq!(players.len(), 2);
    assert!(evaluate_best_lineup(&players, FormationChoice::Auto).is_none());
}

#[test]
fn roster_without_goalkeepers_leaves_goal_empty() {
    let players: Vec<Player> = fixture_roster()
        .into_iter()
        .filter(|p| p.role_label.as_deref() != Some("Por"))
        .collect();

    for key in FormationKey::ALL {
        let eval = evaluate_best_lineup(&players, FormationChoice::Fixed(key)).unwrap();
        assert!(eval.assignments[0].occupant.is_none(), "{key}");
        assert!(eval.filled <= eval.slot_count() - 1, "{key}");
    }
}

// ===========================================================================
// Config + source together
// ===========================================================================

#[test]
fn config_fixture_points_at_fixture_roster() {
    let config = config::load_config_file(&Path::new(FIXTURES).join("fantasquad.toml")).unwrap();
    assert_eq!(config.lineup.formation, FormationChoice::Fixed(FormationKey::F433));

    let players = source::load_roster(&config.source.roster).unwrap();
    let eval = evaluate_best_lineup_with(&players, config.lineup.formation, config.lineup.strategy)
        .unwrap();
    assert_eq!(eval.formation, FormationKey::F433);
    assert_eq!(eval.total_value, 237.0);
}
