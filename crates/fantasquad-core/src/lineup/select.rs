// Formation evaluation and best-lineup selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::assign::{build_assignments, pick_indices, Assignment, Strategy};
use super::formation::{FormationKey, FormationKeyError, FormationTemplate};
use super::player::{enrich_pool, EnrichedPlayer, Player};

// ---------------------------------------------------------------------------
// Formation choice
// ---------------------------------------------------------------------------

/// Which formations to consider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum FormationChoice {
    /// Try every registered formation and keep the best.
    #[default]
    Auto,
    Fixed(FormationKey),
}

impl FormationChoice {
    /// Formations to evaluate, in enumeration order.
    pub fn candidates(&self) -> Vec<FormationKey> {
        match self {
            FormationChoice::Auto => FormationKey::ALL.to_vec(),
            FormationChoice::Fixed(key) => vec![*key],
        }
    }
}

impl FromStr for FormationChoice {
    type Err = FormationKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            Ok(FormationChoice::Auto)
        } else {
            s.parse().map(FormationChoice::Fixed)
        }
    }
}

impl TryFrom<String> for FormationChoice {
    type Error = FormationKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for FormationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormationChoice::Auto => f.write_str("auto"),
            FormationChoice::Fixed(key) => write!(f, "{key}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// The outcome of fielding a pool in one formation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupEvaluation {
    pub formation: FormationKey,
    /// One entry per slot, in template order.
    pub assignments: Vec<Assignment>,
    /// Number of occupied slots.
    pub filled: usize,
    /// Sum of the values of the fielded players.
    pub total_value: f64,
    /// Eligible players left out, best value first.
    pub bench: Vec<EnrichedPlayer>,
}

impl LineupEvaluation {
    pub fn slot_count(&self) -> usize {
        self.assignments.len()
    }

    /// Strictly better: more slots filled, or as many with more value.
    fn beats(&self, other: &LineupEvaluation) -> bool {
        self.filled > other.filled
            || (self.filled == other.filled && self.total_value > other.total_value)
    }
}

/// Field `pool` in a single formation.
pub fn evaluate(
    template: &FormationTemplate,
    pool: &[EnrichedPlayer],
    strategy: Strategy,
) -> LineupEvaluation {
    let picks = pick_indices(template.slots, pool, strategy);
    let assignments = build_assignments(template.slots, pool, &picks);

    let mut used = vec![false; pool.len()];
    for &i in picks.iter().flatten() {
        used[i] = true;
    }
    let filled = assignments.iter().filter(|a| a.is_filled()).count();
    let total_value: f64 = assignments
        .iter()
        .filter_map(|a| a.occupant.as_ref())
        .map(|o| o.player.value)
        .sum();

    let mut bench: Vec<EnrichedPlayer> = pool
        .iter()
        .zip(&used)
        .filter(|(_, used)| !**used)
        .map(|(p, _)| p.clone())
        .collect();
    bench.sort_by(|a, b| b.value.total_cmp(&a.value));

    debug!(
        "{}: {}/{} slots filled, total value {:.1}, {} on bench",
        template.key,
        filled,
        template.slot_count(),
        total_value,
        bench.len()
    );

    LineupEvaluation {
        formation: template.key,
        assignments,
        filled,
        total_value,
        bench,
    }
}

/// Evaluate every candidate formation and keep the best.
///
/// Ordering: most filled slots, then strictly higher total value, then the
/// earliest formation in enumeration order. Returns `None` for an empty pool.
pub fn select_best(
    pool: &[EnrichedPlayer],
    choice: FormationChoice,
    strategy: Strategy,
) -> Option<LineupEvaluation> {
    if pool.is_empty() {
        return None;
    }

    let mut best: Option<LineupEvaluation> = None;
    for key in choice.candidates() {
        let candidate = evaluate(key.template(), pool, strategy);
        match &best {
            Some(current) if !candidate.beats(current) => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Enrich a raw roster and return its best lineup under the default strategy.
pub fn evaluate_best_lineup(players: &[Player], choice: FormationChoice) -> Option<LineupEvaluation> {
    evaluate_best_lineup_with(players, choice, Strategy::default())
}

/// Enrich a raw roster and return its best lineup under `strategy`.
pub fn evaluate_best_lineup_with(
    players: &[Player],
    choice: FormationChoice,
    strategy: Strategy,
) -> Option<LineupEvaluation> {
    let pool = enrich_pool(players);
    select_best(&pool, choice, strategy)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
