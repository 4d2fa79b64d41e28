// Slot-to-player assignment for a single formation.
//
// The default strategy is a scarcity-ordered greedy pass:
// 1. For every slot, list the eligible players by descending value (stable
//    on input order). Lists are built once against the full pool.
// 2. Visit slots with the fewest eligible players first; ties keep template
//    order.
// 3. Each slot takes its best candidate that no earlier slot has taken.
//
// This is a heuristic: it can leave a slot empty that a perfect matching
// would fill. `Strategy::MaxFill` is the opt-in exact alternative for the
// number of filled slots.

use serde::{Deserialize, Serialize};

use super::formation::Slot;
use super::player::EnrichedPlayer;
use super::role::Role;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How slots are matched to players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Scarcity-ordered greedy pass.
    #[default]
    ScarcityGreedy,
    /// Augmenting-path matching: always fills as many slots as possible.
    /// Total value is not guaranteed to be optimal.
    MaxFill,
}

/// A player placed in a slot, with the role that made them eligible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignedPlayer {
    pub player: EnrichedPlayer,
    pub chosen_role: Role,
}

/// One slot of a formation and whoever occupies it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub slot: Slot,
    pub occupant: Option<AssignedPlayer>,
}

impl Assignment {
    pub fn is_filled(&self) -> bool {
        self.occupant.is_some()
    }
}

// ---------------------------------------------------------------------------
// Candidate lists and scarcity order
// ---------------------------------------------------------------------------

/// Pool indices eligible for each slot, best value first.
fn candidate_lists(slots: &[Slot], pool: &[EnrichedPlayer]) -> Vec<Vec<usize>> {
    slots
        .iter()
        .map(|slot| {
            let mut eligible: Vec<usize> = pool
                .iter()
                .enumerate()
                .filter(|(_, p)| slot.accepts(&p.roles))
                .map(|(i, _)| i)
                .collect();
            // sort_by is stable, so equal values keep input order.
            eligible.sort_by(|&a, &b| pool[b].value.total_cmp(&pool[a].value));
            eligible
        })
        .collect()
}

/// Slot indices ordered by candidate count, then template position.
fn scarcity_order(candidates: &[Vec<usize>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by_key(|&slot| (candidates[slot].len(), slot));
    order
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn greedy_picks(candidates: &[Vec<usize>], order: &[usize], pool_len: usize) -> Vec<Option<usize>> {
    let mut consumed = vec![false; pool_len];
    let mut picks = vec![None; candidates.len()];

    for &slot in order {
        if let Some(&player) = candidates[slot].iter().find(|&&p| !consumed[p]) {
            consumed[player] = true;
            picks[slot] = Some(player);
        }
    }

    picks
}

fn max_fill_picks(candidates: &[Vec<usize>], order: &[usize], pool_len: usize) -> Vec<Option<usize>> {
    // owner[player] = slot currently holding that player
    let mut owner: Vec<Option<usize>> = vec![None; pool_len];

    for &slot in order {
        // A free candidate is an augmenting path of length one; take the best
        // of those first so the result matches the greedy pass where it can.
        if let Some(&player) = candidates[slot].iter().find(|&&p| owner[p].is_none()) {
            owner[player] = Some(slot);
            continue;
        }
        let mut visited = vec![false; pool_len];
        augment(slot, candidates, &mut owner, &mut visited);
    }

    let mut picks = vec![None; candidates.len()];
    for (player, slot) in owner.iter().enumerate() {
        if let Some(slot) = *slot {
            picks[slot] = Some(player);
        }
    }
    picks
}

/// Try to give `slot` a player, moving earlier holders along alternating paths.
fn augment(
    slot: usize,
    candidates: &[Vec<usize>],
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for &player in &candidates[slot] {
        if visited[player] {
            continue;
        }
        visited[player] = true;
        let can_take = match owner[player] {
            None => true,
            Some(holder) => augment(holder, candidates, owner, visited),
        };
        if can_take {
            owner[player] = Some(slot);
            return true;
        }
    }
    false
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Assign players to slots with the default scarcity-greedy strategy.
///
/// Returns one `Assignment` per slot, in the slots' original order. Never
/// fails: slots without an available eligible player are left empty.
pub fn assign(slots: &[Slot], pool: &[EnrichedPlayer]) -> Vec<Assignment> {
    assign_with(slots, pool, Strategy::ScarcityGreedy)
}

/// Assign players to slots with an explicit strategy.
pub fn assign_with(slots: &[Slot], pool: &[EnrichedPlayer], strategy: Strategy) -> Vec<Assignment> {
    let picks = pick_indices(slots, pool, strategy);
    build_assignments(slots, pool, &picks)
}

/// Pool index chosen for each slot, in slot order.
pub(crate) fn pick_indices(
    slots: &[Slot],
    pool: &[EnrichedPlayer],
    strategy: Strategy,
) -> Vec<Option<usize>> {
    let candidates = candidate_lists(slots, pool);
    let order = scarcity_order(&candidates);

    match strategy {
        Strategy::ScarcityGreedy => greedy_picks(&candidates, &order, pool.len()),
        Strategy::MaxFill => max_fill_picks(&candidates, &order, pool.len()),
    }
}

pub(crate) fn build_assignments(
    slots: &[Slot],
    pool: &[EnrichedPlayer],
    picks: &[Option<usize>],
) -> Vec<Assignment> {
    slots
        .iter()
        .zip(picks)
        .map(|(slot, &pick)| {
            let occupant = pick.and_then(|i| {
                let player = &pool[i];
                slot.matching_role(&player.roles).map(|chosen_role| AssignedPlayer {
                    player: player.clone(),
                    chosen_role,
                })
            });
            Assignment {
                slot: *slot,
                occupant,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
