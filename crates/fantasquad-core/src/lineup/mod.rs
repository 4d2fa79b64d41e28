// Lineup assignment engine: role normalization, value resolution, formation
// templates, slot assignment and formation selection.

pub mod assign;
pub mod formation;
pub mod player;
pub mod role;
pub mod select;
pub mod value;

pub use assign::{assign, assign_with, AssignedPlayer, Assignment, Strategy};
pub use formation::{templates, FormationKey, FormationKeyError, FormationTemplate, Slot};
pub use player::{enrich_pool, EnrichedPlayer, Player};
pub use role::{normalize_roles, Role, RoleSet};
pub use select::{
    evaluate, evaluate_best_lineup, evaluate_best_lineup_with, select_best, FormationChoice,
    LineupEvaluation,
};
pub use value::resolve_value;
