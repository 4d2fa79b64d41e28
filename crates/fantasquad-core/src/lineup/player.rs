// Raw players as delivered by a player source, and the enriched records the
// assignment engine works with.

use serde::Serialize;
use tracing::debug;

use super::role::{normalize_roles, RoleSet};
use super::value::resolve_value;

/// A player as supplied by the roster source, before any interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Unique identifier within a roster.
    pub id: u32,
    pub name: String,
    pub team: String,
    /// Free-text position label, e.g. "Dc/Dd".
    pub role_label: Option<String>,
    /// Current-season market value.
    pub market_value: Option<f64>,
    /// Last value known for the player (used when off the active list).
    pub last_value: Option<f64>,
    /// Older historical value, last resort.
    pub historical_value: Option<f64>,
}

/// A player ready for matching: recognized roles and a positive value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPlayer {
    pub id: u32,
    pub name: String,
    pub team: String,
    pub roles: RoleSet,
    pub value: f64,
}

impl EnrichedPlayer {
    /// Build an enriched record, or `None` if the player can never be fielded
    /// (no recognized role, or no positive value).
    pub fn from_player(player: &Player) -> Option<Self> {
        let roles = normalize_roles(player.role_label.as_deref());
        let value = resolve_value(player);
        if roles.is_empty() || value <= 0.0 {
            return None;
        }
        Some(EnrichedPlayer {
            id: player.id,
            name: player.name.clone(),
            team: player.team.clone(),
            roles,
            value,
        })
    }
}

/// Enrich a raw roster into the eligible pool, preserving input order.
pub fn enrich_pool(players: &[Player]) -> Vec<EnrichedPlayer> {
    let pool: Vec<EnrichedPlayer> = players.iter().filter_map(EnrichedPlayer::from_player).collect();
    if pool.len() < players.len() {
        debug!(
            "{} of {} players dropped (no recognized role or no positive value)",
            players.len() - pool.len(),
            players.len()
        );
    }
    pool
}
