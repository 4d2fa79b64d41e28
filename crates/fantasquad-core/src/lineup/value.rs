// Market value resolution with fallback across sparse value fields.

use super::player::Player;

/// Pick the value used to rank and price a player.
///
/// Priority: current market value, then last-known value, then historical
/// value. The first one that is present, finite and strictly positive wins.
/// Returns 0.0 when none qualify, which keeps the player out of every pool.
pub fn resolve_value(player: &Player) -> f64 {
    [player.market_value, player.last_value, player.historical_value]
        .into_iter()
        .flatten()
        .find(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0)
}
