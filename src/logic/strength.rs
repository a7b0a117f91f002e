//! Strength scoring: tier points plus a league-point bonus.

use crate::models::{Player, Tier};

/// Fixed points per tier (UNRANKED = 0 .. CHALLENGER = 10).
pub fn tier_points(tier: Tier) -> u8 {
    match tier {
        Tier::Unranked => 0,
        Tier::Iron => 1,
        Tier::Bronze => 2,
        Tier::Silver => 3,
        Tier::Gold => 4,
        Tier::Platinum => 5,
        Tier::Emerald => 6,
        Tier::Diamond => 7,
        Tier::Master => 8,
        Tier::Grandmaster => 9,
        Tier::Challenger => 10,
    }
}

/// Strength of a single player: `tier_points + league_points / 1000`.
///
/// The LP bonus is not clamped, so 1500 LP adds 1.5.
pub fn strength_of(player: &Player) -> f64 {
    f64::from(tier_points(player.tier)) + f64::from(player.league_points) / 1000.0
}

/// Sum of `strength_of` over the roster. Empty roster is 0.
pub fn roster_strength(players: &[Player]) -> f64 {
    players.iter().fold(0.0, |acc, p| acc + strength_of(p))
}
