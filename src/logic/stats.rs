//! Per-team statistics for the comparison panel.

use crate::logic::strength::roster_strength;
use crate::models::{Player, PlayerId, Tier};
use serde::Serialize;

/// Summary of one team.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamStats {
    pub player_count: usize,
    pub total_strength: f64,
    pub average_strength: f64,
    pub average_league_points: f64,
    /// Tiers present on the team with their counts, highest tier first.
    pub tier_distribution: Vec<(Tier, usize)>,
    /// First player holding the team's highest tier.
    pub highest_tier_player: PlayerId,
}

impl TeamStats {
    /// Stats for a team; `None` if the team is empty.
    pub fn from_players(players: &[Player]) -> Option<Self> {
        let first = players.first()?;
        let count = players.len();
        let total_strength = roster_strength(players);
        let total_lp: u64 = players.iter().map(|p| u64::from(p.league_points)).sum();

        let tier_distribution = Tier::ALL
            .iter()
            .rev()
            .filter_map(|&tier| {
                let n = players.iter().filter(|p| p.tier == tier).count();
                (n > 0).then_some((tier, n))
            })
            .collect();

        let highest = players
            .iter()
            .fold(first, |best, p| if p.tier > best.tier { p } else { best });

        Some(Self {
            player_count: count,
            total_strength,
            average_strength: total_strength / count as f64,
            average_league_points: total_lp as f64 / count as f64,
            tier_distribution,
            highest_tier_player: highest.id.clone(),
        })
    }
}
