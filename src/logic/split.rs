//! Balanced split search: exhaustive 5/5 partition of a ten-player roster.

use crate::logic::balance::compare;
use crate::logic::strength::strength_of;
use crate::models::{Player, TeamSplit};

/// Players required for a balanced split.
pub const ROSTER_SIZE: usize = 10;
/// Players per side.
pub const TEAM_SIZE: usize = 5;

/// Errors raised by the split search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SplitError {
    /// Roster does not hold exactly `ROSTER_SIZE` players.
    InvalidRosterSize { actual: usize },
}

impl std::fmt::Display for SplitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitError::InvalidRosterSize { actual } => write!(
                f,
                "Exactly {} players required for balanced team creation (got {})",
                ROSTER_SIZE, actual
            ),
        }
    }
}

impl std::error::Error for SplitError {}

/// Find the 5/5 split with the smallest strength difference.
///
/// 1. Copy the roster and sort it by descending strength (stable).
/// 2. Walk the masks `0..1024` in ascending order, keeping those with five bits set (252).
/// 3. Set bits form red, clear bits form blue; the first strictly smaller difference wins.
///
/// The input slice is not mutated. Among equally balanced splits the first mask wins.
pub fn best_split(roster: &[Player]) -> Result<TeamSplit, SplitError> {
    if roster.len() != ROSTER_SIZE {
        return Err(SplitError::InvalidRosterSize {
            actual: roster.len(),
        });
    }

    let mut sorted: Vec<Player> = roster.to_vec();
    sorted.sort_by(|a, b| strength_of(b).total_cmp(&strength_of(a)));

    let mut best: Option<TeamSplit> = None;
    for mask in team_masks() {
        let (red, blue) = partition_by_mask(&sorted, mask);
        let report = compare(&red, &blue);
        let improves = best
            .as_ref()
            .map_or(true, |b| report.difference < b.report.difference);
        if improves {
            best = Some(TeamSplit { red, blue, report });
        }
    }

    // team_masks() always yields at least one mask for ROSTER_SIZE >= TEAM_SIZE.
    let split = best.ok_or(SplitError::InvalidRosterSize {
        actual: roster.len(),
    })?;
    log::debug!(
        "best split: red {:.3} vs blue {:.3} (difference {:.3})",
        split.report.red_strength,
        split.report.blue_strength,
        split.report.difference
    );
    Ok(split)
}

/// Bitmasks over `ROSTER_SIZE` bits with exactly `TEAM_SIZE` bits set, ascending.
fn team_masks() -> impl Iterator<Item = u32> {
    (0u32..1 << ROSTER_SIZE).filter(|m| m.count_ones() as usize == TEAM_SIZE)
}

/// Split `players` into (set bits, clear bits), preserving order.
fn partition_by_mask(players: &[Player], mask: u32) -> (Vec<Player>, Vec<Player>) {
    let mut red = Vec::with_capacity(TEAM_SIZE);
    let mut blue = Vec::with_capacity(players.len().saturating_sub(TEAM_SIZE));
    for (i, p) in players.iter().enumerate() {
        if mask & (1 << i) != 0 {
            red.push(p.clone());
        } else {
            blue.push(p.clone());
        }
    }
    (red, blue)
}
