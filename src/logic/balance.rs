//! Pairwise balance report for two teams of any size.

use crate::logic::strength::roster_strength;
use crate::models::{BalanceReport, Player};

/// Teams whose strength differs by at most this much are balanced (inclusive).
pub const BALANCE_THRESHOLD: f64 = 2.0;

/// Compare two teams. Works on partially filled teams too (live indicator).
pub fn compare(red: &[Player], blue: &[Player]) -> BalanceReport {
    let red_strength = roster_strength(red);
    let blue_strength = roster_strength(blue);
    let difference = (red_strength - blue_strength).abs();
    BalanceReport {
        red_strength,
        blue_strength,
        difference,
        is_balanced: difference <= BALANCE_THRESHOLD,
    }
}
