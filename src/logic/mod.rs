//! Team balance logic: strength scoring, balance reports, split search, lobby assignment.

mod assignment;
mod balance;
mod split;
mod stats;
mod strength;

pub use assignment::{auto_balance, shuffle_teams};
pub use balance::{compare, BALANCE_THRESHOLD};
pub use split::{best_split, SplitError, ROSTER_SIZE, TEAM_SIZE};
pub use stats::TeamStats;
pub use strength::{roster_strength, strength_of, tier_points};
