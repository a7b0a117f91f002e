//! 5v5 team balancer web app: library with models and balancing logic.

pub mod logic;
pub mod models;

pub use logic::{
    auto_balance, best_split, compare, roster_strength, shuffle_teams, strength_of, tier_points,
    SplitError, TeamStats, BALANCE_THRESHOLD, ROSTER_SIZE, TEAM_SIZE,
};
pub use models::{
    BalanceReport, Lobby, LobbyError, LobbyId, Player, PlayerId, Position, Slot, TeamSide,
    TeamSplit, Tier,
};
