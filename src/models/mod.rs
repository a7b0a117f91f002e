//! Data structures for the team balancer: players, teams, lobby state.

mod lobby;
mod player;
mod team;

pub use lobby::{Lobby, LobbyError, LobbyId};
pub use player::{Player, PlayerId, Position, Tier};
pub use team::{BalanceReport, Slot, TeamSide, TeamSplit};
