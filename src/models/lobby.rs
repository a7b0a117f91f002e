//! Lobby: the red, blue and unassigned player lists for one match board.

use crate::logic::{compare, SplitError, TEAM_SIZE};
use crate::models::player::{Player, PlayerId, Position};
use crate::models::team::{BalanceReport, Slot, TeamSide};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during lobby operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LobbyError {
    /// A player with this id is already in the lobby.
    DuplicatePlayer(PlayerId),
    /// Player not found in any list.
    PlayerNotFound(PlayerId),
    /// Target team already holds `TEAM_SIZE` players.
    TeamFull(TeamSide),
    /// Player id is blank.
    EmptyPlayerId,
    /// Balancing or shuffling needs exactly ten players.
    Split(SplitError),
}

impl std::fmt::Display for LobbyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LobbyError::DuplicatePlayer(_) => write!(f, "Player has already been added"),
            LobbyError::PlayerNotFound(_) => write!(f, "Player not found"),
            LobbyError::TeamFull(side) => {
                let name = match side {
                    TeamSide::Red => "Red",
                    TeamSide::Blue => "Blue",
                };
                write!(f, "{} team already has {} players", name, TEAM_SIZE)
            }
            LobbyError::EmptyPlayerId => write!(f, "Player id must not be empty"),
            LobbyError::Split(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LobbyError {}

impl From<SplitError> for LobbyError {
    fn from(e: SplitError) -> Self {
        LobbyError::Split(e)
    }
}

/// Unique identifier for a lobby.
pub type LobbyId = Uuid;

/// Match board state: who is on which side. Each player id appears in at most one list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lobby {
    pub id: LobbyId,
    pub created_at: DateTime<Utc>,
    pub red: Vec<Player>,
    pub blue: Vec<Player>,
    /// Players added but not yet placed on a team.
    pub unassigned: Vec<Player>,
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new()
    }
}

impl Lobby {
    /// Create an empty lobby.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            red: Vec::new(),
            blue: Vec::new(),
            unassigned: Vec::new(),
        }
    }

    /// Create a lobby with all given players unassigned. Fails on duplicate ids.
    pub fn with_players(players: Vec<Player>) -> Result<Self, LobbyError> {
        let mut lobby = Self::new();
        for p in players {
            lobby.add_player(p)?;
        }
        Ok(lobby)
    }

    /// All players: red, then blue, then unassigned.
    pub fn all_players(&self) -> Vec<Player> {
        self.red
            .iter()
            .chain(self.blue.iter())
            .chain(self.unassigned.iter())
            .cloned()
            .collect()
    }

    pub fn player_count(&self) -> usize {
        self.red.len() + self.blue.len() + self.unassigned.len()
    }

    /// Which list holds the player, if any. Ids are matched ignoring surrounding whitespace.
    pub fn slot_of(&self, id: &str) -> Option<Slot> {
        let id = id.trim();
        if self.red.iter().any(|p| p.id == id) {
            Some(Slot::Red)
        } else if self.blue.iter().any(|p| p.id == id) {
            Some(Slot::Blue)
        } else if self.unassigned.iter().any(|p| p.id == id) {
            Some(Slot::Unassigned)
        } else {
            None
        }
    }

    /// Mutable reference to a player by id (searches all lists).
    pub fn get_player_mut(&mut self, id: &str) -> Option<&mut Player> {
        let id = id.trim();
        self.red
            .iter_mut()
            .chain(self.blue.iter_mut())
            .chain(self.unassigned.iter_mut())
            .find(|p| p.id == id)
    }

    /// Add a player to the unassigned pool. Ids must be unique across the lobby.
    pub fn add_player(&mut self, mut player: Player) -> Result<(), LobbyError> {
        let id = player.id.trim().to_string();
        if id.is_empty() {
            return Err(LobbyError::EmptyPlayerId);
        }
        if self.slot_of(&id).is_some() {
            return Err(LobbyError::DuplicatePlayer(id));
        }
        player.id = id;
        self.unassigned.push(player);
        Ok(())
    }

    /// Remove a player from whichever list holds them.
    pub fn remove_player(&mut self, id: &str) -> Result<Player, LobbyError> {
        self.take_player(id)
            .ok_or_else(|| LobbyError::PlayerNotFound(id.to_string()))
    }

    /// Move a player to a team or back to the pool (appended at the end).
    ///
    /// Moving onto a full team fails unless the player is already there (no-op).
    pub fn move_player(&mut self, id: &str, target: Slot) -> Result<(), LobbyError> {
        self.move_player_to(id, target, None)
    }

    /// Move a player into `target` at `index`, or append when `index` is `None` or past the end.
    ///
    /// With an index, a move within the same list reorders it. Without one it is a no-op.
    pub fn move_player_to(
        &mut self,
        id: &str,
        target: Slot,
        index: Option<usize>,
    ) -> Result<(), LobbyError> {
        let current = self
            .slot_of(id)
            .ok_or_else(|| LobbyError::PlayerNotFound(id.to_string()))?;
        if current == target && index.is_none() {
            return Ok(());
        }
        let full = match target {
            _ if current == target => None,
            Slot::Red if self.red.len() >= TEAM_SIZE => Some(TeamSide::Red),
            Slot::Blue if self.blue.len() >= TEAM_SIZE => Some(TeamSide::Blue),
            _ => None,
        };
        if let Some(side) = full {
            return Err(LobbyError::TeamFull(side));
        }
        let player = self
            .take_player(id)
            .ok_or_else(|| LobbyError::PlayerNotFound(id.to_string()))?;
        let list = self.list_mut(target);
        match index {
            Some(i) if i <= list.len() => list.insert(i, player),
            _ => list.push(player),
        }
        Ok(())
    }

    /// Set or clear a player's position.
    pub fn set_position(&mut self, id: &str, position: Option<Position>) -> Result<(), LobbyError> {
        let p = self
            .get_player_mut(id)
            .ok_or_else(|| LobbyError::PlayerNotFound(id.to_string()))?;
        p.position = position;
        Ok(())
    }

    /// Move everyone back to the unassigned pool (red, blue, then existing pool order).
    pub fn reset(&mut self) {
        let mut all = std::mem::take(&mut self.red);
        all.append(&mut self.blue);
        all.append(&mut self.unassigned);
        self.unassigned = all;
    }

    /// Live balance of the current red and blue lists.
    pub fn report(&self) -> BalanceReport {
        compare(&self.red, &self.blue)
    }

    fn list_mut(&mut self, slot: Slot) -> &mut Vec<Player> {
        match slot {
            Slot::Red => &mut self.red,
            Slot::Blue => &mut self.blue,
            Slot::Unassigned => &mut self.unassigned,
        }
    }

    fn take_player(&mut self, id: &str) -> Option<Player> {
        let id = id.trim();
        for slot in [Slot::Red, Slot::Blue, Slot::Unassigned] {
            let list = self.list_mut(slot);
            if let Some(idx) = list.iter().position(|p| p.id == id) {
                return Some(list.remove(idx));
            }
        }
        None
    }
}
