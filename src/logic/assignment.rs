//! Whole-lobby assignment: auto-balance through the split search, or random shuffle.

use crate::logic::split::{best_split, SplitError, ROSTER_SIZE, TEAM_SIZE};
use crate::models::{BalanceReport, Lobby, LobbyError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Replace red/blue with the most balanced split of every lobby player.
///
/// Requires exactly ten players; on error the lobby is left untouched.
pub fn auto_balance(lobby: &mut Lobby) -> Result<BalanceReport, LobbyError> {
    let split = best_split(&lobby.all_players())?;
    lobby.red = split.red;
    lobby.blue = split.blue;
    lobby.unassigned.clear();
    log::info!(
        "Lobby {} balanced (difference {:.2})",
        lobby.id,
        split.report.difference
    );
    Ok(split.report)
}

/// Randomly deal all ten lobby players into two teams of five.
pub fn shuffle_teams<R: Rng + ?Sized>(lobby: &mut Lobby, rng: &mut R) -> Result<(), LobbyError> {
    let count = lobby.player_count();
    if count != ROSTER_SIZE {
        return Err(SplitError::InvalidRosterSize { actual: count }.into());
    }
    let mut players = lobby.all_players();
    players.shuffle(rng);
    lobby.blue = players.split_off(TEAM_SIZE);
    lobby.red = players;
    lobby.unassigned.clear();
    Ok(())
}
