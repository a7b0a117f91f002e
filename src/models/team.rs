//! TeamSide, Slot, BalanceReport and TeamSplit for 5v5 matches.

use crate::models::player::Player;
use serde::{Deserialize, Serialize};

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Red,
    Blue,
}

/// Where a lobby player currently sits.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Red,
    Blue,
    #[default]
    Unassigned,
}

impl From<TeamSide> for Slot {
    fn from(side: TeamSide) -> Self {
        match side {
            TeamSide::Red => Slot::Red,
            TeamSide::Blue => Slot::Blue,
        }
    }
}

/// Strength comparison of two teams.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub red_strength: f64,
    pub blue_strength: f64,
    /// Always `|red_strength - blue_strength|`.
    pub difference: f64,
    pub is_balanced: bool,
}

impl BalanceReport {
    /// The stronger side, or `None` when the teams count as balanced.
    pub fn advantage(&self) -> Option<TeamSide> {
        if self.is_balanced {
            None
        } else if self.red_strength > self.blue_strength {
            Some(TeamSide::Red)
        } else {
            Some(TeamSide::Blue)
        }
    }
}

/// A 5/5 partition of a ten-player roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamSplit {
    pub red: Vec<Player>,
    pub blue: Vec<Player>,
    pub report: BalanceReport,
}
