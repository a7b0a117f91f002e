//! Player, Tier and Position data structures.

use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a player (opaque account id from the rating service).
pub type PlayerId = String;

/// Competitive rank category, lowest first.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    #[default]
    Unranked,
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    /// All tiers in ascending order.
    pub const ALL: [Tier; 11] = [
        Tier::Unranked,
        Tier::Iron,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Emerald,
        Tier::Diamond,
        Tier::Master,
        Tier::Grandmaster,
        Tier::Challenger,
    ];

    /// Map a raw tier string to a tier. Case-insensitive; anything unknown is `Unranked`.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "IRON" => Tier::Iron,
            "BRONZE" => Tier::Bronze,
            "SILVER" => Tier::Silver,
            "GOLD" => Tier::Gold,
            "PLATINUM" => Tier::Platinum,
            "EMERALD" => Tier::Emerald,
            "DIAMOND" => Tier::Diamond,
            "MASTER" => Tier::Master,
            "GRANDMASTER" => Tier::Grandmaster,
            "CHALLENGER" => Tier::Challenger,
            _ => Tier::Unranked,
        }
    }

    /// Master and above: league points are unbounded.
    pub fn is_apex(self) -> bool {
        matches!(self, Tier::Master | Tier::Grandmaster | Tier::Challenger)
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Tier::normalize).unwrap_or_default())
    }
}

/// Lane a player intends to play. Tracked for display only.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

/// A player as handed over by the rank lookup.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub summoner_name: String,
    #[serde(default)]
    pub tier: Tier,
    /// Division within the tier ("I".."IV"); empty for unranked and apex tiers.
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub league_points: u32,
    #[serde(default)]
    pub profile_icon_id: u32,
    #[serde(default)]
    pub position: Option<Position>,
}

impl Player {
    /// Create a player with the given rating. Rank, icon and position start empty.
    pub fn new(
        id: impl Into<PlayerId>,
        summoner_name: impl Into<String>,
        tier: Tier,
        league_points: u32,
    ) -> Self {
        Self {
            id: id.into(),
            summoner_name: summoner_name.into(),
            tier,
            rank: String::new(),
            league_points,
            profile_icon_id: 0,
            position: None,
        }
    }

    /// Set the division string (builder style).
    pub fn with_rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = rank.into();
        self
    }
}
