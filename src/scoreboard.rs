use serde_json::Value;

use crate::client::MlbApiError;

/// One game projected out of the feed.
///
/// The feed is loosely typed, so every field is kept as raw JSON: a value
/// with an unexpected type passes through to the output unchanged. A leaf
/// that is absent from its entry defaults to the number 0 — including the
/// string columns, which therefore print `0` rather than blank when the feed
/// omits them.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub home_team_name: Value,
    pub home_team_runs: Value,
    pub away_team_name: Value,
    pub away_team_runs: Value,
    pub inning: Value,
    pub outs: Value,
    pub status: Value,
}

impl GameRecord {
    /// Extract the seven report fields from one feed entry.
    pub fn from_entry(entry: &Value) -> Self {
        GameRecord {
            home_team_name: leaf(entry, "home_team_name"),
            home_team_runs: leaf(entry, "home_team_runs"),
            away_team_name: leaf(entry, "away_team_name"),
            away_team_runs: leaf(entry, "away_team_runs"),
            inning: leaf(entry, "inning"),
            outs: leaf(entry, "outs"),
            status: leaf(entry, "status"),
        }
    }
}

/// Look up one leaf field, substituting 0 when it is absent.
fn leaf(entry: &Value, key: &str) -> Value {
    entry.get(key).cloned().unwrap_or(Value::from(0))
}

/// The day's games, in feed order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scoreboard {
    pub games: Vec<GameRecord>,
}

impl Scoreboard {
    /// Project a parsed feed into game records.
    ///
    /// The container path `data -> games -> game` is mandatory: a feed
    /// without it is rejected outright, with no defaulting. Only the leaf
    /// fields inside each entry are lenient (see [`GameRecord`]). Entry
    /// order is preserved as-is.
    pub fn from_feed(feed: &Value) -> Result<Self, MlbApiError> {
        let entries = feed
            .get("data")
            .ok_or(MlbApiError::MissingKey("data"))?
            .get("games")
            .ok_or(MlbApiError::MissingKey("games"))?
            .get("game")
            .ok_or(MlbApiError::MissingKey("game"))?
            .as_array()
            .ok_or(MlbApiError::NotAnArray)?;

        Ok(Scoreboard {
            games: entries.iter().map(GameRecord::from_entry).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
