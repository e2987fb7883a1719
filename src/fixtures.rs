/// Mock fixture data for testing
///
/// Deterministic feed bodies shared by unit tests and the mock provider, so
/// command output can be asserted without touching the network.
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::client::MlbApiError;
use crate::data_provider::ScoreboardProvider;
use crate::date::GameDate;

/// A feed with three games in assorted states, including one with most
/// leaf fields missing.
pub fn feed_with_games() -> Value {
    json!({
        "data": {
            "games": {
                "game": [
                    {
                        "home_team_name": "Cubs",
                        "home_team_runs": 4,
                        "away_team_name": "Cardinals",
                        "away_team_runs": 2,
                        "inning": 9,
                        "outs": 2,
                        "status": "In Progress"
                    },
                    {
                        "home_team_name": "Yankees",
                        "home_team_runs": 0,
                        "away_team_name": "Red Sox",
                        "away_team_runs": 5,
                        "inning": 7,
                        "outs": 1,
                        "status": "Final"
                    },
                    {
                        "home_team_name": "Giants",
                        "away_team_name": "Dodgers",
                        "status": "Preview"
                    }
                ]
            }
        }
    })
}

/// A structurally valid feed with no games scheduled.
pub fn feed_empty() -> Value {
    json!({"data": {"games": {"game": []}}})
}

/// A feed missing the `games` container, which must be treated as a fault.
pub fn feed_missing_games_key() -> Value {
    json!({"data": {"last_updated": "2024-03-07T21:00:00Z"}})
}

/// Provider that returns a canned feed instead of making real requests.
pub struct MockProvider {
    feed: Value,
}

impl MockProvider {
    pub fn new(feed: Value) -> Self {
        MockProvider { feed }
    }
}

#[async_trait]
impl ScoreboardProvider for MockProvider {
    async fn miniscoreboard(&self, date: GameDate) -> Result<Value, MlbApiError> {
        tracing::info!("MockProvider: returning canned feed for {}", date);
        Ok(self.feed.clone())
    }
}
