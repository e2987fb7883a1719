/// Trait for providing scoreboard data, abstracting over the real feed client
/// and mock implementations
use async_trait::async_trait;
use serde_json::Value;

use crate::client::{MlbApiError, MlbClient};
use crate::date::GameDate;

/// Trait for scoreboard data providers, implemented by both the real client
/// and fixture-backed mocks
#[async_trait]
pub trait ScoreboardProvider: Send + Sync {
    /// Get the raw miniscoreboard feed for a date
    async fn miniscoreboard(&self, date: GameDate) -> Result<Value, MlbApiError>;
}

#[async_trait]
impl ScoreboardProvider for MlbClient {
    async fn miniscoreboard(&self, date: GameDate) -> Result<Value, MlbApiError> {
        self.miniscoreboard(date).await
    }
}
