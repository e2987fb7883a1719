use crate::date::GameDate;
use serde_json::Value;
use thiserror::Error;

/// Base URL of the public miniscoreboard feed.
const FEED_BASE_URL: &str = "http://mlb.mlb.com/gdcross/components/game/mlb";

/// Errors from fetching or decoding the miniscoreboard feed.
#[derive(Debug, Error)]
pub enum MlbApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feed is missing required key '{0}'")]
    MissingKey(&'static str),

    #[error("feed 'game' entry is not an array")]
    NotAnArray,
}

/// HTTP client for the MLB miniscoreboard feed.
pub struct MlbClient {
    http: reqwest::Client,
    base_url: String,
}

impl MlbClient {
    pub fn new() -> Self {
        Self::with_base_url(FEED_BASE_URL)
    }

    /// Client against an alternate base URL. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        MlbClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Full feed URL for a date.
    pub fn feed_url(&self, date: GameDate) -> String {
        format!("{}/{}", self.base_url, date.feed_path())
    }

    /// Fetch the miniscoreboard feed for `date` and parse the body as JSON.
    ///
    /// A single GET with no headers, no query parameters and no timeout: an
    /// unresponsive server blocks the call until the connection drops. The
    /// connection is released once the body has been read, on both paths.
    pub async fn miniscoreboard(&self, date: GameDate) -> Result<Value, MlbApiError> {
        let url = self.feed_url(date);
        tracing::debug!("Fetching miniscoreboard feed from {}", url);
        let body = self.http.get(&url).send().await?.text().await?;
        parse_feed(&body)
    }
}

impl Default for MlbClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a raw feed body (UTF-8 text) into a JSON value.
pub fn parse_feed(body: &str) -> Result<Value, MlbApiError> {
    Ok(serde_json::from_str(body)?)
}
