use crate::config::FeedConfig;
use crate::error::RelayError;
use reqwest::Client;
use serde::Deserialize;

/// Detail record for one feed item. `url` is absent on self posts, which the
/// feed serves without a link field.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryDetail {
    pub title: String,
    #[serde(default)]
    pub url: String,
    pub by: String,
    pub score: i64,
    pub time: i64,
}

/// Read-only client for the story feed.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
    base_url: String,
}

impl FeedClient {
    pub fn new(http: Client, cfg: &FeedConfig) -> Self {
        Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Current top item identifiers, in the feed's ranking order.
    pub async fn top_story_ids(&self) -> Result<Vec<i64>, RelayError> {
        let url = format!("{}/topstories.json", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| RelayError::ContentSource(err.to_string()))?;
        if !resp.status().is_success() {
            return Err(RelayError::ContentSource(format!(
                "top stories request returned {}",
                resp.status()
            )));
        }
        resp.json()
            .await
            .map_err(|err| RelayError::ContentSource(err.to_string()))
    }

    pub async fn story_detail(&self, story_id: i64) -> Result<StoryDetail, RelayError> {
        let url = format!("{}/item/{}.json", self.base_url, story_id);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| RelayError::ContentSource(err.to_string()))?;
        if !resp.status().is_success() {
            return Err(RelayError::ContentSource(format!(
                "story {} request returned {}",
                story_id,
                resp.status()
            )));
        }
        resp.json()
            .await
            .map_err(|err| RelayError::ContentSource(err.to_string()))
    }
}
