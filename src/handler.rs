use crate::channels::messenger::{generic_template_reply, send_generic_template, ReplyElement};
use crate::config::{FeedConfig, MessengerConfig};
use crate::error::RelayError;
use crate::feed::{FeedClient, StoryDetail};
use crate::types::MessagingEvent;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;

/// Business callback invoked once per dispatched messaging event. Injectable
/// so the webhook fan-out can be exercised with stub handlers.
#[async_trait]
pub trait MessagingHandler: Send + Sync {
    async fn handle(&self, event: MessagingEvent) -> Result<(), RelayError>;
}

/// Production handler: answers every user message with cards for the current
/// top feed stories.
pub struct StoryHandler {
    feed: FeedClient,
    http: Client,
    messenger: MessengerConfig,
    story_count: usize,
}

impl StoryHandler {
    pub fn new(http: Client, feed_cfg: &FeedConfig, messenger: MessengerConfig) -> Self {
        Self {
            feed: FeedClient::new(http.clone(), feed_cfg),
            http,
            messenger,
            story_count: feed_cfg.story_count,
        }
    }
}

#[async_trait]
impl MessagingHandler for StoryHandler {
    async fn handle(&self, event: MessagingEvent) -> Result<(), RelayError> {
        let story_ids = self.feed.top_story_ids().await?;

        // Detail fetches stay sequential to bound the outbound request rate
        // per reply; one failed fetch aborts the whole reply.
        let mut elements = Vec::new();
        for story_id in story_ids.iter().take(self.story_count) {
            let story = self.feed.story_detail(*story_id).await?;
            elements.push(story_element(&story, Utc::now()));
        }

        let reply = generic_template_reply(event.sender.id, elements);
        send_generic_template(&self.http, &self.messenger, &reply).await
    }
}

fn story_element(story: &StoryDetail, now: DateTime<Utc>) -> ReplyElement {
    ReplyElement {
        title: story.title.clone(),
        subtitle: format!(
            "{} points by {} {}",
            story.score,
            story.by,
            time_ago(story.time, now)
        ),
        item_url: story.url.clone(),
    }
}

fn time_ago(posted: i64, now: DateTime<Utc>) -> String {
    let elapsed = (now.timestamp() - posted).max(0);
    if elapsed < 60 {
        return "just now".to_string();
    }
    let (count, unit) = if elapsed < 3600 {
        (elapsed / 60, "minute")
    } else if elapsed < 86400 {
        (elapsed / 3600, "hour")
    } else {
        (elapsed / 86400, "day")
    };
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
