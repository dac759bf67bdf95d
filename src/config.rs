use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub messenger: MessengerConfig,
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Send API credentials and endpoint. The access token and verify token are
/// required at startup; the send URL is overridable so tests can point it at
/// a local mock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessengerConfig {
    pub access_token: Option<String>,
    pub verify_token: Option<String>,
    pub send_url: String,
}

impl Default for MessengerConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            verify_token: None,
            send_url: "https://graph.facebook.com/v2.6/me/messages".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub base_url: String,
    pub story_count: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "https://hacker-news.firebaseio.com/v0".to_string(),
            story_count: 5,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            messenger: MessengerConfig::default(),
            feed: FeedConfig::default(),
        }
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

pub fn resolve_config_path() -> PathBuf {
    env::var("STORY_RELAY_CONFIG")
        .ok()
        .map(PathBuf::from)
        .unwrap_or_else(|| expand_tilde("~/.story-relay/story-relay.json"))
}

pub fn load_config() -> Config {
    let config_path = resolve_config_path();

    let mut cfg = Config::default();

    if config_path.exists() {
        if let Ok(raw) = fs::read_to_string(&config_path) {
            if let Ok(file_cfg) = serde_json::from_str::<Config>(&raw) {
                cfg = file_cfg;
            }
        }
    }

    // Override from environment
    if let Ok(token) = env::var("STORY_RELAY_ACCESS_TOKEN") {
        if !token.trim().is_empty() {
            cfg.messenger.access_token = Some(token);
        }
    }

    if let Ok(token) = env::var("STORY_RELAY_VERIFY_TOKEN") {
        if !token.trim().is_empty() {
            cfg.messenger.verify_token = Some(token);
        }
    }

    if let Ok(url) = env::var("STORY_RELAY_SEND_URL") {
        if !url.trim().is_empty() {
            cfg.messenger.send_url = url;
        }
    }

    if let Ok(url) = env::var("STORY_RELAY_FEED_URL") {
        if !url.trim().is_empty() {
            cfg.feed.base_url = url;
        }
    }

    if let Ok(port) = env::var("STORY_RELAY_PORT") {
        if let Ok(port) = port.parse::<u16>() {
            cfg.server.port = port;
        }
    }

    cfg
}
