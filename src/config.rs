//! Configuration module for the chat overlay.

use serde::Deserialize;
use std::path::Path;

use crate::chat::HIGHLIGHT_COLOUR;
use crate::{ChatError, Result};

/// Chat poster configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Username attached to messages posted through the overlay.
    #[serde(default = "default_username")]
    pub username: String,
    /// Colour given to the sender of important messages.
    #[serde(default = "default_highlight_colour")]
    pub highlight_colour: String,
}

fn default_username() -> String {
    "DummyUser".to_string()
}

fn default_highlight_colour() -> String {
    HIGHLIGHT_COLOUR.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            highlight_colour: default_highlight_colour(),
        }
    }
}

/// Dummy channel configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelConfig {
    /// Channel ID.
    #[serde(default)]
    pub id: u64,
    /// Channel name.
    #[serde(default = "default_channel_name")]
    pub name: String,
    /// Channel topic.
    #[serde(default = "default_channel_topic")]
    pub topic: String,
    /// Channel type.
    #[serde(rename = "type", default = "default_channel_type")]
    pub channel_type: String,
    /// Messages seeded into the channel before any step runs.
    #[serde(default = "default_seed_messages")]
    pub seed_messages: Vec<String>,
}

fn default_channel_name() -> String {
    "#Dummy".to_string()
}

fn default_channel_topic() -> String {
    "Test Chat".to_string()
}

fn default_channel_type() -> String {
    "Test".to_string()
}

fn default_seed_messages() -> Vec<String> {
    [
        "This message for test from offline.",
        "TestMessage",
        "!@#$%^&&*()",
        "testTEST",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            id: 0,
            name: default_channel_name(),
            topic: default_channel_topic(),
            channel_type: default_channel_type(),
            seed_messages: default_seed_messages(),
        }
    }
}

/// Harness runner configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarnessConfig {
    /// Read further input lines from stdin after the scripted steps.
    #[serde(default)]
    pub interactive: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/chat-overlay.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Chat poster configuration.
    #[serde(default)]
    pub chat: ChatConfig,
    /// Dummy channel configuration.
    #[serde(default)]
    pub channel: ChannelConfig,
    /// Harness runner configuration.
    #[serde(default)]
    pub harness: HarnessConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ChatError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ChatError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `CHAT_OVERLAY_USERNAME`: Override the poster's username
    pub fn apply_env_overrides(&mut self) {
        if let Ok(username) = std::env::var("CHAT_OVERLAY_USERNAME") {
            if !username.is_empty() {
                self.chat.username = username;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if the username or the channel name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.chat.username.trim().is_empty() {
            return Err(ChatError::Config("chat.username must not be blank".to_string()));
        }
        if self.channel.name.trim().is_empty() {
            return Err(ChatError::Config("channel.name must not be blank".to_string()));
        }
        Ok(())
    }
}
