//! Channel manager.
//!
//! Holds every channel the worker context owns. Because the manager itself
//! lives inside the worker task, plain `&mut self` access is enough.

use std::collections::HashMap;

use tracing::info;

use super::channel::Channel;

/// The set of channels owned by the worker context.
#[derive(Debug, Default)]
pub struct ChannelManager {
    channels: HashMap<u64, Channel>,
}

impl ChannelManager {
    /// Create a new, empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new channel.
    ///
    /// Returns the channel if created, or None if a channel with that ID already exists.
    pub fn create_channel(
        &mut self,
        id: u64,
        name: impl Into<String>,
        topic: impl Into<String>,
        channel_type: impl Into<String>,
    ) -> Option<&mut Channel> {
        if self.channels.contains_key(&id) {
            return None;
        }

        let channel = Channel::new(id, name, topic, channel_type);
        info!(channel_id = id, name = channel.name(), "channel created");
        Some(self.channels.entry(id).or_insert(channel))
    }

    /// Get a channel by ID.
    pub fn get(&self, id: u64) -> Option<&Channel> {
        self.channels.get(&id)
    }

    /// Get a channel by ID for appending.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Channel> {
        self.channels.get_mut(&id)
    }

    /// List all channels, sorted by ID.
    pub fn list_channels(&self) -> Vec<ChannelInfo> {
        let mut result: Vec<ChannelInfo> = self
            .channels
            .values()
            .map(|channel| ChannelInfo {
                id: channel.id(),
                name: channel.name().to_string(),
                topic: channel.topic().to_string(),
                channel_type: channel.channel_type().to_string(),
                entry_count: channel.len(),
            })
            .collect();

        result.sort_by_key(|info| info.id);
        result
    }

    /// Get the number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Remove a channel, returning it if it existed.
    pub fn remove_channel(&mut self, id: u64) -> Option<Channel> {
        self.channels.remove(&id)
    }
}

/// Summary of a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub id: u64,
    pub name: String,
    pub topic: String,
    pub channel_type: String,
    /// Number of entries in the channel log.
    pub entry_count: usize,
}
