//! Chat channel: an append-only message log with a broadcast feed.
//!
//! Channels live on the worker context (see [`super::worker`]); every
//! append goes through a scheduled job there.

use tokio::sync::broadcast;

use super::factory::{MessageDraft, MessageFactory};
use super::message::{ChannelEntry, InfoMessage, Message, MessageId};

/// Maximum number of entries buffered for slow subscribers.
const CHANNEL_CAPACITY: usize = 100;

/// A chat channel.
pub struct Channel {
    id: u64,
    name: String,
    topic: String,
    channel_type: String,
    entries: Vec<ChannelEntry>,
    /// Next fallback sender number for seeded messages.
    seed_counter: i64,
    sender: broadcast::Sender<ChannelEntry>,
}

impl Channel {
    /// Create a new, empty channel.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        topic: impl Into<String>,
        channel_type: impl Into<String>,
    ) -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            id,
            name: name.into(),
            topic: topic.into(),
            channel_type: channel_type.into(),
            entries: Vec::new(),
            seed_counter: 0,
            sender,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn channel_type(&self) -> &str {
        &self.channel_type
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[ChannelEntry] {
        &self.entries
    }

    /// Chat messages only, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().filter_map(ChannelEntry::as_message)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a receiver for entries appended from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ChannelEntry> {
        self.sender.subscribe()
    }

    /// Append a chat message.
    ///
    /// Returns the number of subscribers that received it.
    pub fn append_message(&mut self, message: Message) -> usize {
        self.push(ChannelEntry::Message(message))
    }

    /// Append an informational record.
    ///
    /// Returns the number of subscribers that received it.
    pub fn append_info(&mut self, info: InfoMessage) -> usize {
        self.push(ChannelEntry::Info(info))
    }

    /// Seed an anonymous message, authored `User {n}` where `n` counts the
    /// messages seeded into this channel so far.
    pub fn add_new_message(&mut self, factory: &MessageFactory, text: impl Into<String>) -> MessageId {
        let number = self.seed_counter;
        self.seed_counter += 1;

        let message = factory.build(MessageDraft::new(text).number(number));
        let id = message.id();
        self.append_message(message);
        id
    }

    /// Display lines for every entry, oldest first.
    pub fn transcript(&self) -> Vec<String> {
        self.entries.iter().map(ChannelEntry::format).collect()
    }

    fn push(&mut self, entry: ChannelEntry) -> usize {
        self.entries.push(entry.clone());
        // No subscribers is fine; the entry is still in the log.
        self.sender.send(entry).unwrap_or(0)
    }
}

impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("topic", &self.topic)
            .field("channel_type", &self.channel_type)
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::MessageSequence;
    use std::sync::Arc;

    fn factory() -> MessageFactory {
        MessageFactory::new(Arc::new(MessageSequence::new()))
    }

    fn dummy() -> Channel {
        Channel::new(0, "#Dummy", "Test Chat", "Test")
    }

    #[test]
    fn test_channel_new() {
        let channel = dummy();
        assert_eq!(channel.id(), 0);
        assert_eq!(channel.name(), "#Dummy");
        assert_eq!(channel.topic(), "Test Chat");
        assert_eq!(channel.channel_type(), "Test");
        assert!(channel.is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let factory = factory();
        let mut channel = dummy();

        channel.append_message(factory.build(MessageDraft::new("one").sender("A")));
        channel.append_info(InfoMessage::info("two"));
        channel.append_message(factory.build(MessageDraft::new("three").sender("B")));

        assert_eq!(channel.len(), 3);
        assert_eq!(
            channel.transcript(),
            vec!["<A> one", "*** two", "<B> three"]
        );
        assert_eq!(channel.messages().count(), 2);
    }

    #[test]
    fn test_add_new_message_numbers_senders() {
        let factory = factory();
        let mut channel = dummy();

        channel.add_new_message(&factory, "TestMessage");
        channel.add_new_message(&factory, "testTEST");

        let names: Vec<&str> = channel
            .messages()
            .map(|m| m.sender().username.as_str())
            .collect();
        assert_eq!(names, vec!["User 0", "User 1"]);

        let ids: Vec<i64> = channel.messages().map(|m| m.sender().id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_seed_counter_is_per_channel() {
        let factory = factory();
        let mut a = dummy();
        let mut b = Channel::new(1, "#Other", "", "Test");

        a.add_new_message(&factory, "a0");
        a.add_new_message(&factory, "a1");
        b.add_new_message(&factory, "b0");

        let last = b.messages().last().unwrap();
        assert_eq!(last.sender().username, "User 0");
        // Message IDs still come from the shared sequence.
        assert_eq!(last.id(), MessageId(2));
    }

    #[test]
    fn test_append_without_subscribers() {
        let mut channel = dummy();
        assert_eq!(channel.append_info(InfoMessage::info("nobody listening")), 0);
        assert_eq!(channel.len(), 1);
    }

    #[tokio::test]
    async fn test_subscribe_receives_appends() {
        let factory = factory();
        let mut channel = dummy();
        let mut receiver = channel.subscribe();

        let delivered = channel.append_message(factory.build(MessageDraft::new("Hello").sender("DummyUser")));
        assert_eq!(delivered, 1);

        let entry = receiver.recv().await.unwrap();
        assert_eq!(entry.format(), "<DummyUser> Hello");
    }

    #[tokio::test]
    async fn test_broadcast_to_multiple_receivers() {
        let mut channel = dummy();
        let mut r1 = channel.subscribe();
        let mut r2 = channel.subscribe();

        assert_eq!(channel.append_info(InfoMessage::error("Usage: /me [action]")), 2);

        let e1 = r1.recv().await.unwrap();
        let e2 = r2.recv().await.unwrap();
        assert_eq!(e1.format(), e2.format());
    }
}
