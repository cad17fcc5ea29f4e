//! Chat overlay: turns committed input lines into channel entries.
//!
//! Input is classified and messages are built on the caller's thread; the
//! append itself is always scheduled onto the worker context.

use tracing::debug;

use super::command::{parse_input, ChatInput};
use super::factory::{MessageDraft, MessageFactory};
use super::message::{InfoMessage, MessageId};
use super::worker::Scheduler;
use crate::Result;

/// What happened to a posted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    /// Empty or whitespace-only input; nothing was appended.
    Ignored,
    /// No channel is open; nothing was appended.
    NoChannel,
    /// A chat message was built and its append scheduled.
    Sent(MessageId),
    /// An informational record was scheduled instead of a chat message.
    Feedback(InfoMessage),
}

/// Single-line text input.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Take the current text, leaving the field empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

/// The chat overlay for one poster.
pub struct ChatOverlay {
    username: String,
    current_channel: Option<u64>,
    factory: MessageFactory,
    scheduler: Scheduler,
}

impl ChatOverlay {
    /// Create an overlay with no channel open.
    pub fn new(username: impl Into<String>, factory: MessageFactory, scheduler: Scheduler) -> Self {
        Self {
            username: username.into(),
            current_channel: None,
            factory,
            scheduler,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Make `channel_id` the target of posted lines.
    pub fn open_channel(&mut self, channel_id: u64) {
        self.current_channel = Some(channel_id);
    }

    pub fn close_channel(&mut self) {
        self.current_channel = None;
    }

    pub fn current_channel(&self) -> Option<u64> {
        self.current_channel
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Handle the commit event of an input field: clear it, then post its text.
    pub fn commit(&self, input: &mut TextInput) -> Result<PostOutcome> {
        let text = input.take();
        self.post_message(&text)
    }

    /// Interpret one line of input and post the result to the open channel.
    pub fn post_message(&self, text: &str) -> Result<PostOutcome> {
        let parsed = parse_input(text);
        if parsed == ChatInput::Empty {
            return Ok(PostOutcome::Ignored);
        }

        let Some(channel_id) = self.current_channel else {
            debug!("no channel open, dropping input");
            return Ok(PostOutcome::NoChannel);
        };

        let (content, is_action) = match parsed {
            ChatInput::Empty => return Ok(PostOutcome::Ignored),
            ChatInput::Message(content) => (content, false),
            ChatInput::Command(command) => {
                let name = command.name().to_string();
                match command.into_action() {
                    Ok(action) => (action, true),
                    Err(info) => {
                        debug!(command = %name, kind = %info.kind, "command answered");
                        self.scheduler.append_info(channel_id, info.clone())?;
                        return Ok(PostOutcome::Feedback(info));
                    }
                }
            }
        };

        let message = self.factory.build(
            MessageDraft::new(content)
                .sender(self.username.clone())
                .action(is_action),
        );
        let id = message.id();
        debug!(channel_id, message_id = %id, is_action, "scheduling message");
        self.scheduler.append_message(channel_id, message)?;
        Ok(PostOutcome::Sent(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{spawn, ChannelManager, InfoKind, MessageSequence};
    use std::sync::Arc;

    fn overlay() -> ChatOverlay {
        let mut channels = ChannelManager::new();
        channels.create_channel(0, "#Dummy", "Test Chat", "Test");
        let (scheduler, _handle) = spawn(channels);
        let factory = MessageFactory::new(Arc::new(MessageSequence::new()));

        let mut overlay = ChatOverlay::new("DummyUser", factory, scheduler);
        overlay.open_channel(0);
        overlay
    }

    #[tokio::test]
    async fn test_plain_message_is_sent_verbatim() {
        let overlay = overlay();

        let outcome = overlay.post_message("Hello").unwrap();
        assert_eq!(outcome, PostOutcome::Sent(MessageId(0)));

        let transcript = overlay.scheduler().transcript(0).await.unwrap();
        assert_eq!(transcript, vec!["<DummyUser> Hello"]);
    }

    #[tokio::test]
    async fn test_me_sends_action() {
        let overlay = overlay();

        let outcome = overlay.post_message("/me dances").unwrap();
        assert!(matches!(outcome, PostOutcome::Sent(_)));

        let transcript = overlay.scheduler().transcript(0).await.unwrap();
        assert_eq!(transcript, vec!["* DummyUser dances"]);
    }

    #[tokio::test]
    async fn test_me_without_action_gives_usage() {
        let overlay = overlay();

        for input in ["/me", "/me   "] {
            match overlay.post_message(input).unwrap() {
                PostOutcome::Feedback(info) => {
                    assert_eq!(info.kind, InfoKind::Error);
                    assert_eq!(info.content, "Usage: /me [action]");
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }

        let messages = overlay
            .scheduler()
            .query(|channels| channels.get(0).unwrap().messages().count())
            .await
            .unwrap();
        assert_eq!(messages, 0);
    }

    #[tokio::test]
    async fn test_empty_input_is_ignored() {
        let overlay = overlay();

        assert_eq!(overlay.post_message("").unwrap(), PostOutcome::Ignored);
        assert_eq!(overlay.post_message(" \t ").unwrap(), PostOutcome::Ignored);

        assert!(overlay.scheduler().transcript(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_channel_open() {
        let mut overlay = overlay();
        overlay.close_channel();

        assert_eq!(overlay.post_message("Hello").unwrap(), PostOutcome::NoChannel);
        assert!(overlay.scheduler().transcript(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_feedback_does_not_consume_ids() {
        let overlay = overlay();

        overlay.post_message("/help").unwrap();
        overlay.post_message("/foo bar").unwrap();
        let outcome = overlay.post_message("first").unwrap();

        assert_eq!(outcome, PostOutcome::Sent(MessageId(0)));
    }

    #[tokio::test]
    async fn test_commit_clears_input() {
        let overlay = overlay();
        let mut input = TextInput::new();
        input.set_text("typed line");

        let outcome = overlay.commit(&mut input).unwrap();
        assert!(matches!(outcome, PostOutcome::Sent(_)));
        assert_eq!(input.text(), "");

        let transcript = overlay.scheduler().transcript(0).await.unwrap();
        assert_eq!(transcript, vec!["<DummyUser> typed line"]);
    }

    #[tokio::test]
    async fn test_username_change_applies_to_later_messages() {
        let mut overlay = overlay();

        overlay.post_message("before").unwrap();
        overlay.set_username("WWWWWWWWWWWWWWW");
        overlay.post_message("after").unwrap();

        let transcript = overlay.scheduler().transcript(0).await.unwrap();
        assert_eq!(
            transcript,
            vec!["<DummyUser> before", "<WWWWWWWWWWWWWWW> after"]
        );
    }
}
