//! Message construction.

use std::sync::Arc;

use chrono::Utc;

use super::message::{Message, Sender, HIGHLIGHT_COLOUR};
use super::sequence::MessageSequence;

/// Input for [`MessageFactory::build`].
#[derive(Debug, Clone, Default)]
pub struct MessageDraft {
    /// Message content.
    pub text: String,
    /// Sender name. Falls back to `"User {number}"` when unset.
    pub username: Option<String>,
    /// Action message (`/me`).
    pub is_action: bool,
    /// Important messages get the highlight colour.
    pub is_important: bool,
    /// Sender ID, also used for the fallback name.
    pub number: i64,
}

impl MessageDraft {
    /// Create a draft with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn sender(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn action(mut self, is_action: bool) -> Self {
        self.is_action = is_action;
        self
    }

    pub fn important(mut self, is_important: bool) -> Self {
        self.is_important = is_important;
        self
    }

    pub fn number(mut self, number: i64) -> Self {
        self.number = number;
        self
    }
}

/// Builds [`Message`]s with identifiers from a shared [`MessageSequence`].
#[derive(Debug, Clone)]
pub struct MessageFactory {
    sequence: Arc<MessageSequence>,
    highlight_colour: String,
}

impl MessageFactory {
    /// Create a factory using the default highlight colour.
    pub fn new(sequence: Arc<MessageSequence>) -> Self {
        Self::with_highlight_colour(sequence, HIGHLIGHT_COLOUR)
    }

    /// Create a factory with a custom highlight colour.
    pub fn with_highlight_colour(
        sequence: Arc<MessageSequence>,
        highlight_colour: impl Into<String>,
    ) -> Self {
        Self {
            sequence,
            highlight_colour: highlight_colour.into(),
        }
    }

    pub fn sequence(&self) -> &Arc<MessageSequence> {
        &self.sequence
    }

    /// Build a message. Takes exactly one identifier from the sequence.
    ///
    /// Text is not validated; callers reject blank input first.
    pub fn build(&self, draft: MessageDraft) -> Message {
        let id = self.sequence.next_id();
        let sender = Sender {
            username: draft
                .username
                .unwrap_or_else(|| format!("User {}", draft.number)),
            id: draft.number,
            colour: draft
                .is_important
                .then(|| self.highlight_colour.clone()),
        };
        Message::new(id, draft.text, sender, draft.is_action, Utc::now())
    }
}
