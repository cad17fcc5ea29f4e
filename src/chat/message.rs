//! Channel entry types: chat messages and informational records.

use chrono::{DateTime, Utc};

/// Colour given to the sender of an important message.
pub const HIGHLIGHT_COLOUR: &str = "#250cc9";

/// Identifier of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    /// Display name.
    pub username: String,
    /// Numeric user ID.
    pub id: i64,
    /// Name colour, set only for important messages.
    pub colour: Option<String>,
}

/// A chat message. Built by [`MessageFactory`](super::MessageFactory) and
/// never modified afterwards.
#[derive(Debug, Clone)]
pub struct Message {
    id: MessageId,
    content: String,
    sender: Sender,
    is_action: bool,
    timestamp: DateTime<Utc>,
}

impl Message {
    pub(crate) fn new(
        id: MessageId,
        content: String,
        sender: Sender,
        is_action: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content,
            sender,
            is_action,
            timestamp,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    pub fn is_action(&self) -> bool {
        self.is_action
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Format the message for display.
    pub fn format(&self) -> String {
        if self.is_action {
            format!("* {} {}", self.sender.username, self.content)
        } else {
            format!("<{}> {}", self.sender.username, self.content)
        }
    }
}

/// Kind of informational record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKind {
    /// Plain feedback, e.g. the help text.
    Info,
    /// Feedback about input that could not be handled.
    Error,
}

impl InfoKind {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoKind::Info => "info",
            InfoKind::Error => "error",
        }
    }
}

impl std::fmt::Display for InfoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A system-generated record shown in the channel log.
///
/// Informational records do not take an ID from the message sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoMessage {
    pub kind: InfoKind,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl InfoMessage {
    /// Create an informational record.
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            kind: InfoKind::Info,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create an error record.
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            kind: InfoKind::Error,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == InfoKind::Error
    }

    /// Format the record for display.
    pub fn format(&self) -> String {
        format!("*** {}", self.content)
    }
}

/// An entry in a channel's log.
#[derive(Debug, Clone)]
pub enum ChannelEntry {
    Message(Message),
    Info(InfoMessage),
}

impl ChannelEntry {
    /// Format the entry for display.
    pub fn format(&self) -> String {
        match self {
            ChannelEntry::Message(message) => message.format(),
            ChannelEntry::Info(info) => info.format(),
        }
    }

    /// The chat message, if this entry is one.
    pub fn as_message(&self) -> Option<&Message> {
        match self {
            ChannelEntry::Message(message) => Some(message),
            ChannelEntry::Info(_) => None,
        }
    }

    /// The informational record, if this entry is one.
    pub fn as_info(&self) -> Option<&InfoMessage> {
        match self {
            ChannelEntry::Message(_) => None,
            ChannelEntry::Info(info) => Some(info),
        }
    }
}

impl From<Message> for ChannelEntry {
    fn from(message: Message) -> Self {
        ChannelEntry::Message(message)
    }
}

impl From<InfoMessage> for ChannelEntry {
    fn from(info: InfoMessage) -> Self {
        ChannelEntry::Info(info)
    }
}
